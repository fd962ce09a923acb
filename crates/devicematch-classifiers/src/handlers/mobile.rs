//! Mobile handset families with non-uniform claim or tolerance logic.

use std::sync::Arc;

use devicematch_core::{DeviceId, Result};
use regex::Regex;

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::{
    first_slash, first_space, index_of_or_len, index_of_any_or_len, ordinal_index_of, second_slash,
};
use crate::normalizer::{pattern, NormalizerChain};
use crate::specific::{LgNormalizer, LgPlusNormalizer};

fn ordinal_or_zero(ua: &str, needle: &str, ordinal: usize) -> usize {
    ordinal_index_of(ua, needle, ordinal).unwrap_or(0)
}

/// Samsung handsets, covering the `SEC-`/`SPH`/`SGH`/`SCH` OEM prefixes
/// and the branded `Samsung` token.
pub struct SamsungClassifier {
    core: FamilyCore,
}

impl SamsungClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("samsung", generic.clone()),
        }
    }
}

impl Classifier for SamsungClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop
            && (ua.contains("Samsung")
                || ua.contains("SAMSUNG")
                || ["SEC-", "SPH", "SGH", "SCH"]
                    .iter()
                    .any(|p| ua.starts_with(p)))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ["SEC-", "SAMSUNG-", "SCH"].iter().any(|p| ua.starts_with(p)) {
            first_slash(ua)
        } else if ["Samsung", "SPH", "SGH"].iter().any(|p| ua.starts_with(p)) {
            first_space(ua)
        } else {
            second_slash(ua)
        };
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        if ua.starts_with("SAMSUNG") {
            self.core.index().ld_lookup(ua, 8)
        } else {
            let idx = ua.find("Samsung").unwrap_or(0);
            self.core
                .index()
                .ris_lookup(ua, index_of_or_len(ua, "/", idx))
        }
    }
}

/// BlackBerry version prefixes mapped to generic family identities.
/// Specific `major.minor` entries come before their bare-major fallback.
const BLACKBERRY_VERSION_IDS: &[(&str, &str)] = &[
    ("2.", "blackberry_generic_ver2"),
    ("3.2", "blackberry_generic_ver3_sub2"),
    ("3.3", "blackberry_generic_ver3_sub30"),
    ("3.5", "blackberry_generic_ver3_sub50"),
    ("3.6", "blackberry_generic_ver3_sub60"),
    ("3.7", "blackberry_generic_ver3_sub70"),
    ("4.1", "blackberry_generic_ver4_sub10"),
    ("4.2", "blackberry_generic_ver4_sub20"),
    ("4.3", "blackberry_generic_ver4_sub30"),
    ("4.5", "blackberry_generic_ver4_sub50"),
    ("4.6", "blackberry_generic_ver4_sub60"),
    ("4.7", "blackberry_generic_ver4_sub70"),
    ("4.", "blackberry_generic_ver4"),
    ("5.", "blackberry_generic_ver5"),
    ("6.", "blackberry_generic_ver6"),
];

pub struct BlackBerryClassifier {
    core: FamilyCore,
    version: Regex,
}

impl BlackBerryClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("blackberry", generic.clone()),
            version: pattern(r"BlackBerry[^/\s]+/(\d.\d)")?,
        })
    }
}

impl Classifier for BlackBerryClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.to_ascii_lowercase().contains("blackberry")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ua.starts_with("Mozilla/4") {
            second_slash(ua)
        } else if ua.starts_with("Mozilla/5") {
            ordinal_or_zero(ua, ";", 3)
        } else {
            first_slash(ua)
        };
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let caps = self.version.captures(ua)?;
        let version = &caps[1];
        BLACKBERRY_VERSION_IDS
            .iter()
            .find(|(prefix, _)| version.contains(prefix))
            .map(|(_, id)| (*id).to_string())
    }
}

pub struct SonyEricssonClassifier {
    core: FamilyCore,
}

impl SonyEricssonClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("sonyericsson", generic.clone()),
        }
    }
}

impl Classifier for SonyEricssonClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("Sony")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ua.starts_with("SonyEricsson") {
            first_slash(ua).saturating_sub(1)
        } else {
            second_slash(ua)
        };
        self.core.index().ris_lookup(ua, tolerance)
    }
}

pub struct MotorolaClassifier {
    core: FamilyCore,
}

impl MotorolaClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("motorola", generic.clone()),
        }
    }
}

impl Classifier for MotorolaClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop
            && (["Mot-", "MOT-", "MOTO", "moto"]
                .iter()
                .any(|p| ua.starts_with(p))
                || ua.contains("Motorola"))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ["Mot-", "MOT-", "Motorola"].iter().any(|p| ua.starts_with(p)) {
            first_slash(ua)
        } else {
            5
        };
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        if ua.contains("MIB/2.2") || ua.contains("MIB/BER2.2") {
            Some("mot_mib22_generic".to_string())
        } else {
            None
        }
    }
}

pub struct NokiaClassifier {
    core: FamilyCore,
}

impl NokiaClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("nokia", generic.clone()),
        }
    }
}

impl Classifier for NokiaClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("Nokia")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, first_slash(ua))
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        for (token, id) in [
            ("Series60", "nokia_generic_series60"),
            ("Series80", "nokia_generic_series80"),
            ("MeeGo", "nokia_generic_meego"),
        ] {
            if ua.contains(token) {
                return Some(id.to_string());
            }
        }
        None
    }
}

/// Series 40 handsets running the Ovi browser identify via `S40OviBrowser`
/// and keep the handset token after a `Nokia` landmark.
pub struct NokiaOviClassifier {
    core: FamilyCore,
}

impl NokiaOviClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("nokia_ovi", generic.clone()),
        }
    }
}

impl Classifier for NokiaOviClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("S40OviBrowser")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let idx = ua.find("Nokia")?;
        let tolerance = index_of_any_or_len(ua, &["/", " "], idx);
        self.core.index().ris_lookup(ua, tolerance)
    }
}

pub struct DoCoMoClassifier {
    core: FamilyCore,
}

impl DoCoMoClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("docomo", generic.clone()),
        }
    }
}

impl Classifier for DoCoMoClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.starts_with("DoCoMo")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = ordinal_index_of(ua, "/", 2).unwrap_or_else(|| index_of_or_len(ua, "(", 0));
        self.core.index().ris_lookup(ua, tolerance)
    }

    /// `DoCoMo/2.0 ...` keeps the browser generation at byte seven.
    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        Some(match ua.as_bytes().get(7) {
            Some(b'2') => "docomo_generic_jap_ver2".to_string(),
            _ => "docomo_generic_jap_ver1".to_string(),
        })
    }
}

pub struct KddiClassifier {
    core: FamilyCore,
}

impl KddiClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("kddi", generic.clone()),
        }
    }
}

impl Classifier for KddiClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("KDDI-")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ua.starts_with("KDDI/") {
            second_slash(ua)
        } else {
            first_slash(ua)
        };
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, _ua: &str) -> Option<DeviceId> {
        Some("opwv_v62_generic".to_string())
    }
}

pub struct LgClassifier {
    core: FamilyCore,
}

impl LgClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("lg", generic.with(Arc::new(LgNormalizer))),
        }
    }
}

impl Classifier for LgClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && (ua.contains("lg") || ua.contains("LG"))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let idx = ua.to_ascii_uppercase().find("LG").unwrap_or(0);
        self.core
            .index()
            .ris_lookup(ua, index_of_or_len(ua, "/", idx))
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, 7)
    }
}

/// LG U+ carrier builds. Matched purely by recovery against runtime and
/// platform token combinations; the Facebook shapes carry an extra token
/// and must be tested before their plain counterparts.
const LGPLUS_IDS: &[(&str, &[&str])] = &[
    (
        "generic_lguplus_rexos_facebook_browser",
        &["Windows NT 5", "POLARIS"],
    ),
    ("generic_lguplus_rexos_webviewer_browser", &["Windows NT 5"]),
    (
        "generic_lguplus_winmo_facebook_browser",
        &["Windows CE", "POLARIS"],
    ),
    (
        "generic_lguplus_android_webkit_browser",
        &["Android", "AppleWebKit"],
    ),
];

pub struct LgPlusClassifier {
    core: FamilyCore,
}

impl LgPlusClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new(
                "lguplus",
                generic.with(Arc::new(LgPlusNormalizer::new()?)),
            ),
        })
    }
}

impl Classifier for LgPlusClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && (ua.contains("LGUPLUS") || ua.contains("lgtelecom"))
    }

    fn conclusive_match(&self, _ua: &str) -> Option<DeviceId> {
        None
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        LGPLUS_IDS
            .iter()
            .find(|(_, tokens)| tokens.iter().all(|t| ua.contains(t)))
            .map(|(id, _)| (*id).to_string())
    }
}

pub struct NecClassifier {
    core: FamilyCore,
}

impl NecClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("nec", generic.clone()),
        }
    }
}

impl Classifier for NecClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && (ua.starts_with("NEC-") || ua.starts_with("KGT"))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ua.starts_with("NEC-") {
            first_slash(ua)
        } else {
            2
        };
        self.core.index().ris_lookup(ua, tolerance)
    }
}

pub struct PantechClassifier {
    core: FamilyCore,
}

impl PantechClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("pantech", generic.clone()),
        }
    }
}

impl Classifier for PantechClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop
            && ["Pantech", "PT-", "PANTECH", "PG-"]
                .iter()
                .any(|p| ua.starts_with(p))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = if ua.starts_with("Pantech") {
            5
        } else {
            first_slash(ua)
        };
        self.core.index().ris_lookup(ua, tolerance)
    }
}

pub struct SanyoClassifier {
    core: FamilyCore,
}

impl SanyoClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("sanyo", generic.clone()),
        }
    }
}

impl Classifier for SanyoClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop
            && (ua.starts_with("Sanyo") || ua.starts_with("SANYO") || ua.contains("MobilePhone"))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = match ua.find("MobilePhone") {
            Some(idx) => index_of_or_len(ua, "/", idx),
            None => first_slash(ua),
        };
        self.core.index().ris_lookup(ua, tolerance)
    }
}

/// Orange SPV handsets carry the model between the `SPV` token and the
/// following semicolon.
pub struct SpvClassifier {
    core: FamilyCore,
}

impl SpvClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("spv", generic.clone()),
        }
    }
}

impl Classifier for SpvClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("SPV")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let idx = ua.find("SPV").unwrap_or(0);
        self.core
            .index()
            .ris_lookup(ua, index_of_or_len(ua, ";", idx))
    }
}

pub struct NintendoClassifier {
    core: FamilyCore,
}

impl NintendoClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("nintendo", generic.clone()),
        }
    }

    fn is_ds_shape(ua: &str) -> bool {
        ua.starts_with("Mozilla") && ua.contains("Nitro") && ua.contains("Opera")
    }
}

impl Classifier for NintendoClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && (ua.contains("Nintendo") || Self::is_ds_shape(ua))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ld_lookup(ua, 0)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = if ua.contains("Nintendo Wii") {
            "nintendo_wii_ver1"
        } else if ua.contains("Nintendo DSi") {
            "nintendo_dsi_ver1"
        } else if Self::is_ds_shape(ua) {
            "nintendo_ds_ver1"
        } else {
            "nintendo_wii_ver1"
        };
        Some(id.to_string())
    }
}

pub struct WindowsPhoneClassifier {
    core: FamilyCore,
}

impl WindowsPhoneClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("windows_phone", generic.clone()),
        }
    }
}

impl Classifier for WindowsPhoneClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("Windows Phone")
    }

    fn conclusive_match(&self, _ua: &str) -> Option<DeviceId> {
        None
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        for (token, id) in [
            ("Windows Phone 6.5", "generic_ms_winmo6_5"),
            ("Windows Phone OS 7.0", "generic_ms_phone_os7"),
            ("Windows Phone OS 7.5", "generic_ms_phone_os7_5"),
        ] {
            if ua.contains(token) {
                return Some(id.to_string());
            }
        }
        None
    }
}

/// IE9 desktop-mode builds on Windows Phone 7.5 advertise `ZuneWP7`; they
/// never carry handset tokens, so classification rests on the Trident
/// engine version alone.
pub struct WindowsPhoneDesktopClassifier {
    core: FamilyCore,
}

impl WindowsPhoneDesktopClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("windows_phone_desktop", generic.clone()),
        }
    }
}

impl Classifier for WindowsPhoneDesktopClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, _ctx: &MatchContext) -> bool {
        ua.contains("ZuneWP7")
    }

    fn conclusive_match(&self, _ua: &str) -> Option<DeviceId> {
        None
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = if ua.contains("Trident/5.0") {
            "generic_ms_phone_os7_5_desktopmode"
        } else {
            "generic_ms_phone_os7_desktopmode"
        };
        Some(id.to_string())
    }
}

const OPERA_MINI_IDS: &[(&str, &str)] = &[
    ("Opera Mini/1", "generic_opera_mini_version1"),
    ("Opera Mini/2", "generic_opera_mini_version2"),
    ("Opera Mini/3", "generic_opera_mini_version3"),
    ("Opera Mini/4", "generic_opera_mini_version4"),
    ("Opera Mini/5", "generic_opera_mini_version5"),
];

pub struct OperaMiniClassifier {
    core: FamilyCore,
}

impl OperaMiniClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("opera_mini", generic.clone()),
        }
    }
}

impl Classifier for OperaMiniClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, _ctx: &MatchContext) -> bool {
        ua.contains("Opera Mini")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, first_slash(ua))
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        if let Some((_, id)) = OPERA_MINI_IDS.iter().find(|(token, _)| ua.contains(token)) {
            return Some((*id).to_string());
        }
        if ua.contains("Opera Mobi") {
            return Some("generic_opera_mini_version4".to_string());
        }
        Some("generic_opera_mini_version1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::generic_chain;

    fn mobile_ctx() -> MatchContext {
        MatchContext {
            mobile: true,
            desktop: false,
            smart_tv: false,
        }
    }

    #[test]
    fn samsung_tolerance_tracks_prefix_shape() {
        let mut c = SamsungClassifier::new(&generic_chain().unwrap());
        c.filter("SEC-SGHX210/1.0 UP.Browser/6.2.3.2", "samsung_x210".into());
        assert_eq!(
            c.conclusive_match("SEC-SGHX210/2.0 UP.Browser/6.2.3.8")
                .as_deref(),
            Some("samsung_x210")
        );
    }

    #[test]
    fn blackberry_version_map_prefers_specific_prefixes() {
        let c = BlackBerryClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("BlackBerry9000/4.6.0.167").as_deref(),
            Some("blackberry_generic_ver4_sub60")
        );
        assert_eq!(
            c.recovery_match("BlackBerry7730/4.0.0").as_deref(),
            Some("blackberry_generic_ver4")
        );
        assert_eq!(c.recovery_match("BlackBerry9000"), None);
    }

    #[test]
    fn windows_phone_versions() {
        let c = WindowsPhoneClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("Mozilla/5.0 (compatible; MSIE 9.0; Windows Phone OS 7.5; Trident/5.0)")
                .as_deref(),
            Some("generic_ms_phone_os7_5")
        );
        assert_eq!(c.recovery_match("Windows Phone 8.1"), None);
    }

    #[test]
    fn zune_desktop_mode_keys_on_trident() {
        let c = WindowsPhoneDesktopClassifier::new(&generic_chain().unwrap());
        assert!(c.can_handle("Mozilla/4.0 (compatible; MSIE 7.0; ZuneWP7)", &mobile_ctx()));
        assert_eq!(
            c.recovery_match("Mozilla/5.0 (compatible; Trident/5.0; ZuneWP7)")
                .as_deref(),
            Some("generic_ms_phone_os7_5_desktopmode")
        );
        assert_eq!(
            c.recovery_match("Mozilla/4.0 (compatible; ZuneWP7)").as_deref(),
            Some("generic_ms_phone_os7_desktopmode")
        );
    }

    #[test]
    fn opera_mini_recovery_is_total() {
        let c = OperaMiniClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("Opera/9.80 (J2ME/MIDP; Opera Mini/4.2)").as_deref(),
            Some("generic_opera_mini_version4")
        );
        assert_eq!(
            c.recovery_match("Opera Mobi/447; U").as_deref(),
            Some("generic_opera_mini_version4")
        );
        assert_eq!(
            c.recovery_match("something else").as_deref(),
            Some("generic_opera_mini_version1")
        );
    }

    #[test]
    fn lguplus_facebook_shapes_win_over_plain() {
        let c = LgPlusClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("POLARIS on Windows NT 5.1 lgtelecom").as_deref(),
            Some("generic_lguplus_rexos_facebook_browser")
        );
        assert_eq!(
            c.recovery_match("plain Windows NT 5.1 lgtelecom").as_deref(),
            Some("generic_lguplus_rexos_webviewer_browser")
        );
    }

    #[test]
    fn nintendo_recovery_shapes() {
        let c = NintendoClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("Opera/9.50 (Nintendo DSi; Opera/507)").as_deref(),
            Some("nintendo_dsi_ver1")
        );
        assert_eq!(
            c.recovery_match("Mozilla/4.0 (compatible; Nitro) Opera 8.50")
                .as_deref(),
            Some("nintendo_ds_ver1")
        );
    }

    #[test]
    fn docomo_generation_byte() {
        let c = DoCoMoClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("DoCoMo/2.0 N905i(c100;TB;W24H16)").as_deref(),
            Some("docomo_generic_jap_ver2")
        );
        assert_eq!(
            c.recovery_match("DoCoMo/1.0/N504i/c10/TB").as_deref(),
            Some("docomo_generic_jap_ver1")
        );
    }
}
