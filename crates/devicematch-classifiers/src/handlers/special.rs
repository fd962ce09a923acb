//! Set-top devices, e-readers, disguised handsets and non-interactive
//! agents.

use std::sync::Arc;

use devicematch_core::{DeviceId, Result, RIS_DELIMITER};

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::first_slash;
use crate::normalizer::NormalizerChain;
use crate::specific::{HtcMacNormalizer, KindleNormalizer, WebOsNormalizer};

fn delimiter_tolerance(ua: &str) -> Option<usize> {
    ua.find(RIS_DELIMITER).map(|idx| idx + RIS_DELIMITER.len())
}

/// Television and set-top browsers. Reference agents are long and nearly
/// constant per product, so the conclusive tier demands a full-length
/// prefix match.
pub struct SmartTvClassifier {
    core: FamilyCore,
}

impl SmartTvClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("smarttv", generic.clone()),
        }
    }
}

impl Classifier for SmartTvClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, _ua: &str, ctx: &MatchContext) -> bool {
        ctx.smart_tv
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, ua.len())
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = if ua.contains("SmartTV") {
            "generic_smarttv_browser"
        } else if ua.contains("GoogleTV") {
            "generic_smarttv_googletv_browser"
        } else if ua.contains("AppleTV") {
            "generic_smarttv_appletv_browser"
        } else if ua.contains("Boxee") {
            "generic_smarttv_boxeebox_browser"
        } else {
            "generic_smarttv_browser"
        };
        Some(id.to_string())
    }
}

/// Amazon Kindle readers and Kindle Fire tablets (including the Silk
/// browser).
pub struct KindleClassifier {
    core: FamilyCore,
}

impl KindleClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("kindle", generic.with(Arc::new(KindleNormalizer::new()?))),
        })
    }
}

impl Classifier for KindleClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, _ctx: &MatchContext) -> bool {
        ua.contains("Kindle") || ua.contains("Silk")
    }

    /// E-ink readers match just past the `Kindle/<digit>` generation;
    /// Fire tablets match on the Android discriminant prefix.
    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        if let Some(idx) = ua.find("Kindle/") {
            let tolerance = idx + "Kindle/".len() + 1;
            if matches!(ua.as_bytes().get(idx + "Kindle/".len()), Some(b'1'..=b'3')) {
                return self.core.index().ris_lookup(ua, tolerance);
            }
        }
        let tolerance = delimiter_tolerance(ua)?;
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        for (token, id) in [
            ("Kindle/1", "amazon_kindle_ver1"),
            ("Kindle/2", "amazon_kindle2_ver1"),
            ("Kindle/3", "amazon_kindle3_ver1"),
        ] {
            if ua.contains(token) {
                return Some(id.to_string());
            }
        }
        if ua.contains("Kindle Fire") || ua.contains("Silk") {
            return Some("amazon_kindle_fire_ver1".to_string());
        }
        Some("generic_amazon_kindle".to_string())
    }
}

pub struct WebOsClassifier {
    core: FamilyCore,
}

impl WebOsClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("webos", generic.with(Arc::new(WebOsNormalizer::new()?))),
        })
    }
}

impl Classifier for WebOsClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && (ua.contains("webOS") || ua.contains("hpwOS"))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = delimiter_tolerance(ua)?;
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = if ua.contains("hpwOS/3") {
            "hp_tablet_webos_generic"
        } else {
            "hp_webos_generic"
        };
        Some(id.to_string())
    }
}

/// HTC Android builds that present as Macintosh Safari. The normalizer
/// surfaces the HTC model as the discriminant; anything unmatched falls
/// to a single generic identity.
pub struct HtcMacClassifier {
    core: FamilyCore,
}

impl HtcMacClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("htc_mac", generic.with(Arc::new(HtcMacNormalizer::new()?))),
        })
    }
}

impl Classifier for HtcMacClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, _ctx: &MatchContext) -> bool {
        ua.starts_with("Mozilla/5.0 (Macintosh") && ua.contains("HTC")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = delimiter_tolerance(ua)?;
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, _ua: &str) -> Option<DeviceId> {
        Some("generic_android_htc_disguised_as_mac".to_string())
    }
}

const BOT_KEYWORDS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "novarra",
    "transcoder",
    "yahoo! searchmonkey",
    "yahoo! slurp",
    "feedfetcher-google",
    "toolbar",
    "mowser",
    "mediapartners-google",
    "azureus",
    "inquisitor",
    "baiduspider",
    "baidumobaider",
    "holmes/",
    "libwww-perl",
    "netsprint",
    "yandex",
    "cfnetwork",
    "ineturl",
    "jakarta",
    "lorkyll",
    "microsoft url control",
    "indy library",
    "slurp",
    "crawl",
    "wget",
    "ucweblient",
    "rma",
    "snoopy",
    "untrursted",
    "mozfdsilla",
    "ask jeeves",
    "jeeves/teoma",
    "mechanize",
    "http client",
    "servicemonitor",
    "httpunit",
    "hatena",
    "ichiro",
];

/// Crawlers, transcoders and other non-interactive agents, intercepted
/// before the desktop browser families see them.
pub struct BotClassifier {
    core: FamilyCore,
}

impl BotClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("bot_crawler_transcoder", generic.clone()),
        }
    }
}

impl Classifier for BotClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, _ctx: &MatchContext) -> bool {
        let lowered = ua.to_ascii_lowercase();
        BOT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, first_slash(ua))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::generic_chain;

    fn ctx() -> MatchContext {
        MatchContext {
            mobile: false,
            desktop: false,
            smart_tv: false,
        }
    }

    #[test]
    fn kindle_generations() {
        let c = KindleClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("Mozilla/4.0 (compatible; Linux 2.6.22) NetFront/3.4 Kindle/2.5")
                .as_deref(),
            Some("amazon_kindle2_ver1")
        );
        assert_eq!(
            c.recovery_match("Mozilla/5.0 (Linux; Android 2.3.4; Kindle Fire) Silk/1.0")
                .as_deref(),
            Some("amazon_kindle_fire_ver1")
        );
        assert_eq!(
            c.recovery_match("Kindle something unversioned").as_deref(),
            Some("generic_amazon_kindle")
        );
    }

    #[test]
    fn webos_tablet_split() {
        let c = WebOsClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("Mozilla/5.0 (hp-tablet; hpwOS/3.0.0)").as_deref(),
            Some("hp_tablet_webos_generic")
        );
        assert_eq!(
            c.recovery_match("Mozilla/5.0 (webOS/1.4.0; U)").as_deref(),
            Some("hp_webos_generic")
        );
    }

    #[test]
    fn bot_keywords_are_case_insensitive() {
        let c = BotClassifier::new(&generic_chain().unwrap());
        assert!(c.can_handle("Googlebot/2.1 (+http://www.google.com/bot.html)", &ctx()));
        assert!(c.can_handle("Mozilla/5.0 (compatible; YandexBot/3.0)", &ctx()));
        assert!(!c.can_handle("NokiaN95/2.0", &ctx()));
    }

    #[test]
    fn smarttv_recovery_per_product() {
        let c = SmartTvClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("Mozilla/5.0 GoogleTV/162671").as_deref(),
            Some("generic_smarttv_googletv_browser")
        );
        assert_eq!(
            c.recovery_match("AppleTV/2.4").as_deref(),
            Some("generic_smarttv_appletv_browser")
        );
    }

    #[test]
    fn htc_mac_matches_on_model_discriminant() {
        let mut c = HtcMacClassifier::new(&generic_chain().unwrap()).unwrap();
        let reference = "Mozilla/5.0 (Macintosh; U; HTC Sensation Z710e; en-gb) AppleWebKit/533.1";
        c.filter(reference, "htc_sensation".into());

        let probe = "Mozilla/5.0 (Macintosh; U; HTC Sensation Z710e; de-de) AppleWebKit/534.9";
        let normalized = c.normalizer().normalize(probe);
        assert_eq!(c.conclusive_match(&normalized).as_deref(), Some("htc_sensation"));
    }
}
