//! Desktop browser families. All of them refuse agents carrying mobile
//! keywords; phones running these engines are claimed earlier in the
//! chain.

use std::sync::Arc;

use devicematch_core::{DeviceId, Result};
use regex::Regex;

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::{first_slash, index_of_or_len};
use crate::normalizer::{pattern, NormalizerChain};
use crate::specific::{ChromeNormalizer, FirefoxNormalizer, MsieNormalizer, OperaNormalizer};

const FIREFOX_IDS: &[&str] = &[
    "firefox",
    "firefox_1",
    "firefox_2",
    "firefox_3",
    "firefox_4_0",
    "firefox_5_0",
    "firefox_6_0",
    "firefox_7_0",
    "firefox_8_0",
    "firefox_9_0",
    "firefox_10_0",
    "firefox_11_0",
    "firefox_12_0",
];

const OPERA_IDS: &[&str] = &[
    "opera", "opera_7", "opera_8", "opera_9", "opera_10", "opera_11", "opera_12",
];

pub struct ChromeClassifier {
    core: FamilyCore,
}

impl ChromeClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("chrome", generic.with(Arc::new(ChromeNormalizer))),
        }
    }
}

impl Classifier for ChromeClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.mobile && ua.contains("Chrome")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let idx = ua.find("Chrome").unwrap_or(0);
        self.core
            .index()
            .ris_lookup(ua, index_of_or_len(ua, "/", idx))
    }

    fn recovery_match(&self, _ua: &str) -> Option<DeviceId> {
        Some("google_chrome".to_string())
    }
}

pub struct FirefoxClassifier {
    core: FamilyCore,
    version: Regex,
}

impl FirefoxClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("firefox", generic.with(Arc::new(FirefoxNormalizer))),
            version: pattern(r"Firefox/(\d+)\.\d")?,
        })
    }
}

impl Classifier for FirefoxClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.mobile
            && !["Tablet", "Sony", "Novarra", "Opera"]
                .iter()
                .any(|t| ua.contains(t))
            && ua.contains("Firefox")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, index_of_or_len(ua, ".", 0))
    }

    /// Versions 1 to 3 have single-segment identities; 4 and later carry a
    /// `_0` suffix. Unknown majors fall back to the plain family identity.
    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = self
            .version
            .captures(ua)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map(|major| {
                if major <= 3 {
                    format!("firefox_{major}")
                } else {
                    format!("firefox_{major}_0")
                }
            });
        Some(match id {
            Some(id) if FIREFOX_IDS.contains(&id.as_str()) => id,
            _ => "firefox".to_string(),
        })
    }
}

pub struct MsieClassifier {
    core: FamilyCore,
    legacy_shape: Regex,
}

impl MsieClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("msie", generic.with(Arc::new(MsieNormalizer))),
            legacy_shape: pattern(r"^Mozilla/4\.0 \(compatible; MSIE (\d)\.(\d);")?,
        })
    }
}

impl Classifier for MsieClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.mobile
            && !["Opera", "armv", "MOTO", "BREW"]
                .iter()
                .any(|t| ua.contains(t))
            && ua.starts_with("Mozilla")
            && ua.contains("MSIE")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        if let Some(caps) = self.legacy_shape.captures(ua) {
            let id = match &caps[1] {
                "7" => "msie_7",
                "8" => "msie_8",
                "9" => "msie_9",
                "6" => "msie_6",
                "5" => {
                    if &caps[2] == "5" {
                        "msie_5_5"
                    } else {
                        "msie_5"
                    }
                }
                _ => "msie",
            };
            return Some(id.to_string());
        }
        self.core.index().ris_lookup(ua, first_slash(ua))
    }
}

pub struct OperaClassifier {
    core: FamilyCore,
    version: Regex,
}

impl OperaClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("opera", generic.with(Arc::new(OperaNormalizer::new()?))),
            version: pattern(r"Opera[ /]?(\d+)\.\d+")?,
        })
    }
}

impl Classifier for OperaClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.mobile && ua.contains("Opera")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let idx = ua.find("Opera").unwrap_or(0);
        self.core
            .index()
            .ris_lookup(ua, index_of_or_len(ua, ".", idx))
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let id = self
            .version
            .captures(ua)
            .map(|caps| format!("opera_{}", &caps[1]));
        Some(match id {
            Some(id) if OPERA_IDS.contains(&id.as_str()) => id,
            _ => "opera".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::generic_chain;

    fn desktop_ctx() -> MatchContext {
        MatchContext {
            mobile: false,
            desktop: true,
            smart_tv: false,
        }
    }

    #[test]
    fn msie_legacy_shape_is_conclusive() {
        let c = MsieClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.conclusive_match("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)")
                .as_deref(),
            Some("msie_8")
        );
        assert_eq!(
            c.conclusive_match("Mozilla/4.0 (compatible; MSIE 5.5; Windows 98)")
                .as_deref(),
            Some("msie_5_5")
        );
    }

    #[test]
    fn msie_refuses_opera_spoof() {
        let c = MsieClassifier::new(&generic_chain().unwrap()).unwrap();
        assert!(!c.can_handle(
            "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1) Opera 8.50",
            &desktop_ctx()
        ));
    }

    #[test]
    fn firefox_recovery_versions() {
        let c = FirefoxClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("Firefox/3.6.13").as_deref(),
            Some("firefox_3")
        );
        assert_eq!(
            c.recovery_match("Firefox/8.0.1").as_deref(),
            Some("firefox_8_0")
        );
        assert_eq!(
            c.recovery_match("Firefox/99.0").as_deref(),
            Some("firefox")
        );
    }

    #[test]
    fn opera_recovery_major() {
        let c = OperaClassifier::new(&generic_chain().unwrap()).unwrap();
        assert_eq!(
            c.recovery_match("Opera/11.50 (Windows NT 6.1)").as_deref(),
            Some("opera_11")
        );
        assert_eq!(c.recovery_match("Opera").as_deref(), Some("opera"));
    }

    #[test]
    fn chrome_recovery_is_constant() {
        let c = ChromeClassifier::new(&generic_chain().unwrap());
        assert_eq!(
            c.recovery_match("Chrome/13.0.782.112").as_deref(),
            Some("google_chrome")
        );
    }
}
