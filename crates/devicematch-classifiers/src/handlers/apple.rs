//! Apple handheld classifier (iPhone, iPad, iPod touch).

use devicematch_core::{DeviceId, Result};
use regex::Regex;

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::normalizer::{pattern, NormalizerChain};

const IPOD_IDS: &[&str] = &[
    "apple_ipod_touch_ver1",
    "apple_ipod_touch_ver2",
    "apple_ipod_touch_ver3",
    "apple_ipod_touch_ver4",
    "apple_ipod_touch_ver5",
];

const IPHONE_IDS: &[&str] = &[
    "apple_iphone_ver1",
    "apple_iphone_ver2",
    "apple_iphone_ver3",
    "apple_iphone_ver4",
    "apple_iphone_ver5",
];

pub struct AppleClassifier {
    core: FamilyCore,
    os_version: Regex,
}

impl AppleClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        Ok(Self {
            core: FamilyCore::new("apple", generic.clone()),
            os_version: pattern(r" (\d)_(\d)[ _]")?,
        })
    }

    /// Major iOS version from the ` <major>_<minor>` token, if present.
    fn major_version(&self, ua: &str) -> Option<u32> {
        self.os_version
            .captures(ua)
            .and_then(|caps| caps[1].parse().ok())
    }
}

impl Classifier for AppleClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop
            && ua.starts_with("Mozilla/5")
            && ["iPhone", "iPad", "iPod"].iter().any(|t| ua.contains(t))
    }

    /// Cut just past the first underscore of the iOS version, or past the
    /// `like Mac OS X;` landmark when the version is undotted.
    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        let tolerance = match ua.find('_') {
            Some(idx) => idx + 1,
            None => match ua.find("like Mac OS X;") {
                Some(idx) => idx + "like Mac OS X;".len(),
                None => ua.len(),
            },
        };
        self.core.index().ris_lookup(ua, tolerance)
    }

    fn recovery_match(&self, ua: &str) -> Option<DeviceId> {
        let major = self.major_version(ua);
        if ua.contains("iPod") {
            let id = major.map(|v| format!("apple_ipod_touch_ver{v}"));
            return Some(match id {
                Some(id) if IPOD_IDS.contains(&id.as_str()) => id,
                _ => "apple_ipod_touch_ver1".to_string(),
            });
        }
        if ua.contains("iPad") {
            return Some(
                match major {
                    Some(5) => "apple_ipad_ver1_sub5",
                    Some(4) => "apple_ipad_ver1_sub42",
                    _ => "apple_ipad_ver1",
                }
                .to_string(),
            );
        }
        if ua.contains("iPhone") {
            let id = major.map(|v| format!("apple_iphone_ver{v}"));
            return Some(match id {
                Some(id) if IPHONE_IDS.contains(&id.as_str()) => id,
                _ => "apple_iphone_ver1".to_string(),
            });
        }
        None
    }
}
