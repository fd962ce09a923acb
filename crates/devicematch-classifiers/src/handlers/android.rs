//! Android handset classifier.

use std::sync::Arc;

use devicematch_core::{DeviceId, Result, RIS_DELIMITER};

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::{index_of_or_len, second_slash};
use crate::normalizer::NormalizerChain;
use crate::specific::AndroidNormalizer;

/// Opera Mini builds that report a fixed bait prefix instead of the
/// handset; the prefix length is the only usable discriminant.
const OPERA_MINI_BAIT_PREFIXES: &[&str] = &[
    "Opera/9.80 (J2ME/MIDP; Opera Mini/5",
    "Opera/9.80 (Android; Opera Mini/5.0",
    "Opera/9.80 (Android; Opera Mini/5.1",
];

pub struct AndroidClassifier {
    core: FamilyCore,
}

impl AndroidClassifier {
    pub fn new(generic: &NormalizerChain) -> Result<Self> {
        let normalizer = generic.with(Arc::new(AndroidNormalizer::new()?));
        Ok(Self {
            core: FamilyCore::new("android", normalizer),
        })
    }

    /// Pick the prefix cut point for the normalized agent. Agents carrying
    /// the discriminant prefix match on it in full; browser-on-Android
    /// shapes cut at their own version landmarks.
    fn tolerance(ua: &str) -> usize {
        if let Some(idx) = ua.find(RIS_DELIMITER) {
            return idx + RIS_DELIMITER.len();
        }
        if ua.contains("Opera Mini") {
            if ua.contains("Build/") {
                return index_of_or_len(ua, "Build/", 0);
            }
            for prefix in OPERA_MINI_BAIT_PREFIXES {
                if ua.starts_with(prefix) {
                    return prefix.len();
                }
            }
            return second_slash(ua);
        }
        if ua.contains("Fennec") || ua.contains("Firefox") {
            return index_of_or_len(ua, ")", 0);
        }
        for token in ["UCWEB7", "NetFrontLifeBrowser/2.2"] {
            if let Some(idx) = ua.find(token) {
                return (idx + token.len()).min(ua.len());
            }
        }
        index_of_or_len(ua, "Build/", 0).min(index_of_or_len(ua, "AppleWebKit", 0))
    }
}

impl Classifier for AndroidClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        !ctx.desktop && ua.contains("Android")
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        self.core.index().ris_lookup(ua, Self::tolerance(ua))
    }
}
