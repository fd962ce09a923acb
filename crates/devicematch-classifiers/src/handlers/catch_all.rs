//! Terminal classifier. Claims everything, so construction of a chain
//! without it is rejected.

use devicematch_core::DeviceId;

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::first_slash;
use crate::index::LocalIndex;
use crate::normalizer::NormalizerChain;

const MOZILLA_TOLERANCE: usize = 5;

/// Last resort for agents no family claimed. Mozilla/4 and Mozilla/5
/// agents are partitioned into their own indexes and matched by edit
/// distance; everything else goes through the main index with a prefix
/// search up to the first slash.
pub struct CatchAllClassifier {
    core: FamilyCore,
    mozilla4: LocalIndex,
    mozilla5: LocalIndex,
}

impl CatchAllClassifier {
    pub fn new(generic: &NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new("catch_all", generic.clone()),
            mozilla4: LocalIndex::new(),
            mozilla5: LocalIndex::new(),
        }
    }

    /// Edit-distance search over one Mozilla partition. Skipped when the
    /// probe embeds a registered agent verbatim; such probes are proxy
    /// wrappers and a distance-5 neighbor would be a coincidence.
    fn mozilla_partition_match(partition: &LocalIndex, ua: &str) -> Option<DeviceId> {
        if partition.keys().any(|key| ua.contains(key)) {
            return None;
        }
        partition.ld_lookup(ua, MOZILLA_TOLERANCE)
    }
}

impl Classifier for CatchAllClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, _ua: &str, _ctx: &MatchContext) -> bool {
        true
    }

    fn is_catch_all(&self) -> bool {
        true
    }

    fn exact_match(&self, ua: &str) -> Option<DeviceId> {
        self.core
            .index()
            .get(ua)
            .or_else(|| self.mozilla4.get(ua))
            .or_else(|| self.mozilla5.get(ua))
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        if ua.starts_with("Mozilla/5") {
            return Self::mozilla_partition_match(&self.mozilla5, ua);
        }
        if ua.starts_with("Mozilla/4") {
            return Self::mozilla_partition_match(&self.mozilla4, ua);
        }
        if ua.starts_with("Mozilla") {
            return self.core.index().ld_lookup(ua, MOZILLA_TOLERANCE);
        }
        self.core.index().ris_lookup(ua, first_slash(ua))
    }

    fn filter(&mut self, ua: &str, device_id: DeviceId) {
        let normalized = self.normalizer().normalize(ua);
        if normalized.starts_with("Mozilla/4") {
            self.mozilla4.insert(normalized, device_id);
        } else if normalized.starts_with("Mozilla/5") {
            self.mozilla5.insert(normalized, device_id);
        } else {
            self.core.index_mut().insert(normalized, device_id);
        }
    }
}
