//! The classifier contract and the shared four-tier match procedure.

use devicematch_core::{is_blank_or_generic, DeviceId};

use crate::context::MatchContext;
use crate::index::LocalIndex;
use crate::markers::{recovery_catch_all, Markers};
use crate::normalizer::NormalizerChain;

/// State every family classifier carries: its name, its normalization
/// pipeline and its local slice of the catalog.
pub struct FamilyCore {
    name: &'static str,
    normalizer: NormalizerChain,
    index: LocalIndex,
}

impl FamilyCore {
    pub fn new(name: &'static str, normalizer: NormalizerChain) -> Self {
        Self {
            name,
            normalizer,
            index: LocalIndex::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn normalizer(&self) -> &NormalizerChain {
        &self.normalizer
    }

    pub fn index(&self) -> &LocalIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut LocalIndex {
        &mut self.index
    }
}

/// A family classifier. Implementations supply the claim test and the
/// conclusive and recovery tiers; exact lookup, the tier cascade and
/// catalog filtering are provided.
///
/// The tier cascade in [`Classifier::apply_match`] is total: if every
/// family-specific tier declines or yields a generic identity, the shared
/// [`recovery_catch_all`] produces one.
pub trait Classifier: Send + Sync {
    fn core(&self) -> &FamilyCore;

    fn core_mut(&mut self) -> &mut FamilyCore;

    /// Whether this classifier claims the raw user agent. The first
    /// claimant in the chain wins, so the test must be cheap and must not
    /// depend on normalization.
    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool;

    /// Tier two: family-specific fuzzy lookup over the normalized agent.
    fn conclusive_match(&self, ua: &str) -> Option<DeviceId>;

    /// Tier three: version-marker heuristics mapping to generic family
    /// identities. Declines by default.
    fn recovery_match(&self, _ua: &str) -> Option<DeviceId> {
        None
    }

    /// Marks the mandatory terminal classifier.
    fn is_catch_all(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        self.core().name()
    }

    fn normalizer(&self) -> &NormalizerChain {
        self.core().normalizer()
    }

    /// Tier one: exact lookup of the normalized agent.
    fn exact_match(&self, ua: &str) -> Option<DeviceId> {
        self.core().index().get(ua)
    }

    /// Record a reference agent in this classifier's local index under its
    /// normalized form.
    fn filter(&mut self, ua: &str, device_id: DeviceId) {
        let normalized = self.normalizer().normalize(ua);
        self.core_mut().index_mut().insert(normalized, device_id);
    }

    /// Run the four tiers. A tier's result only stands if it names a
    /// concrete identity; blank or fully generic results fall through.
    fn apply_match(&self, ua: &str, ctx: &MatchContext, markers: &Markers) -> DeviceId {
        let normalized = self.normalizer().normalize(ua);
        if let Some(id) = self.exact_match(&normalized) {
            if !is_blank_or_generic(&id) {
                return id;
            }
        }
        if let Some(id) = self.conclusive_match(&normalized) {
            if !is_blank_or_generic(&id) {
                return id;
            }
        }
        if let Some(id) = self.recovery_match(&normalized) {
            if !is_blank_or_generic(&id) {
                return id;
            }
        }
        recovery_catch_all(&normalized, ctx, markers)
    }
}
