//! Fuzzy user-agent classification.
//!
//! A [`ClassifierChain`] routes every raw user agent to exactly one family
//! classifier, which resolves it through four tiers: exact lookup of the
//! normalized agent, a family-specific fuzzy search, version-marker
//! recovery, and a shared catch-all that always produces an identity.
//!
//! Classifiers are populated by streaming the reference catalog through
//! [`ClassifierChain::filter`]; each reference agent lands in the index of
//! the classifier that will claim it at match time.

pub mod chain;
pub mod classifier;
pub mod context;
pub mod cutpoints;
pub mod extract;
pub mod handlers;
pub mod index;
pub mod markers;
pub mod normalizer;
pub mod specific;

pub use chain::ClassifierChain;
pub use classifier::{Classifier, FamilyCore};
pub use context::MatchContext;
pub use index::LocalIndex;
pub use markers::Markers;
pub use normalizer::{generic_chain, Normalizer, NormalizerChain};
