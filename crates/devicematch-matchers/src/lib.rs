//! Approximate string matching primitives for user-agent classification.
//!
//! Two complementary matchers operate over a sorted collection of
//! registered user agents:
//!
//! * [`ris`] finds the entry sharing the longest common prefix with the
//!   needle, via binary search. Suited to agents with a stable identifying
//!   prefix (vendor tokens, `Vendor-Model/` shapes).
//! * [`ld`] finds the entry within a Levenshtein edit-distance tolerance,
//!   via a pruned linear scan. Suited to agents that differ in scattered
//!   version digits rather than their head.
//!
//! Both take a `tolerance`: the minimum prefix length for RIS, the maximum
//! edit distance for LD.

pub mod ld;
pub mod ris;
