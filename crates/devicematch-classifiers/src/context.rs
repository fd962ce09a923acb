//! Per-call classification context.

/// Cross-cutting flags computed once per top-level `match`/`filter` call
/// from the raw user agent and threaded through the classifiers and the
/// catch-all heuristics.
///
/// Immutable after construction, so a single chain can serve concurrent
/// queries without shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    /// The user agent carries a mobile-browser keyword.
    pub mobile: bool,
    /// The user agent carries a desktop-browser keyword.
    pub desktop: bool,
    /// The user agent carries a smart-TV keyword.
    pub smart_tv: bool,
}
