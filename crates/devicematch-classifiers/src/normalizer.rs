//! User-agent normalization pipeline.
//!
//! A [`NormalizerChain`] is an ordered list of stateless, idempotent
//! transforms applied left to right before any classification step. The
//! generic chain strips cross-cutting noise (transcoder proxies, serial
//! numbers, locale tags); families append their own normalizer where the
//! reference catalog clusters better under a rewritten form. Every
//! normalizer returns its input unchanged when its pattern is absent.

use std::sync::Arc;

use regex::Regex;

use devicematch_core::{Error, Result};

/// A single idempotent rewrite step.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, ua: &str) -> String;
}

/// Ordered, immutable pipeline of normalizers. Appending builds a new
/// chain, so a family chain shares the generic prefix without aliasing
/// mutable state.
#[derive(Clone, Default)]
pub struct NormalizerChain {
    normalizers: Vec<Arc<dyn Normalizer>>,
}

impl NormalizerChain {
    pub fn new(normalizers: Vec<Arc<dyn Normalizer>>) -> Self {
        Self { normalizers }
    }

    /// New chain with `normalizer` appended after the existing steps.
    pub fn with(&self, normalizer: Arc<dyn Normalizer>) -> Self {
        let mut normalizers = self.normalizers.clone();
        normalizers.push(normalizer);
        Self { normalizers }
    }

    pub fn normalize(&self, ua: &str) -> String {
        self.normalizers
            .iter()
            .fold(ua.to_string(), |ua, n| n.normalize(&ua))
    }
}

/// The generic pipeline every classifier starts from.
pub fn generic_chain() -> Result<NormalizerChain> {
    Ok(NormalizerChain::new(vec![
        Arc::new(UpLink),
        Arc::new(BlackBerryPrefix::new()?),
        Arc::new(YesWap::new()?),
        Arc::new(BabelFish::new()?),
        Arc::new(SerialNumber::new()?),
        Arc::new(NovarraGoogleTranslator::new()?),
        Arc::new(LocaleRemover::new()?),
    ]))
}

pub(crate) fn pattern(re: &str) -> Result<Regex> {
    Regex::new(re).map_err(|e| Error::chain(format!("failed to compile normalizer regex: {e}")))
}

/// Truncates everything from the ` UP.Link` transcoder signature onward.
pub struct UpLink;

impl Normalizer for UpLink {
    fn normalize(&self, ua: &str) -> String {
        match ua.find(" UP.Link") {
            Some(idx) if idx > 0 => ua[..idx].to_string(),
            _ => ua.to_string(),
        }
    }
}

/// Canonicalizes the BlackBerry token's casing and drops any proxy prefix
/// in front of it, unless the agent is a WebKit build.
pub struct BlackBerryPrefix {
    word: Regex,
}

impl BlackBerryPrefix {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"(?i)blackberry")?,
        })
    }
}

impl Normalizer for BlackBerryPrefix {
    fn normalize(&self, ua: &str) -> String {
        let ua = self.word.replace_all(ua, "BlackBerry").into_owned();
        match ua.find("BlackBerry") {
            Some(idx) if idx > 0 && !ua.contains("AppleWebkit") => ua[idx..].to_string(),
            _ => ua,
        }
    }
}

/// Strips the YesWAP proxy signature.
pub struct YesWap {
    word: Regex,
}

impl YesWap {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"\s*Mozilla/4\.0 \(YesWAP mobile phone proxy\)")?,
        })
    }
}

impl Normalizer for YesWap {
    fn normalize(&self, ua: &str) -> String {
        self.word.replace_all(ua, "").into_owned()
    }
}

/// Strips the Yahoo Babelfish translator signature.
pub struct BabelFish {
    word: Regex,
}

impl BabelFish {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"\s*\(via babelfish\.yahoo\.com\)\s*")?,
        })
    }
}

impl Normalizer for BabelFish {
    fn normalize(&self, ua: &str) -> String {
        self.word.replace_all(ua, "").into_owned()
    }
}

/// Strips embedded device serial numbers, e.g. `[ST1234567890]` or `/SN123`.
pub struct SerialNumber {
    word: Regex,
}

impl SerialNumber {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"(\[(TF|NT|ST)[\dX|]+\])|(/SN[\dX|]+)")?,
        })
    }
}

impl Normalizer for SerialNumber {
    fn normalize(&self, ua: &str) -> String {
        self.word.replace_all(ua, "").into_owned()
    }
}

/// Strips Novarra-Vision and Google translator proxy signatures.
pub struct NovarraGoogleTranslator {
    word: Regex,
}

impl NovarraGoogleTranslator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"(\sNovarra-Vision.*)|(,gzip\(gfe\)\s+\(via translate\.google\.com\))")?,
        })
    }
}

impl Normalizer for NovarraGoogleTranslator {
    fn normalize(&self, ua: &str) -> String {
        self.word.replace_all(ua, "").into_owned()
    }
}

/// Rewrites locale tags (`; en-us`, `; de.utf8`) to the neutral `; xx-xx`
/// so reference agents differing only by locale cluster together.
pub struct LocaleRemover {
    word: Regex,
}

impl LocaleRemover {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: pattern(r"; ?[a-z]{2}(?:-[a-zA-Z]{2})?(?:\.utf8|\.big5)?\b-?")?,
        })
    }
}

impl Normalizer for LocaleRemover {
    fn normalize(&self, ua: &str) -> String {
        self.word.replace_all(ua, "; xx-xx").into_owned()
    }
}
