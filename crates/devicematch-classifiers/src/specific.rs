//! Family-specific normalizers appended after the generic pipeline.
//!
//! Several families rewrite the agent into a `"<discriminant>---<raw>"`
//! form so the prefix search keys on the tokens that actually identify the
//! device instead of on the boilerplate the agent happens to start with.

use regex::Regex;

use devicematch_core::{Result, RIS_DELIMITER};

use crate::extract::{AndroidExtractor, HtcMacExtractor, WebOsExtractor};
use crate::normalizer::{pattern, Normalizer};

/// Browsers that ride on Android but are classified by their own family,
/// so the Android discriminant prefix must not be applied to them.
const FOREIGN_ANDROID_BROWSERS: &[&str] = &[
    "Opera Mini",
    "Opera Mobi",
    "Opera Tablet",
    "Fennec",
    "Firefox",
    "UCWEB7",
    "NetFrontLifeBrowser/2.2",
];

/// Truncates the Android platform version to `major.minor` and, for stock
/// browsers, prefixes `"<version> <model>---"` as the search discriminant.
pub struct AndroidNormalizer {
    version_trim: Regex,
    extractor: AndroidExtractor,
}

impl AndroidNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            version_trim: pattern(r"(Android)[ \-](\d\.\d)([^; /)]+)")?,
            extractor: AndroidExtractor::new()?,
        })
    }
}

impl Normalizer for AndroidNormalizer {
    fn normalize(&self, ua: &str) -> String {
        let ua = self.version_trim.replace_all(ua, "$1 $2").into_owned();
        if FOREIGN_ANDROID_BROWSERS.iter().any(|b| ua.contains(b)) {
            return ua;
        }
        match (self.extractor.version(&ua), self.extractor.model(&ua)) {
            (Some(version), Some(model)) => {
                format!("{version} {model}{RIS_DELIMITER}{ua}")
            }
            _ => ua,
        }
    }
}

/// Kindle Fire agents are Android underneath; give them the same
/// discriminant prefix so Fire models cluster by version and model.
pub struct KindleNormalizer {
    inner: AndroidNormalizer,
}

impl KindleNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: AndroidNormalizer::new()?,
        })
    }
}

impl Normalizer for KindleNormalizer {
    fn normalize(&self, ua: &str) -> String {
        if ua.contains("Android") && ua.contains("Kindle Fire") {
            self.inner.normalize(ua)
        } else {
            ua.to_string()
        }
    }
}

/// Reduces LG U+ agents to `"<app> <windows token> <runtime>"`.
pub struct LgPlusNormalizer {
    shape: Regex,
}

impl LgPlusNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            shape: pattern(r"Mozilla.*(Windows (?:NT|CE)).*(POLARIS|WV).*lgtelecom;.*;(.*);.*")?,
        })
    }
}

impl Normalizer for LgPlusNormalizer {
    fn normalize(&self, ua: &str) -> String {
        self.shape.replace(ua, "$3 $1 $2").into_owned()
    }
}

/// Keeps only `Chrome/<major>` from the token onward.
pub struct ChromeNormalizer;

impl Normalizer for ChromeNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match ua.find("Chrome") {
            Some(idx) if idx > 0 => {
                let tail = &ua[idx..];
                match tail.find('.') {
                    Some(dot) => tail[..dot].to_string(),
                    None => tail.to_string(),
                }
            }
            _ => ua.to_string(),
        }
    }
}

/// Drops everything before the `Firefox` token.
pub struct FirefoxNormalizer;

impl Normalizer for FirefoxNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match ua.find("Firefox") {
            Some(idx) if idx > 0 => ua[idx..].to_string(),
            _ => ua.to_string(),
        }
    }
}

/// Keeps the `MSIE x.y` token only.
pub struct MsieNormalizer;

impl Normalizer for MsieNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match ua.find("MSIE") {
            Some(idx) if idx > 0 => {
                let end = crate::cutpoints::floor_char_boundary(ua, (idx + 8).min(ua.len()));
                ua[idx..end].to_string()
            }
            _ => ua.to_string(),
        }
    }
}

/// Rewrites the fixed `Opera/9.80` token to the real version carried in
/// the trailing `Version/x.y` token.
pub struct OperaNormalizer {
    version: Regex,
}

impl OperaNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            version: pattern(r"Version/(\d+\.\d+)")?,
        })
    }
}

impl Normalizer for OperaNormalizer {
    fn normalize(&self, ua: &str) -> String {
        if !ua.starts_with("Opera/9.80") {
            return ua.to_string();
        }
        match self.version.captures(ua) {
            Some(caps) => ua.replacen("Opera/9.80", &format!("Opera/{}", &caps[1]), 1),
            None => ua.to_string(),
        }
    }
}

/// Keeps a ten-byte window starting at the `Konqueror` token.
pub struct KonquerorNormalizer;

impl Normalizer for KonquerorNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match ua.find("Konqueror") {
            Some(idx) if idx > 0 => {
                let end = crate::cutpoints::floor_char_boundary(ua, (idx + 10).min(ua.len()));
                ua[idx..end].to_string()
            }
            _ => ua.to_string(),
        }
    }
}

/// Drops everything before the first `LG` token, case-insensitively.
pub struct LgNormalizer;

impl Normalizer for LgNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match ua.to_ascii_uppercase().find("LG") {
            Some(idx) if idx > 0 => ua[idx..].to_string(),
            _ => ua.to_string(),
        }
    }
}

/// Prefixes the collapsed HTC model as the search discriminant for
/// Android handsets presenting as Macintosh Safari.
pub struct HtcMacNormalizer {
    extractor: HtcMacExtractor,
}

impl HtcMacNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: HtcMacExtractor::new()?,
        })
    }
}

impl Normalizer for HtcMacNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match self.extractor.model(ua) {
            Some(model) => format!("{model}{RIS_DELIMITER}{ua}"),
            None => ua.to_string(),
        }
    }
}

/// Prefixes `"<model/version> <platform version>---"` for webOS agents.
pub struct WebOsNormalizer {
    extractor: WebOsExtractor,
}

impl WebOsNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: WebOsExtractor::new()?,
        })
    }
}

impl Normalizer for WebOsNormalizer {
    fn normalize(&self, ua: &str) -> String {
        match (
            self.extractor.model_version(ua),
            self.extractor.os_version(ua),
        ) {
            (Some(model), Some(os)) => format!("{model} {os}{RIS_DELIMITER}{ua}"),
            _ => ua.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_discriminant_prefix() {
        let n = AndroidNormalizer::new().unwrap();
        let ua = "Mozilla/5.0 (Linux; U; Android 2.3.4; xx-xx; DROID3 Build/5.5.1_84_D3G-55)";
        let normalized = n.normalize(ua);
        assert!(normalized.starts_with("2.3 DROID3---"));
        assert!(normalized.contains("Android 2.3;"));
    }

    #[test]
    fn android_leaves_foreign_browsers_alone() {
        let n = AndroidNormalizer::new().unwrap();
        let ua = "Mozilla/5.0 (Android; Linux armv7l; xx-xx) Gecko/20110318 Firefox/4.0b13pre Fennec/4.0";
        assert_eq!(n.normalize(ua), ua);
    }

    #[test]
    fn kindle_only_rewrites_fire() {
        let n = KindleNormalizer::new().unwrap();
        let classic = "Mozilla/4.0 (compatible; Linux 2.6.22) NetFront/3.4 Kindle/2.5";
        assert_eq!(n.normalize(classic), classic);

        let fire =
            "Mozilla/5.0 (Linux; U; Android 2.3.4; xx-xx; Kindle Fire Build/GINGERBREAD) Silk/1.0";
        assert!(n.normalize(fire).contains(devicematch_core::RIS_DELIMITER));
    }

    #[test]
    fn chrome_keeps_major_token() {
        let n = ChromeNormalizer;
        assert_eq!(
            n.normalize("Mozilla/5.0 (Windows NT 6.1) Chrome/13.0.782.112 Safari/535.1"),
            "Chrome/13"
        );
    }

    #[test]
    fn msie_window_is_bounded() {
        let n = MsieNormalizer;
        assert_eq!(
            n.normalize("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)"),
            "MSIE 8.0"
        );
        assert_eq!(n.normalize("x MSIE 9"), "MSIE 9");
    }

    #[test]
    fn opera_takes_trailing_version() {
        let n = OperaNormalizer::new().unwrap();
        assert_eq!(
            n.normalize("Opera/9.80 (Windows NT 6.1; U) Presto/2.9.168 Version/11.50"),
            "Opera/11.50 (Windows NT 6.1; U) Presto/2.9.168 Version/11.50"
        );
    }

    #[test]
    fn lgplus_shape_rewrite() {
        let n = LgPlusNormalizer::new().unwrap();
        let ua = "Mozilla/4.0 (compatible; MSIE 6.0; Windows CE; POLARIS 6.100; lgtelecom;;LG-LU3000;161)";
        assert_eq!(n.normalize(ua), "LG-LU3000 Windows CE POLARIS");
    }

    #[test]
    fn webos_discriminant_prefix() {
        let n = WebOsNormalizer::new().unwrap();
        let ua = "Mozilla/5.0 (hp-tablet; U; hpwOS/3.0.0; xx-xx) Version/1.0 TouchPad/1.0";
        assert!(n.normalize(ua).starts_with("TouchPad 1.0 webOS3---"));
    }
}
