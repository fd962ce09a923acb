//! Keyword tables and cross-family heuristics.
//!
//! The mobile / desktop / smart-TV keyword tables drive the per-call
//! [`MatchContext`] flags, and the token-to-identity table backs the
//! tier-four mobile catch-all. Keyword scans use case-insensitive
//! multi-pattern automata; the desktop heavy-duty analysis adds a few
//! anchored regexes for browser shapes the keyword tables cannot separate.

use aho_corasick::AhoCorasick;
use regex::Regex;

use devicematch_core::{
    DeviceId, Error, Result, GENERIC, GENERIC_MOBILE, GENERIC_WEB_BROWSER, GENERIC_XHTML,
};

use crate::context::MatchContext;

const MOBILE_KEYWORDS: &[&str] = &[
    "midp",
    "mobile",
    "android",
    "samsung",
    "nokia",
    "up.browser",
    "phone",
    "opera mini",
    "opera mobi",
    "brew",
    "sonyericsson",
    "blackberry",
    "netfront",
    "uc browser",
    "symbian",
    "j2me",
    "wap2.",
    "up.link",
    "windows ce",
    "vodafone",
    "ucweb",
    "zte-",
    "ipad;",
    "docomo",
    "armv",
    "maemo",
    "palm",
    "bolt",
    "fennec",
    "wireless",
    "adr-",
    "htc",
    "nintendo",
    // Keeps IE-shaped phone agents out of the desktop MSIE bucket, e.g.
    // Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.1; XBLWP7; ZuneWP7)
    "zunewp7",
    "skyfire",
    "silk",
    "untrusted",
    "lgtelecom",
    " gt-",
    "ventana",
];

const SMART_TV_KEYWORDS: &[&str] = &[
    "googletv",
    "boxee",
    "sonydtv",
    "appletv",
    "smarttv",
    "dlna",
    "netcast.tv",
];

const DESKTOP_KEYWORDS: &[&str] = &[
    "wow64",
    ".net clr",
    "gtb7",
    "macintosh",
    "slcc1",
    "gtb6",
    "funwebproducts",
    "aol 9.",
    "gtb8",
];

/// Token-to-identity table for mobile agents no family claimed. Checked in
/// order; more specific version tokens come before their generic prefixes.
const MOBILE_CATCH_ALL_IDS: &[(&str, &str)] = &[
    // Openwave
    ("UP.Browser/7.2", "opwv_v72_generic"),
    ("UP.Browser/7", "opwv_v7_generic"),
    ("UP.Browser/6.2", "opwv_v62_generic"),
    ("UP.Browser/6", "opwv_v6_generic"),
    ("UP.Browser/5", "upgui_generic"),
    ("UP.Browser/4", "uptext_generic"),
    ("UP.Browser/3", "uptext_generic"),
    // Series 60
    ("Series60", "nokia_generic_series60"),
    // Access / NetFront
    ("NetFront/3.0", "generic_netfront_ver3"),
    ("ACS-NF/3.0", "generic_netfront_ver3"),
    ("NetFront/3.1", "generic_netfront_ver3_1"),
    ("ACS-NF/3.1", "generic_netfront_ver3_1"),
    ("NetFront/3.2", "generic_netfront_ver3_2"),
    ("ACS-NF/3.2", "generic_netfront_ver3_2"),
    ("NetFront/3.3", "generic_netfront_ver3_3"),
    ("ACS-NF/3.3", "generic_netfront_ver3_3"),
    ("NetFront/3.4", "generic_netfront_ver3_4"),
    ("NetFront/3.5", "generic_netfront_ver3_5"),
    ("NetFront/4.0", "generic_netfront_ver4_0"),
    ("NetFront/4.1", "generic_netfront_ver4_1"),
    // CoreMedia
    ("CoreMedia", "apple_iphone_coremedia_ver1"),
    // Windows CE
    ("Windows CE", "generic_ms_mobile"),
    // Generic XHTML
    ("Obigo", GENERIC_XHTML),
    ("AU-MIC/2", GENERIC_XHTML),
    ("AU-MIC-", GENERIC_XHTML),
    ("AU-OBIGO/", GENERIC_XHTML),
    ("Teleca Q03B1", GENERIC_XHTML),
    // Opera Mini
    ("Opera Mini/1", "generic_opera_mini_version1"),
    ("Opera Mini/2", "generic_opera_mini_version2"),
    ("Opera Mini/3", "generic_opera_mini_version3"),
    ("Opera Mini/4", "generic_opera_mini_version4"),
    ("Opera Mini/5", "generic_opera_mini_version5"),
    // Japanese carriers
    ("DoCoMo", "docomo_generic_jap_ver1"),
    ("KDDI", "docomo_generic_jap_ver1"),
];

/// Compiled keyword tables and desktop-shape regexes shared by the whole
/// chain.
#[derive(Debug)]
pub struct Markers {
    mobile: AhoCorasick,
    smart_tv: AhoCorasick,
    desktop: AhoCorasick,
    safari_desktop: Regex,
    msie9_desktop: Regex,
    msie_legacy_desktop: Regex,
}

fn keyword_automaton(keywords: &[&str]) -> Result<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(keywords)
        .map_err(|e| Error::chain(format!("failed to build keyword automaton: {e}")))
}

impl Markers {
    pub fn new() -> Result<Self> {
        Ok(Self {
            mobile: keyword_automaton(MOBILE_KEYWORDS)?,
            smart_tv: keyword_automaton(SMART_TV_KEYWORDS)?,
            desktop: keyword_automaton(DESKTOP_KEYWORDS)?,
            safari_desktop: Regex::new(
                r"^Mozilla/5\.0 \((?:Macintosh|Windows)[^)]+\) AppleWebKit/[\d.]+ \(KHTML, like Gecko\) Version/[\d.]+ Safari/[\d.]+$",
            )
            .map_err(|e| Error::chain(format!("failed to compile safari regex: {e}")))?,
            msie9_desktop: Regex::new(r"^Mozilla/5\.0 \(compatible; MSIE 9\.0; Windows NT \d\.\d")
                .map_err(|e| Error::chain(format!("failed to compile msie9 regex: {e}")))?,
            msie_legacy_desktop: Regex::new(
                r"^Mozilla/4\.0 \(compatible; MSIE \d\.\d; Windows NT \d\.\d",
            )
            .map_err(|e| Error::chain(format!("failed to compile legacy msie regex: {e}")))?,
        })
    }

    pub fn is_mobile(&self, ua: &str) -> bool {
        self.mobile.is_match(ua)
    }

    pub fn is_desktop(&self, ua: &str) -> bool {
        self.desktop.is_match(ua)
    }

    pub fn is_smart_tv(&self, ua: &str) -> bool {
        self.smart_tv.is_match(ua)
    }

    /// Classify the raw user agent once per top-level call.
    pub fn context(&self, ua: &str) -> MatchContext {
        MatchContext {
            mobile: self.is_mobile(ua),
            desktop: self.is_desktop(ua),
            smart_tv: self.is_smart_tv(ua),
        }
    }

    /// First matching entry of the mobile catch-all table.
    pub fn mobile_catch_all_id(&self, ua: &str) -> Option<&'static str> {
        MOBILE_CATCH_ALL_IDS
            .iter()
            .find(|(token, _)| ua.contains(token))
            .map(|(_, id)| *id)
    }

    /// Deep test for desktop browsers that slipped past every family:
    /// smart-TV and mobile signals veto, then Chrome/Firefox shapes,
    /// desktop Safari, the desktop keyword table, and IE shapes accept.
    pub fn is_desktop_heavy_duty(&self, ua: &str, ctx: &MatchContext) -> bool {
        if ctx.smart_tv {
            return false;
        }
        if ua.contains("Chrome") && !ua.contains("Ventana") {
            return true;
        }
        if ctx.mobile {
            return false;
        }
        if ua.contains("PPC") {
            return false;
        }
        if ua.contains("Firefox") && !ua.contains("Tablet") {
            return true;
        }
        if self.safari_desktop.is_match(ua) {
            return true;
        }
        if ctx.desktop {
            return true;
        }
        self.msie9_desktop.is_match(ua) || self.msie_legacy_desktop.is_match(ua)
    }
}

/// Tier-four fallback shared by every classifier: desktop heavy-duty
/// analysis, then the mobile catch-all table, then the generic identities
/// selected by the context flags. Total: always produces an identity.
pub fn recovery_catch_all(ua: &str, ctx: &MatchContext, markers: &Markers) -> DeviceId {
    if markers.is_desktop_heavy_duty(ua, ctx) {
        return GENERIC_WEB_BROWSER.to_string();
    }
    if !ctx.desktop {
        if let Some(id) = markers.mobile_catch_all_id(ua) {
            return id.to_string();
        }
    }
    if ctx.mobile {
        return GENERIC_MOBILE.to_string();
    }
    if ctx.desktop {
        return GENERIC_WEB_BROWSER.to_string();
    }
    GENERIC.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::new().unwrap()
    }

    #[test]
    fn context_flags() {
        let m = markers();
        let ctx = m.context("Mozilla/5.0 (Linux; U; Android 2.3; en-us)");
        assert!(ctx.mobile);
        assert!(!ctx.desktop);
        assert!(!ctx.smart_tv);

        let ctx = m.context("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8)");
        assert!(ctx.desktop);
        assert!(!ctx.mobile);

        let ctx = m.context("Mozilla/5.0 (X11; Linux; GoogleTV/162671)");
        assert!(ctx.smart_tv);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let m = markers();
        assert!(m.is_mobile("SAMSUNG-SGH-A867/A867UCHJ3"));
        assert!(m.is_mobile("BlackBerry9000/4.6.0.167"));
    }

    #[test]
    fn catch_all_table_prefers_specific_versions() {
        let m = markers();
        assert_eq!(
            m.mobile_catch_all_id("ACME/1.0 UP.Browser/7.2.7.2.624"),
            Some("opwv_v72_generic")
        );
        assert_eq!(
            m.mobile_catch_all_id("ACME/1.0 UP.Browser/7.0.1"),
            Some("opwv_v7_generic")
        );
        assert_eq!(m.mobile_catch_all_id("ACME/1.0"), None);
    }

    #[test]
    fn heavy_duty_desktop_analysis() {
        let m = markers();
        let chrome = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.1 Chrome/13.0.782.112";
        assert!(m.is_desktop_heavy_duty(chrome, &m.context(chrome)));

        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/534.48.3 (KHTML, like Gecko) Version/5.1 Safari/534.48.3";
        assert!(m.is_desktop_heavy_duty(safari, &m.context(safari)));

        let android = "Mozilla/5.0 (Linux; U; Android 2.3.4; en-us; DROID3)";
        assert!(!m.is_desktop_heavy_duty(android, &m.context(android)));

        let tv = "Mozilla/5.0 (X11; Linux; Chrome/11.0.696.77) GoogleTV/162671";
        assert!(!m.is_desktop_heavy_duty(tv, &m.context(tv)));
    }

    #[test]
    fn recovery_catch_all_is_total() {
        let m = markers();
        for ua in ["", "complete garbage", "SonyEricssonK700i/R2A"] {
            let ctx = m.context(ua);
            assert!(!recovery_catch_all(ua, &ctx, &m).is_empty());
        }
        let ua = "Vendor/1.0 UP.Browser/6.2.3.8";
        let ctx = m.context(ua);
        assert_eq!(recovery_catch_all(ua, &ctx, &m), "opwv_v62_generic");
    }
}
