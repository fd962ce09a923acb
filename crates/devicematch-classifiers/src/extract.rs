//! Model and OS-version extractors shared by family normalizers and their
//! classifiers.

use regex::Regex;

use devicematch_core::{Error, Result};

fn pattern(re: &str) -> Result<Regex> {
    Regex::new(re).map_err(|e| Error::chain(format!("failed to compile extractor regex: {e}")))
}

/// Android release-name to platform-version table.
const ANDROID_RELEASES: &[(&str, &str)] = &[
    ("Cupcake", "1.5"),
    ("Donut", "1.6"),
    ("Eclair", "2.1"),
    ("Froyo", "2.2"),
    ("Gingerbread", "2.3"),
    ("Honeycomb", "3.0"),
];

/// Extracts the handset model and platform version from Android agents.
/// The model sits between the (already neutralized) locale tag and the
/// `Build/` token; vendor decorations are scrubbed off it.
#[derive(Debug)]
pub struct AndroidExtractor {
    model: Regex,
    htc_prefix: Regex,
    htc_version_tail: Regex,
    htc_slash_tail: Regex,
    samsung_tail: Regex,
    orange_tail: Regex,
    lg_tail: Regex,
    serial: Regex,
    release_names: Regex,
    version: Regex,
}

impl AndroidExtractor {
    pub fn new() -> Result<Self> {
        let names: Vec<&str> = ANDROID_RELEASES.iter().map(|(name, _)| *name).collect();
        Ok(Self {
            model: pattern(r"Android [^;]+; xx-xx; (.+?) Build/")?,
            htc_prefix: pattern(r"HTC[ _\-/]")?,
            htc_version_tail: pattern(r"(/| V?[\d.]).*$")?,
            htc_slash_tail: pattern(r"/.*$")?,
            samsung_tail: pattern(r"(SAMSUNG[^/]+)/.*$")?,
            orange_tail: pattern(r"ORANGE/.*$")?,
            lg_tail: pattern(r"(LG-[^/]+)/[vV].*$")?,
            serial: pattern(r"\[\d{10}\]")?,
            release_names: pattern(&names.join("|"))?,
            version: pattern(r"Android (\d\.\d)")?,
        })
    }

    pub fn model(&self, ua: &str) -> Option<String> {
        let captured = self.model.captures(ua)?;
        let mut model = captured[1].trim_end_matches([' ', ';']).to_string();
        if model.starts_with("Build/") {
            return None;
        }
        if model.contains("HTC") {
            model = self.htc_prefix.replace_all(&model, "HTC~").into_owned();
            model = self.htc_version_tail.replace(&model, "").into_owned();
            model = self.htc_slash_tail.replace(&model, "").into_owned();
        }
        model = self.samsung_tail.replace(&model, "$1").into_owned();
        model = self.orange_tail.replace(&model, "ORANGE").into_owned();
        model = self.lg_tail.replace(&model, "$1").into_owned();
        model = self.serial.replace_all(&model, "").into_owned();
        let model = model.trim();
        if model.is_empty() {
            None
        } else {
            Some(model.to_string())
        }
    }

    pub fn version(&self, ua: &str) -> Option<String> {
        let rewritten = self
            .release_names
            .replace_all(ua, |caps: &regex::Captures<'_>| {
                ANDROID_RELEASES
                    .iter()
                    .find(|(name, _)| *name == &caps[0])
                    .map(|(_, version)| (*version).to_string())
                    .unwrap_or_default()
            });
        self.version
            .captures(&rewritten)
            .map(|caps| caps[1].to_string())
    }
}

/// Extracts the `HTC<model>` token from Android handsets disguising as
/// Macintosh Safari, with separators collapsed to `~`.
#[derive(Debug)]
pub struct HtcMacExtractor {
    model: Regex,
    separators: Regex,
}

impl HtcMacExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            model: pattern(r"(HTC[^;)]+)")?,
            separators: pattern(r"[ _\-/]")?,
        })
    }

    pub fn model(&self, ua: &str) -> Option<String> {
        let captured = self.model.captures(ua)?;
        Some(self.separators.replace_all(&captured[1], "~").into_owned())
    }
}

/// Extracts the trailing `model/version` pair and the webOS platform
/// version from Palm/HP agents.
#[derive(Debug)]
pub struct WebOsExtractor {
    model: Regex,
    version: Regex,
}

impl WebOsExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            model: pattern(r" ([^/]+)/([\d.]+)$")?,
            version: pattern(r"(?:hpw|web)OS.(\d)\.")?,
        })
    }

    pub fn model_version(&self, ua: &str) -> Option<String> {
        self.model
            .captures(ua)
            .map(|caps| format!("{} {}", &caps[1], &caps[2]))
    }

    pub fn os_version(&self, ua: &str) -> Option<String> {
        self.version
            .captures(ua)
            .map(|caps| format!("webOS{}", &caps[1]))
    }
}
