//! Core types shared across the devicematch crates

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Opaque catalog key naming a device or browser family.
pub type DeviceId = String;

/// Resolved capability set: capability name to value, after single-parent
/// inheritance with child override.
pub type Capabilities = HashMap<String, String>;

/// Identity returned when no classifier produced a usable match.
pub const GENERIC: &str = "generic";

/// Generic identity for desktop web browsers.
pub const GENERIC_WEB_BROWSER: &str = "generic_web_browser";

/// Generic identity for mobile browsers.
pub const GENERIC_MOBILE: &str = "generic_mobile";

/// Generic identity for XHTML-capable mobile browsers.
pub const GENERIC_XHTML: &str = "generic_xhtml";

/// Delimiter appended by normalizers that synthesize a `version model`
/// prefix in front of the user agent. Prefix search keys derived from such
/// strings cut one past this marker.
pub const RIS_DELIMITER: &str = "---";

/// An identity is "not a real match" when it is empty, all whitespace, or
/// the generic sentinel. This test gates progression through the four match
/// tiers.
pub fn is_blank_or_generic(device_id: &str) -> bool {
    device_id == GENERIC || device_id.trim().is_empty()
}

/// An immutable catalog record: identity, reference user agent, resolved
/// capabilities, and inheritance links.
///
/// Created during catalog load and never mutated afterwards, except that a
/// parent's child set grows as children register against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Unique catalog identity
    pub id: DeviceId,

    /// Raw reference user agent string
    pub user_agent: String,

    /// Parent identity, if this record inherits capabilities
    pub parent: Option<DeviceId>,

    /// Identities of records registered with this record as parent
    pub children: BTreeSet<DeviceId>,

    /// Whether this record describes an actual physical device rather than
    /// a browser/firmware variant of one
    pub actual_device_root: bool,

    /// Capability set resolved at registration time: the parent's resolved
    /// set overlaid with this record's own values (own values win)
    pub capabilities: Capabilities,
}

impl Device {
    /// Look up a resolved capability value.
    pub fn capability(&self, name: &str) -> Option<&str> {
        self.capabilities.get(name).map(String::as_str)
    }
}
