//! devicematch core
//!
//! Shared types and error handling for the devicematch classification
//! engine: device records, capability maps, generic identity sentinels, and
//! the error taxonomy used by the catalog registry and loader.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    is_blank_or_generic, Capabilities, Device, DeviceId, GENERIC, GENERIC_MOBILE,
    GENERIC_WEB_BROWSER, GENERIC_XHTML, RIS_DELIMITER,
};
