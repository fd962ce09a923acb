//! JSON catalog loading with deferred parent resolution.
//!
//! Catalogs are not guaranteed to list parents before children, so records
//! whose parent is not yet registered are deferred and retried after each
//! full pass. A pass that registers nothing means the remainder is
//! unresolvable (missing or cyclic parents) and the load fails as a whole.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use devicematch_core::{Capabilities, Error, Result};

use crate::registry::{DeviceRecord, Registry};

/// Wire format of one catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDevice {
    pub id: String,
    pub user_agent: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub actual_device_root: bool,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl From<RawDevice> for DeviceRecord {
    fn from(raw: RawDevice) -> Self {
        Self {
            id: raw.id,
            user_agent: raw.user_agent,
            parent: raw.parent,
            actual_device_root: raw.actual_device_root,
            capabilities: raw.capabilities,
        }
    }
}

fn parent_registered(registry: &Registry, record: &DeviceRecord) -> bool {
    match record.parent.as_deref() {
        Some(parent) if !parent.is_empty() => registry.contains(parent),
        _ => true,
    }
}

/// Load a JSON array of catalog entries into the registry. Returns the
/// number of records registered.
pub fn load_catalog(registry: &mut Registry, reader: impl Read) -> Result<usize> {
    let records: Vec<RawDevice> = serde_json::from_reader(reader)?;
    let mut pending: Vec<DeviceRecord> = records.into_iter().map(Into::into).collect();
    let mut registered = 0usize;

    while !pending.is_empty() {
        let before = pending.len();
        let mut deferred = Vec::new();
        for record in pending {
            if parent_registered(registry, &record) {
                registry.register(record)?;
                registered += 1;
            } else {
                deferred.push(record);
            }
        }
        if deferred.len() == before {
            // No progress this pass: the rest can never resolve.
            let unresolved: Vec<String> = deferred.into_iter().map(|r| r.id).collect();
            warn!(count = unresolved.len(), "catalog records with unresolvable parents");
            return Err(Error::UnresolvedParents(unresolved));
        }
        if !deferred.is_empty() {
            debug!(deferred = deferred.len(), "retrying records after parent registration");
        }
        pending = deferred;
    }

    info!(registered, "catalog loaded");
    Ok(registered)
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog_file(registry: &mut Registry, path: impl AsRef<Path>) -> Result<usize> {
    let file = File::open(path.as_ref())?;
    load_catalog(registry, BufReader::new(file))
}
