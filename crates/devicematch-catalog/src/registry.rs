//! Device registry with single-parent capability inheritance.

use std::collections::HashMap;

use tracing::trace;

use devicematch_classifiers::ClassifierChain;
use devicematch_core::{Capabilities, Device, DeviceId, Error, Result};

/// One catalog record as submitted for registration, before capability
/// resolution.
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    pub id: DeviceId,
    pub user_agent: String,
    pub parent: Option<DeviceId>,
    pub actual_device_root: bool,
    pub capabilities: Capabilities,
}

impl DeviceRecord {
    fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// The device catalog: resolved records plus the classifier chain whose
/// indexes are populated as records register.
///
/// Registration order matters only for inheritance: a record's parent must
/// already be registered, since the child copies the parent's resolved
/// capability set at registration time.
pub struct Registry {
    devices: HashMap<DeviceId, Device>,
    chain: ClassifierChain,
}

impl Registry {
    pub fn new(chain: ClassifierChain) -> Self {
        Self {
            devices: HashMap::new(),
            chain,
        }
    }

    /// Registry over the full production classifier chain.
    pub fn with_standard_chain() -> Result<Self> {
        Ok(Self::new(ClassifierChain::standard()?))
    }

    /// Register a record. Resolves capabilities against the parent (own
    /// values win), links the inheritance edges, and routes the reference
    /// agent into the classifier chain.
    pub fn register(&mut self, record: DeviceRecord) -> Result<()> {
        let capabilities = match record.parent_id() {
            Some(parent_id) => {
                let parent = self
                    .devices
                    .get_mut(parent_id)
                    .ok_or_else(|| Error::missing_parent(&record.id, parent_id))?;
                parent.children.insert(record.id.clone());
                let mut resolved = parent.capabilities.clone();
                resolved.extend(record.capabilities);
                resolved
            }
            None => record.capabilities,
        };

        let device = Device {
            id: record.id.clone(),
            user_agent: record.user_agent.clone(),
            parent: record.parent.filter(|p| !p.is_empty()),
            children: Default::default(),
            actual_device_root: record.actual_device_root,
            capabilities,
        };
        trace!(id = %device.id, "device registered");
        self.devices.insert(record.id.clone(), device);
        self.chain.filter(&record.user_agent, record.id);
        Ok(())
    }

    /// Whether an identity is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.devices.contains_key(id)
    }

    pub fn find(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Classify a raw user agent. Total; may name a generic identity that
    /// has no registered record.
    pub fn match_ua(&self, ua: &str) -> DeviceId {
        self.chain.match_ua(ua)
    }

    /// Classify and resolve to the registered record, when the resulting
    /// identity is present in the catalog.
    pub fn match_device(&self, ua: &str) -> Option<&Device> {
        let id = self.match_ua(ua);
        self.devices.get(&id)
    }
}
