//! Device catalog: registration with capability inheritance, JSON
//! loading, and user-agent lookup over the classifier chain.

pub mod loader;
pub mod registry;

pub use loader::{load_catalog, load_catalog_file, RawDevice};
pub use registry::{DeviceRecord, Registry};
