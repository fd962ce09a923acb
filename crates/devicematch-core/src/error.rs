//! Error types for devicematch

/// Result type alias using devicematch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for devicematch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registration referenced a parent device that is not registered yet.
    ///
    /// Recoverable: the caller may defer the record and retry once the
    /// parent has been registered.
    #[error("unregistered parent device '{parent}' for '{device}'")]
    MissingParent { device: String, parent: String },

    /// Catalog records whose parents could never be resolved (dangling
    /// reference or inheritance cycle in the source catalog).
    #[error("unresolvable parent references for {} device(s): {}", .0.len(), .0.join(", "))]
    UnresolvedParents(Vec<String>),

    /// Catalog consistency errors
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Classifier chain construction errors
    #[error("chain error: {0}")]
    Chain(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new missing-parent error
    pub fn missing_parent(device: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::MissingParent {
            device: device.into(),
            parent: parent.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a new chain error
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }
}
