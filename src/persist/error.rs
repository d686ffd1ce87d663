//! Persistence error types.

use thiserror::Error;

/// Errors that can occur while loading or saving snapshots.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The storage backend failed
    #[error("Storage backend error: {0}")]
    Backend(#[from] std::io::Error),
}
