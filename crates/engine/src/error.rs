//! Engine error types.
//!
//! Storage errors never escape the storage module's tolerant load/persist
//! helpers - persistence is a convenience, not a correctness requirement
//! for the current session. Configuration errors do surface, since they
//! are developer input and should fail loudly at startup.

use thiserror::Error;

/// Errors from the persisted store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (missing directory, quota, permissions).
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection failed to serialize or deserialize.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors loading engine configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but unparseable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}
