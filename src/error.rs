//! Error types for weight-station

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Save-time validation failures, checked in order; the first failure
/// aborts the save. Messages are shown to the operator as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Serial number already exists. Please use a different serial number.")]
    DuplicateSerial,

    #[error("Please enter first weight")]
    MissingFirstWeight,

    #[error("Please enter second weight")]
    MissingSecondWeight,

    #[error("Please enter driver name")]
    MissingDriverName,

    #[error("Please enter vehicle number")]
    MissingVehicleNumber,

    #[error("Please enter amount")]
    MissingAmount,
}

/// Durable-store errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Persisted payload was present but unreadable. Recovered by
    /// resetting to an empty collection; never surfaced as blocking.
    #[error("Stored data corrupted: {0}")]
    Corrupt(String),

    /// A persist call failed. In-memory state is preserved so the
    /// operator can simply retry the save.
    #[error("Failed to write store: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;
