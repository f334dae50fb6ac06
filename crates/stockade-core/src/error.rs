//! Shared error type across stockade crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StockadeError>;

/// Unified error type used by core and engine.
#[derive(Debug, Error)]
pub enum StockadeError {
    /// A configured ceiling was neither `unlimited` nor a non-negative integer.
    #[error("invalid limit value for `{key}`: `{value}`")]
    BadCeiling { key: String, value: String },
    /// Config text did not match the strict schema.
    #[error("invalid config: {0}")]
    Config(String),
    /// Unsupported config version.
    #[error("unsupported config version")]
    UnsupportedVersion,
    /// The protection store failed to produce a count.
    #[error("protection store failed: {0}")]
    Store(String),
    /// The protection store did not answer within the configured deadline.
    #[error("protection store timed out")]
    StoreTimeout,
}

impl StockadeError {
    /// Stable code the host can feed its messaging/localization layer.
    pub fn code(&self) -> &'static str {
        match self {
            StockadeError::BadCeiling { .. } => "BAD_CEILING",
            StockadeError::Config(_) => "BAD_CONFIG",
            StockadeError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            StockadeError::Store(_) => "STORE_FAILED",
            StockadeError::StoreTimeout => "STORE_TIMEOUT",
        }
    }
}
