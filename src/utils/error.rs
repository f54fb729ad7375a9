use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Transport request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

// Absent stored values are not an error: reads that find nothing
// return Ok(None) instead of surfacing a variant here.
pub type Result<T> = std::result::Result<T, KitError>;
