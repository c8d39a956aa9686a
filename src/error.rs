//! Error types for dnspod-ddns.

use thiserror::Error;

/// Result type alias for dnspod-ddns.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// No domain matched the searched name.
    #[error("Domain not found: {domain}")]
    DomainNotFound { domain: String },

    /// No record matched the searched name within the resolved domain.
    #[error("Record not found: {record}")]
    RecordNotFound { record: String },

    /// A field was absent from a parsed API response.
    #[error("Missing response field: {field}")]
    MissingField { field: String },

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A dispatched API call could not be joined.
    #[error("Task error: {0}")]
    Task(String),

    /// IP detection error.
    #[error("IP detection failed: {0}")]
    IpDetection(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DdnsError {
    fn from(e: serde_json::Error) -> Self {
        DdnsError::Serialization(e.to_string())
    }
}
