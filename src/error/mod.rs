//! Error handling for the platform core
//!
//! This module provides the error types shared by the catalog query layer,
//! the mock network simulator, and the session store.

use std::fmt;

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, LearnaultError>;

/// The fixed failure message the mock network reports.
pub const MOCK_NETWORK_ERROR: &str = "Mock Stellar network error. Please try again.";

/// Error types for platform operations
#[derive(Debug, Clone)]
pub enum LearnaultError {
    /// Synthetic failure raised by the mock network simulator
    MockNetwork(String),
    /// A timestamp string that could not be parsed as RFC 3339
    InvalidTimestamp(String),
    /// Session/authentication errors
    Session(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
}

impl LearnaultError {
    /// The synthetic network failure with its fixed message.
    pub fn mock_network() -> Self {
        LearnaultError::MockNetwork(MOCK_NETWORK_ERROR.to_string())
    }
}

impl fmt::Display for LearnaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnaultError::MockNetwork(msg) => write!(f, "Network error: {msg}"),
            LearnaultError::InvalidTimestamp(ts) => write!(f, "Invalid timestamp: {ts}"),
            LearnaultError::Session(msg) => write!(f, "Session error: {msg}"),
            LearnaultError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LearnaultError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for LearnaultError {}

impl From<serde_json::Error> for LearnaultError {
    fn from(err: serde_json::Error) -> Self {
        LearnaultError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LearnaultError {
    fn from(err: chrono::ParseError) -> Self {
        LearnaultError::InvalidTimestamp(err.to_string())
    }
}
