//! Error types for the driver.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for driver operations.
#[derive(Error, Debug)]
pub enum FerryError {
    /// The HTTP exchange could not complete (network, DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response payload could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The decoded payload carried a server-reported error; code and
    /// message are taken verbatim from the server.
    #[error("Server error {code}: {message}")]
    Server { code: i64, message: String },

    /// The configured hard poll ceiling was exceeded while pages were
    /// still outstanding.
    #[error("Query timed out: {0}")]
    Timeout(String),

    /// Configuration errors (invalid DSN, bad header value, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal driver errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FerryError {
    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a malformed-response error with the given message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Creates a server error from a code and message.
    pub fn server(code: i64, message: impl Into<String>) -> Self {
        Self::Server {
            code,
            message: message.into(),
        }
    }

    /// Creates a timeout error with the given message.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Transport Error",
            Self::Malformed(_) => "Malformed Response",
            Self::Server { .. } => "Server Error",
            Self::Timeout(_) => "Timeout",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns the server-supplied error code, if this is a server error.
    pub fn server_code(&self) -> Option<i64> {
        match self {
            Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias using FerryError.
pub type Result<T> = std::result::Result<T, FerryError>;
