//! Error types for userctl
//!
//! All modules use `UserctlResult<T>` as their return type.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for userctl operations
pub type UserctlResult<T> = Result<T, UserctlError>;

/// All errors that can occur in userctl
#[derive(Error, Debug)]
pub enum UserctlError {
    // Transport errors
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    // Server errors
    #[error("Server returned {status} for {url}: {body}")]
    Server {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("User not found: {0}")]
    UserNotFound(u64),

    // Validation errors (checked client-side, never sent to the server)
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    // Synchronization errors
    #[error("A {operation} is already in flight")]
    MutationInFlight { operation: String },

    /// An error shared out of the query cache (concurrent readers of the
    /// same key all observe the same failure).
    #[error(transparent)]
    Shared(#[from] Arc<UserctlError>),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Prompt errors
    #[error("Prompt failed: {0}")]
    Prompt(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl UserctlError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a transport error for a request that never produced a usable response
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Transport { .. } | Self::InvalidBaseUrl(_) => {
                Some("Check api.base_url: userctl config show")
            }
            Self::UserNotFound(_) => Some("List known users: userctl list"),
            Self::ConfigNotFound(_) => Some("Run: userctl config init"),
            Self::MutationInFlight { .. } => Some("Wait for the pending operation to finish"),
            Self::Shared(inner) => inner.hint(),
            _ => None,
        }
    }
}
