//! # Client Error Types
//!
//! Error types for calls to the menu/order service.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  Status (non-2xx)       │ │
//! │  │  InvalidUrl     │  │  (connect,      │  │  Decode (bad JSON)      │ │
//! │  │  ConfigLoad...  │  │   timeout, ...) │  │  OrderUnconfirmed       │ │
//! │  │                 │  │                 │  │  (2xx, unreadable body) │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  Domain         │  Cart/order rule violations detected before a     │
//! │  │  Core           │  request is sent (e.g. empty cart).               │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tabletop_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong talking to the menu/order service.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid kiosk configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed or joined.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The service answered with a non-success status.
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service accepted the order (2xx) but its confirmation could not
    /// be read. The order exists on the service side.
    #[error("Order accepted with HTTP {status} but the confirmation was unreadable: {reason}")]
    OrderUnconfirmed {
        status: u16,
        body: String,
        reason: String,
    },

    // =========================================================================
    // Domain Errors
    // =========================================================================
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// True for failures where the service was never reached or never answered.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Request(_))
    }

    /// True when the service took the order even though this call failed.
    pub fn is_order_accepted(&self) -> bool {
        matches!(self, ClientError::OrderUnconfirmed { .. })
    }

    /// HTTP status code, if the service answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}
