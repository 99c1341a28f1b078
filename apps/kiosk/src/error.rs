//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  View                        Command                                    │
//! │  ────                        ───────                                    │
//! │                                                                         │
//! │  "Place order" pressed                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Service Error? ─── ClientError::Status { 500, .. } ──┐         │  │
//! │  │         │                                             │         │  │
//! │  │         ▼                                             ▼         │  │
//! │  │  Cart Error? ─────── CoreError::EmptyCart ───────── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The view shows `message` and may branch on `code`.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tabletop_client::ClientError;
use tabletop_core::{CoreError, ValidationError};

/// Error returned from kiosk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NETWORK_ERROR",
///   "message": "Could not reach the ordering service"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or route not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The service could not be reached
    NetworkError,

    /// The service answered with an error or an unreadable body
    ServerError,

    /// Cart operation failed
    CartError,

    /// Misconfiguration or other internal failure
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id.to_string()),
            CoreError::ProductUnavailable { name, .. } => {
                ApiError::validation(format!("{} is not available right now", name))
            }
            CoreError::EmptyCart => ApiError::cart("Your cart is empty"),
            e @ CoreError::QuantityTooLarge { .. } => ApiError::validation(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts service client errors to API errors.
///
/// ```text
/// Request (no response)     → NETWORK_ERROR
/// Status 404                → NOT_FOUND
/// Status 4xx                → VALIDATION_ERROR (service rejected the input)
/// Status 5xx / bad body     → SERVER_ERROR
/// Order taken, bad body     → SERVER_ERROR (order was placed)
/// Config / URL              → INTERNAL
/// ```
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => {
                tracing::error!("Request to ordering service failed: {}", e);
                ApiError::new(
                    ErrorCode::NetworkError,
                    "Could not reach the ordering service",
                )
            }
            ClientError::Status { status: 404, .. } => {
                ApiError::new(ErrorCode::NotFound, "The ordering service has no such item")
            }
            ClientError::Status { status, body } if (400..500).contains(&status) => {
                ApiError::validation(format!("The ordering service rejected the request: {}", body))
            }
            ClientError::Status { status, .. } => ApiError::new(
                ErrorCode::ServerError,
                format!("The ordering service returned an error ({})", status),
            ),
            ClientError::Decode(e) => {
                tracing::error!("Unreadable response from ordering service: {}", e);
                ApiError::new(
                    ErrorCode::ServerError,
                    "Unexpected response from the ordering service",
                )
            }
            ClientError::OrderUnconfirmed { status, reason, .. } => {
                tracing::error!(status, "Order confirmation unreadable: {}", reason);
                ApiError::new(
                    ErrorCode::ServerError,
                    "Your order was sent, but its confirmation could not be read. Please ask staff before ordering again",
                )
            }
            ClientError::Core(e) => ApiError::from(e),
            ClientError::InvalidConfig(msg)
            | ClientError::InvalidUrl(msg)
            | ClientError::ConfigLoadFailed(msg) => ApiError::internal(msg),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
