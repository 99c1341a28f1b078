//! # Error Types
//!
//! Domain-specific error types for tabletop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabletop-core errors (this file)                                      │
//! │  ├── CoreError        - Cart and order rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tabletop-client errors (separate crate)                               │
//! │  └── ClientError      - Network, HTTP status, decoding, config         │
//! │                                                                         │
//! │  Kiosk errors (in app)                                                 │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → ApiError → View     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not part of the loaded menu.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product exists but is marked unavailable by the kitchen.
    #[error("Product {name} is not available")]
    ProductUnavailable { id: ProductId, name: String },

    /// An order was requested for a cart with no lines.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart view, no items
    ///      │
    ///      ▼
    /// "Place order" pressed
    ///      │
    ///      ▼
    /// EmptyCart (no request is sent)
    /// ```
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A cart line would exceed the per-line quantity limit.
    #[error("Quantity cannot exceed {max} per item")]
    QuantityTooLarge { product_id: ProductId, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
