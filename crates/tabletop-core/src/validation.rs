//! # Validation Module
//!
//! Input validation for values typed in at the kiosk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View input (number pickers, table selector)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Kiosk command (Rust)                                         │
//! │  └── THIS MODULE: table number and quantity rules                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Menu/order service                                           │
//! │  └── Product existence, pricing                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::MAX_LINE_QUANTITY;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a table number.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in a `u32`
///
/// ## Example
/// ```rust
/// use tabletop_core::validation::validate_table_number;
///
/// assert_eq!(validate_table_number(5).unwrap(), 5);
/// assert!(validate_table_number(0).is_err());
/// assert!(validate_table_number(-3).is_err());
/// ```
pub fn validate_table_number(number: i64) -> ValidationResult<u32> {
    if number <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "table_number".to_string(),
        });
    }

    u32::try_from(number).map_err(|_| ValidationError::OutOfRange {
        field: "table_number".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Validates a quantity entered for an existing cart line.
///
/// ## Rules
/// - Negative quantities are rejected
/// - Zero is allowed and means "remove the line"
/// - At most `MAX_LINE_QUANTITY`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: change quantity of "Ramen"                                       │
/// │                                                                         │
/// │  validate_cart_quantity(n) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── n < 0?  → Error: "quantity must be positive"                 │
/// │       ├── n == 0? → OK(0): the line is removed                         │
/// │       ├── n > 99? → Error: "quantity must be between 0 and 99"         │
/// │       └── n > 0?  → OK(n): the line quantity is replaced               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_cart_quantity(quantity: i64) -> ValidationResult<u32> {
    if quantity < 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(quantity)
        .ok()
        .filter(|&q| q <= MAX_LINE_QUANTITY)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::from(MAX_LINE_QUANTITY),
        })
}
