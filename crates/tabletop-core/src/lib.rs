//! # tabletop-core: Pure Business Logic for Tabletop
//!
//! Menu types, cart math and order payloads for the table-ordering kiosk,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tabletop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Kiosk (apps/kiosk)                           │   │
//! │  │    Router ──► Views ──► Commands ──► OrderStore                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabletop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Order   │  │           │  │ CartItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               tabletop-client (HTTP layer)                      │   │
//! │  │         /api/categories/  /api/products/  /api/orders/          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use tabletop_core::{Cart, Money, Product};
//!
//! let mut cart = Cart::new();
//! cart.add(&Product::new(1, "Ramen", Money::new(800)));
//! cart.add(&Product::new(1, "Ramen", Money::new(800)));
//! cart.add(&Product::new(2, "Gyoza", Money::new(400)));
//!
//! assert_eq!(cart.total(), Money::new(2000));
//! assert_eq!(cart.item_count(), 3);
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartItem, MAX_LINE_QUANTITY};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
