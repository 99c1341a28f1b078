//! # Commands Module
//!
//! Operations a guest triggers from a page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── menu.rs     ◄─── Menu loading
//! └── order.rs    ◄─── Table number, order submission
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands::cart::add_to_cart(&mut store, product_id)                    │
//! │       │    validates input, looks up the loaded menu                    │
//! │       ▼                                                                 │
//! │  store.commit(Mutation::AddToCart(product))                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result<CartResponse, ApiError> ──► page re-renders or shows message   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes the store it acts on; nothing is global.

pub mod cart;
pub mod menu;
pub mod order;
