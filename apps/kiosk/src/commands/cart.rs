//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Submit  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │          │     │ Complete │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       submit_order                       │
//! │                   update_cart_item  (order.rs)                         │
//! │                   remove_from_cart                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tabletop_core::validation::validate_cart_quantity;
use tabletop_core::{Cart, CartItem, CoreError, ProductId, MAX_LINE_QUANTITY};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartTotals, OrderStore};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

fn respond<A>(store: &OrderStore<A>) -> CartResponse {
    CartResponse::from(store.state().cart())
}

/// Gets the current cart contents.
pub fn get_cart<A>(store: &OrderStore<A>) -> CartResponse {
    debug!("get_cart command");
    respond(store)
}

/// Adds one of a product from the loaded menu.
///
/// ## Behavior
/// - Already in cart: quantity + 1
/// - Not in cart: appended with quantity 1
/// - Not on the loaded menu: `NOT_FOUND`
/// - Marked unavailable: `VALIDATION_ERROR`
/// - Line already at `MAX_LINE_QUANTITY`: `VALIDATION_ERROR`, cart unchanged
pub fn add_to_cart<A>(
    store: &mut OrderStore<A>,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = store
        .state()
        .product(product_id)
        .cloned()
        .ok_or(CoreError::ProductNotFound(product_id))?;

    if !product.is_available {
        return Err(CoreError::ProductUnavailable {
            id: product.id,
            name: product.name,
        }
        .into());
    }

    let at_limit = store
        .state()
        .cart()
        .get(product_id)
        .is_some_and(|item| item.quantity >= MAX_LINE_QUANTITY);
    if at_limit {
        return Err(CoreError::QuantityTooLarge {
            product_id,
            max: MAX_LINE_QUANTITY,
        }
        .into());
    }

    store.add_to_cart(product);
    Ok(respond(store))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0: removes the line
/// - Negative or above `MAX_LINE_QUANTITY`: `VALIDATION_ERROR`, cart unchanged
/// - Product not in cart: no change
pub fn update_cart_item<A>(
    store: &mut OrderStore<A>,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let quantity = validate_cart_quantity(quantity)?;
    store.update_cart_item_quantity(product_id, quantity);
    Ok(respond(store))
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart<A>(store: &mut OrderStore<A>, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.remove_from_cart(product_id);
    respond(store)
}

/// Clears all items from the cart.
pub fn clear_cart<A>(store: &mut OrderStore<A>) -> CartResponse {
    debug!("clear_cart command");

    store.clear_cart();
    respond(store)
}
