//! # Order Commands
//!
//! ## Submission
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart page: "Place order"                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  submit_order(&mut store)                                               │
//! │         │                                                               │
//! │         ├── cart empty ───────────► CART_ERROR (nothing sent)           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  POST /api/orders/ {table_number, items: [{product_id, quantity}]}     │
//! │         │                                                               │
//! │         ├── failure ──────────────► error returned, cart kept           │
//! │         ├── 2xx, unreadable body ─► error returned, cart cleared        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart cleared, Order returned ────► order-complete page                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tabletop_client::MenuApi;
use tabletop_core::validation::validate_table_number;
use tabletop_core::{Order, TableNumber};
use tracing::debug;

use crate::error::ApiError;
use crate::state::OrderStore;

/// Changes the table the next order goes to.
pub fn set_table_number<A>(
    store: &mut OrderStore<A>,
    table_number: i64,
) -> Result<TableNumber, ApiError> {
    debug!(table_number = %table_number, "set_table_number command");

    let table_number = TableNumber::new(validate_table_number(table_number)?)?;
    store.set_table_number(table_number);
    Ok(table_number)
}

/// Submits the cart as an order.
pub async fn submit_order<A: MenuApi>(store: &mut OrderStore<A>) -> Result<Order, ApiError> {
    debug!(
        table_number = %store.state().table_number(),
        lines = store.state().cart().line_count(),
        "submit_order command"
    );

    Ok(store.submit_order().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use crate::testing::FakeMenuApi;
    use tabletop_core::{Money, ProductId};

    #[test]
    fn test_set_table_number() {
        let mut store = OrderStore::new(FakeMenuApi::default());

        assert_eq!(set_table_number(&mut store, 12).unwrap().get(), 12);
        assert_eq!(store.state().table_number().get(), 12);

        for bad in [0, -3, i64::MAX] {
            let err = set_table_number(&mut store, bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }
        assert_eq!(store.state().table_number().get(), 12);
    }

    #[tokio::test]
    async fn test_submit_order_priced_by_service() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());
        store.fetch_products(None).await.unwrap();
        add_to_cart(&mut store, ProductId(1)).unwrap();
        add_to_cart(&mut store, ProductId(1)).unwrap();
        add_to_cart(&mut store, ProductId(2)).unwrap();
        set_table_number(&mut store, 5).unwrap();

        let order = submit_order(&mut store).await.unwrap();
        assert_eq!(order.total_price, Money::new(2000));
        assert_eq!(order.table_number.get(), 5);
        assert!(store.state().cart().is_empty());
    }

    #[tokio::test]
    async fn test_submit_errors() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());
        let err = submit_order(&mut store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        store.fetch_products(None).await.unwrap();
        add_to_cart(&mut store, ProductId(3)).unwrap();
        store.api().fail_with_status(500);

        let err = submit_order(&mut store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ServerError);
        assert_eq!(store.cart_item_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_confirmation_is_not_retried() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());
        store.fetch_products(None).await.unwrap();
        add_to_cart(&mut store, ProductId(1)).unwrap();
        store.api().unreadable_confirmation();

        let err = submit_order(&mut store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ServerError);
        assert!(err.message.starts_with("Your order was sent"));

        let err = submit_order(&mut store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(store.api().submitted_orders().len(), 1);
    }
}
