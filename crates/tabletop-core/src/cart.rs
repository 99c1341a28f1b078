//! # Cart
//!
//! The guest's shopping cart and its derived totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Tap product ─────────► add()             ──► qty += 1 or push line    │
//! │  Change quantity ─────► update_quantity() ──► qty = min(n, 99)         │
//! │                                               (0 removes)              │
//! │  Tap remove ──────────► remove()          ──► line removed (if any)    │
//! │  Order placed ────────► clear()           ──► empty                    │
//! │                                                                         │
//! │  Derived: total() = Σ price × qty    item_count() = Σ qty              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderLineRequest, OrderRequest, Product, ProductId, TableNumber};

/// Most portions of one product a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// A line in the cart.
///
/// Name and price are copied from the product when the line is created, so
/// the cart keeps showing what the guest tapped even if the menu reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a line for one portion of `product`.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id
/// - Every line has 1 <= quantity <= `MAX_LINE_QUANTITY`
/// - Lines keep first-added order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one portion of `product`.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1. Returns `false` and leaves the line as is when it is
    /// already at `MAX_LINE_QUANTITY`.
    pub fn add(&mut self, product: &Product) -> bool {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) if item.quantity >= MAX_LINE_QUANTITY => false,
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => {
                self.items.push(CartItem::from_product(product));
                true
            }
        }
    }

    /// Removes the line for `product_id`.
    ///
    /// Returns `false` (and leaves the cart untouched) when no such line exists.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != before
    }

    /// Replaces the quantity of the line for `product_id`.
    ///
    /// A quantity of 0 removes the line; anything above `MAX_LINE_QUANTITY`
    /// is clamped to it. Returns `false` when no such line exists.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                item.quantity = quantity.min(MAX_LINE_QUANTITY);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines (0 for an empty cart).
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of price × quantity over all lines (0 for an empty cart).
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Builds the order submission for this cart.
    ///
    /// ## Errors
    /// `CoreError::EmptyCart` if there is nothing to order.
    pub fn to_order_request(&self, table_number: TableNumber) -> CoreResult<OrderRequest> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(OrderRequest {
            table_number,
            items: self
                .items
                .iter()
                .map(|item| OrderLineRequest {
                    product_id: item.id,
                    quantity: item.quantity,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramen() -> Product {
        Product::new(1, "Ramen", Money::new(800))
    }

    fn gyoza() -> Product {
        Product::new(2, "Gyoza", Money::new(400))
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(&ramen());
        cart.add(&ramen());
        cart.add(&gyoza());

        assert_eq!(
            cart.items(),
            &[
                CartItem {
                    id: ProductId(1),
                    name: "Ramen".to_string(),
                    price: Money::new(800),
                    quantity: 2,
                },
                CartItem {
                    id: ProductId(2),
                    name: "Gyoza".to_string(),
                    price: Money::new(400),
                    quantity: 1,
                },
            ]
        );
        assert_eq!(cart.total(), Money::new(2000));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_one_line_per_product_with_call_count_quantity() {
        let products = [ramen(), gyoza(), Product::new(3, "Edamame", Money::new(300))];
        let calls = [0usize, 2, 1, 1, 0, 2, 2, 0];

        let mut cart = Cart::new();
        for &index in &calls {
            cart.add(&products[index]);
        }

        assert_eq!(cart.line_count(), 3);
        for product in &products {
            let expected = calls
                .iter()
                .filter(|&&index| products[index].id == product.id)
                .count() as u32;
            assert_eq!(cart.get(product.id).unwrap().quantity, expected);
        }
        // First-added order is kept.
        let ids: Vec<_> = cart.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3), ProductId(2)]);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_line_keeps_price_from_when_it_was_added() {
        let mut cart = Cart::new();
        cart.add(&ramen());

        let mut repriced = ramen();
        repriced.price = Money::new(900);
        cart.add(&repriced);

        assert_eq!(cart.get(ProductId(1)).unwrap().price, Money::new(800));
        assert_eq!(cart.total(), Money::new(1600));
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&ramen());
        let before = cart.clone();

        assert!(!cart.remove(ProductId(99)));
        assert_eq!(cart, before);

        assert!(cart.remove(ProductId(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(&ramen());

        assert!(cart.update_quantity(ProductId(1), 4));
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Money::new(3200));

        assert!(!cart.update_quantity(ProductId(99), 4));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_stops_at_line_limit() {
        let mut cart = Cart::new();
        for _ in 0..MAX_LINE_QUANTITY {
            assert!(cart.add(&ramen()));
        }

        assert!(!cart.add(&ramen()));
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, MAX_LINE_QUANTITY);
        assert_eq!(cart.total(), Money::new(800 * 99));

        // Other lines are unaffected.
        assert!(cart.add(&gyoza()));
        assert_eq!(cart.item_count(), MAX_LINE_QUANTITY + 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_line_limit() {
        let mut cart = Cart::new();
        cart.add(&ramen());

        assert!(cart.update_quantity(ProductId(1), u32::MAX));
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, MAX_LINE_QUANTITY);

        // Still no overflow when the capped line is tapped again.
        assert!(!cart.add(&ramen()));
        assert_eq!(cart.item_count(), MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_item_count_saturates() {
        let item = |id: i64| CartItem {
            id: ProductId(id),
            name: "Bulk".to_string(),
            price: Money::new(1),
            quantity: u32::MAX,
        };
        let cart = Cart {
            items: vec![item(1), item(2)],
        };

        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&ramen());
        cart.add(&gyoza());

        assert!(cart.update_quantity(ProductId(1), 0));
        assert!(cart.get(ProductId(1)).is_none());
        assert_eq!(cart.line_count(), 1);
        assert!(cart.items().iter().all(|item| item.quantity >= 1));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&ramen());
        cart.add(&gyoza());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_to_order_request() {
        let mut cart = Cart::new();
        cart.add(&ramen());
        cart.add(&ramen());
        cart.add(&gyoza());

        let request = cart
            .to_order_request(TableNumber::new(5).unwrap())
            .unwrap();
        assert_eq!(request.table_number.get(), 5);
        assert_eq!(
            request.items,
            vec![
                OrderLineRequest {
                    product_id: ProductId(1),
                    quantity: 2
                },
                OrderLineRequest {
                    product_id: ProductId(2),
                    quantity: 1
                },
            ]
        );
    }

    #[test]
    fn test_to_order_request_rejects_empty_cart() {
        let cart = Cart::new();
        assert!(matches!(
            cart.to_order_request(TableNumber::default()),
            Err(CoreError::EmptyCart)
        ));
    }
}
