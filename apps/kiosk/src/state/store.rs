//! # Order Store
//!
//! The kiosk's single source of truth: menu categories, products, the cart
//! and the table number.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Store                                          │
//! │                                                                         │
//! │  View / Command          Action                  Mutation               │
//! │  ──────────────          ──────                  ────────               │
//! │                                                                         │
//! │  Open menu ─────────► fetch_categories() ──► SetCategories             │
//! │                       fetch_products()   ──► SetProducts               │
//! │                                                                         │
//! │  Tap product ──────────────────────────────► AddToCart                 │
//! │  Change quantity ──────────────────────────► UpdateCartItemQuantity    │
//! │  Tap remove ───────────────────────────────► RemoveFromCart            │
//! │                                                                         │
//! │  Place order ───────► submit_order()     ──► ClearCart                 │
//! │                                                                         │
//! │  Getters: cart_total(), cart_item_count() (recomputed on each call)    │
//! │                                                                         │
//! │  NOTE: State changes only through commit(). Actions apply exactly one  │
//! │        mutation on success and none on failure.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The store is an ordinary owned value. Every mutation and every action
//! takes `&mut self`, so there is one writer at a time and async actions
//! on the same store run one after another.

use serde::{Deserialize, Serialize};
use tabletop_client::{ClientResult, MenuApi};
use tabletop_core::{
    Cart, CartItem, Category, CategoryId, Money, Order, Product, ProductId, TableNumber,
};
use tracing::{debug, error, info, warn};

/// Everything the store holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    categories: Vec<Category>,
    products: Vec<Product>,
    cart: Cart,
    table_number: TableNumber,
}

impl StoreState {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn table_number(&self) -> TableNumber {
        self.table_number
    }

    /// Looks up a product in the loaded menu.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products belonging to `category_id`, in menu order.
    pub fn products_in(&self, category_id: CategoryId) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.category_id == category_id)
    }
}

/// A named state change. The only way to modify a [`StoreState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetCategories(Vec<Category>),
    SetProducts(Vec<Product>),
    AddToCart(Product),
    RemoveFromCart(ProductId),
    /// A quantity of 0 removes the line.
    UpdateCartItemQuantity { product_id: ProductId, quantity: u32 },
    ClearCart,
    SetTableNumber(TableNumber),
}

impl Mutation {
    fn name(&self) -> &'static str {
        match self {
            Mutation::SetCategories(_) => "set_categories",
            Mutation::SetProducts(_) => "set_products",
            Mutation::AddToCart(_) => "add_to_cart",
            Mutation::RemoveFromCart(_) => "remove_from_cart",
            Mutation::UpdateCartItemQuantity { .. } => "update_cart_item_quantity",
            Mutation::ClearCart => "clear_cart",
            Mutation::SetTableNumber(_) => "set_table_number",
        }
    }
}

/// Cart totals summary for views and command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u32,
    /// Sum of price × quantity.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

/// Store state plus the service it loads from and submits to.
#[derive(Debug)]
pub struct OrderStore<A> {
    api: A,
    state: StoreState,
}

impl<A> OrderStore<A> {
    /// Creates a store with empty collections and table number 1.
    pub fn new(api: A) -> Self {
        OrderStore {
            api,
            state: StoreState::default(),
        }
    }

    /// Creates a store starting at a configured table.
    pub fn with_table_number(api: A, table_number: TableNumber) -> Self {
        let mut store = Self::new(api);
        store.set_table_number(table_number);
        store
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies one mutation.
    pub fn commit(&mut self, mutation: Mutation) {
        let name = mutation.name();
        let state = &mut self.state;

        match mutation {
            Mutation::SetCategories(categories) => state.categories = categories,
            Mutation::SetProducts(products) => state.products = products,
            Mutation::AddToCart(product) => {
                if !state.cart.add(&product) {
                    debug!(product_id = %product.id, "add_to_cart: line already at limit");
                }
            }
            Mutation::RemoveFromCart(product_id) => {
                if !state.cart.remove(product_id) {
                    debug!(product_id = %product_id, "remove_from_cart: not in cart");
                }
            }
            Mutation::UpdateCartItemQuantity {
                product_id,
                quantity,
            } => {
                if !state.cart.update_quantity(product_id, quantity) {
                    debug!(product_id = %product_id, "update_cart_item_quantity: not in cart");
                }
            }
            Mutation::ClearCart => state.cart.clear(),
            Mutation::SetTableNumber(table_number) => state.table_number = table_number,
        }

        debug!(
            mutation = name,
            cart_lines = state.cart.line_count(),
            "Committed"
        );
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.commit(Mutation::SetCategories(categories));
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.commit(Mutation::SetProducts(products));
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.commit(Mutation::AddToCart(product));
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.commit(Mutation::RemoveFromCart(product_id));
    }

    pub fn update_cart_item_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.commit(Mutation::UpdateCartItemQuantity {
            product_id,
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.commit(Mutation::ClearCart);
    }

    pub fn set_table_number(&mut self, table_number: TableNumber) {
        self.commit(Mutation::SetTableNumber(table_number));
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn cart_items(&self) -> &[CartItem] {
        self.state.cart.items()
    }

    /// Σ price × quantity over the cart.
    pub fn cart_total(&self) -> Money {
        self.state.cart.total()
    }

    /// Σ quantity over the cart.
    pub fn cart_item_count(&self) -> u32 {
        self.state.cart.item_count()
    }

    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.state.cart)
    }
}

impl<A: MenuApi> OrderStore<A> {
    // =========================================================================
    // Actions
    // =========================================================================

    /// Loads the category list and replaces the stored one.
    ///
    /// On failure the error is logged and returned; stored categories are
    /// left as they were.
    pub async fn fetch_categories(&mut self) -> ClientResult<&[Category]> {
        let result = self.api.list_categories().await;
        match result {
            Ok(categories) => {
                info!(count = categories.len(), "Fetched categories");
                self.set_categories(categories);
                Ok(self.state.categories())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch categories");
                Err(e)
            }
        }
    }

    /// Loads products (all, or one category) and replaces the stored list.
    ///
    /// On failure the error is logged and returned; stored products are
    /// left as they were.
    pub async fn fetch_products(
        &mut self,
        category_id: Option<CategoryId>,
    ) -> ClientResult<&[Product]> {
        let result = self.api.list_products(category_id).await;
        match result {
            Ok(products) => {
                info!(count = products.len(), category_id = ?category_id, "Fetched products");
                self.set_products(products);
                Ok(self.state.products())
            }
            Err(e) => {
                error!(error = %e, category_id = ?category_id, "Failed to fetch products");
                Err(e)
            }
        }
    }

    /// Submits the cart as an order for the current table.
    ///
    /// ## Behavior
    /// - Empty cart: rejected without contacting the service
    /// - Success: cart is cleared, the service's confirmation is returned
    /// - Accepted but unconfirmed (2xx with an unreadable body): cart is
    ///   cleared and the error returned, so a retry cannot place it twice
    /// - Failure: logged and returned, cart is kept so the guest can retry
    pub async fn submit_order(&mut self) -> ClientResult<Order> {
        let request = match self.state.cart.to_order_request(self.state.table_number) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Failed to submit order");
                return Err(e.into());
            }
        };

        let result = self.api.create_order(&request).await;
        match result {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    table_number = %order.table_number,
                    total = %order.total_price,
                    "Order placed"
                );
                self.clear_cart();
                Ok(order)
            }
            Err(e) if e.is_order_accepted() => {
                warn!(error = %e, table_number = %request.table_number, "Order placed without confirmation");
                self.clear_cart();
                Err(e)
            }
            Err(e) => {
                error!(error = %e, table_number = %request.table_number, "Failed to submit order");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMenuApi;
    use tabletop_client::ClientError;
    use tabletop_core::{OrderLineRequest, OrderRequest};

    fn ramen() -> Product {
        Product::new(1, "Ramen", Money::new(800))
    }

    fn gyoza() -> Product {
        Product::new(2, "Gyoza", Money::new(400))
    }

    fn store_with_scenario_cart() -> OrderStore<FakeMenuApi> {
        let mut store = OrderStore::new(FakeMenuApi::default());
        store.add_to_cart(ramen());
        store.add_to_cart(ramen());
        store.add_to_cart(gyoza());
        store
    }

    #[test]
    fn test_initial_state() {
        let store = OrderStore::new(FakeMenuApi::default());
        let state = store.state();

        assert!(state.categories().is_empty());
        assert!(state.products().is_empty());
        assert!(state.cart().is_empty());
        assert_eq!(state.table_number().get(), 1);
        assert!(store.cart_total().is_zero());
        assert_eq!(store.cart_item_count(), 0);
    }

    #[test]
    fn test_add_to_cart_scenario() {
        let store = store_with_scenario_cart();

        let items = store.cart_items();
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].id, items[0].quantity), (ProductId(1), 2));
        assert_eq!((items[1].id, items[1].quantity), (ProductId(2), 1));
        assert_eq!(store.cart_total(), Money::new(2000));
        assert_eq!(store.cart_item_count(), 3);
        assert_eq!(
            store.cart_totals(),
            CartTotals {
                line_count: 2,
                item_count: 3,
                total: Money::new(2000),
            }
        );
    }

    #[test]
    fn test_remove_from_cart_missing_id_is_noop() {
        let mut store = store_with_scenario_cart();
        let before = store.state().clone();

        store.remove_from_cart(ProductId(99));
        assert_eq!(store.state(), &before);

        store.remove_from_cart(ProductId(1));
        assert_eq!(store.cart_item_count(), 1);
    }

    #[test]
    fn test_update_cart_item_quantity() {
        let mut store = store_with_scenario_cart();

        store.update_cart_item_quantity(ProductId(2), 5);
        assert_eq!(store.cart_total(), Money::new(1600 + 2000));

        // Unknown product: nothing happens.
        store.update_cart_item_quantity(ProductId(99), 5);
        assert_eq!(store.cart_items().len(), 2);
    }

    #[test]
    fn test_update_cart_item_quantity_zero_removes_line() {
        let mut store = store_with_scenario_cart();

        store.update_cart_item_quantity(ProductId(1), 0);
        assert_eq!(store.cart_items().len(), 1);
        assert_eq!(store.cart_items()[0].id, ProductId(2));
    }

    #[test]
    fn test_clear_cart_zeroes_totals() {
        let mut store = store_with_scenario_cart();
        store.clear_cart();

        assert!(store.cart_total().is_zero());
        assert_eq!(store.cart_item_count(), 0);
    }

    #[test]
    fn test_set_collections_replace_wholesale() {
        let mut store = OrderStore::new(FakeMenuApi::default());
        store.set_products(vec![ramen(), gyoza()]);
        store.set_products(vec![gyoza()]);
        assert_eq!(store.state().products(), &[gyoza()]);

        let table = TableNumber::new(8).unwrap();
        store.set_table_number(table);
        assert_eq!(store.state().table_number(), table);
    }

    #[tokio::test]
    async fn test_fetch_categories_sets_state() {
        let api = FakeMenuApi::with_menu();
        let mut store = OrderStore::new(api);

        let categories = store.fetch_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(store.state().categories().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_products_passes_category_filter() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());

        store.fetch_products(Some(CategoryId(2))).await.unwrap();
        assert!(store
            .state()
            .products()
            .iter()
            .all(|p| p.category_id == CategoryId(2)));

        store.fetch_products(None).await.unwrap();
        assert_eq!(store.state().products().len(), 3);

        assert_eq!(
            store.api().product_requests(),
            vec![Some(CategoryId(2)), None]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_returns_error_and_keeps_state() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());
        store.fetch_categories().await.unwrap();
        store.fetch_products(None).await.unwrap();
        let before = store.state().clone();

        store.api().fail_with_status(503);
        let err = store.fetch_categories().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(store.fetch_products(None).await.is_err());

        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn test_submit_order_sends_cart_and_clears_it() {
        let mut store = store_with_scenario_cart();
        store.set_table_number(TableNumber::new(5).unwrap());

        let order = store.submit_order().await.unwrap();
        assert_eq!(order.table_number.get(), 5);
        assert!(store.state().cart().is_empty());

        assert_eq!(
            store.api().submitted_orders(),
            vec![OrderRequest {
                table_number: TableNumber::new(5).unwrap(),
                items: vec![
                    OrderLineRequest {
                        product_id: ProductId(1),
                        quantity: 2
                    },
                    OrderLineRequest {
                        product_id: ProductId(2),
                        quantity: 1
                    },
                ],
            }]
        );
    }

    #[tokio::test]
    async fn test_submit_order_failure_keeps_cart() {
        let mut store = store_with_scenario_cart();
        store.api().fail_with_status(500);

        let err = store.submit_order().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(store.cart_item_count(), 3);
    }

    #[tokio::test]
    async fn test_submit_order_accepted_without_confirmation_clears_cart() {
        let mut store = store_with_scenario_cart();
        store.api().unreadable_confirmation();

        let err = store.submit_order().await.unwrap_err();
        assert!(err.is_order_accepted());
        assert!(store.state().cart().is_empty());
        assert_eq!(store.api().submitted_orders().len(), 1);

        // Nothing left to send twice.
        let err = store.submit_order().await.unwrap_err();
        assert!(matches!(err, ClientError::Core(_)));
        assert_eq!(store.api().submitted_orders().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_is_rejected_locally() {
        let mut store = OrderStore::new(FakeMenuApi::default());

        let err = store.submit_order().await.unwrap_err();
        assert!(matches!(err, ClientError::Core(_)));
        assert!(store.api().submitted_orders().is_empty());
    }
}
