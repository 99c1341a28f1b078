//! # Menu Commands
//!
//! Loading categories and products from the service into the store.

use serde::Serialize;
use tabletop_client::MenuApi;
use tabletop_core::{Category, CategoryId, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::OrderStore;

/// What the menu page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub category_id: Option<CategoryId>,
}

/// Fetches categories, then products (optionally for one category).
///
/// Both requests are always attempted; whichever succeeds updates the
/// store. The first failure is returned.
pub async fn load_menu<A: MenuApi>(
    store: &mut OrderStore<A>,
    category_id: Option<CategoryId>,
) -> Result<MenuResponse, ApiError> {
    debug!(category_id = ?category_id, "load_menu command");

    let categories = store.fetch_categories().await.map(|c| c.to_vec());
    let products = store.fetch_products(category_id).await.map(|p| p.to_vec());

    Ok(MenuResponse {
        categories: categories?,
        products: products?,
        category_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::FakeMenuApi;

    #[tokio::test]
    async fn test_load_full_menu() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());

        let menu = load_menu(&mut store, None).await.unwrap();
        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.products.len(), 3);
        assert_eq!(store.state().products().len(), 3);
    }

    #[tokio::test]
    async fn test_load_one_category() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());

        let menu = load_menu(&mut store, Some(CategoryId(1))).await.unwrap();
        let names: Vec<_> = menu.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ramen", "Udon"]);
        assert_eq!(menu.category_id, Some(CategoryId(1)));
    }

    #[tokio::test]
    async fn test_failure_is_returned() {
        let mut store = OrderStore::new(FakeMenuApi::with_menu());
        store.api().fail_with_status(503);

        let err = load_menu(&mut store, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ServerError);
        assert_eq!(store.api().category_requests(), 1);
        assert_eq!(store.api().product_requests(), vec![None]);
        assert!(store.state().categories().is_empty());
    }
}
