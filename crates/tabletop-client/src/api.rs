//! # Menu/Order Service API
//!
//! The three calls the kiosk makes, behind the [`MenuApi`] trait so the
//! store can run against the real service or an in-memory fake.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /api/categories/                  → [Category]                   │
//! │  GET  /api/products/                    → [Product]                    │
//! │  GET  /api/products/?category_id=<id>   → [Product] (one category)     │
//! │  POST /api/orders/  {table_number, items[]} → Order                    │
//! │                                                                         │
//! │  Any non-2xx status → ClientError::Status                              │
//! │  Unparseable body   → ClientError::Decode                              │
//! │    (order accepted) → ClientError::OrderUnconfirmed                    │
//! │  category_id 0      → no filter (same as None)                         │
//! │  No response        → ClientError::Request                             │
//! │  No retries: one call, one attempt.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tabletop_core::{Category, CategoryId, Order, OrderRequest, Product};
use tracing::{debug, warn};
use url::Url;

use crate::config::KioskConfig;
use crate::error::{ClientError, ClientResult};

pub const CATEGORIES_PATH: &str = "api/categories/";
pub const PRODUCTS_PATH: &str = "api/products/";
pub const ORDERS_PATH: &str = "api/orders/";

/// Operations offered by the menu/order service.
pub trait MenuApi {
    /// Lists the menu categories.
    fn list_categories(&self) -> impl Future<Output = ClientResult<Vec<Category>>> + Send;

    /// Lists products, optionally limited to one category.
    fn list_products(
        &self,
        category_id: Option<CategoryId>,
    ) -> impl Future<Output = ClientResult<Vec<Product>>> + Send;

    /// Places an order and returns the service's confirmation.
    fn create_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = ClientResult<Order>> + Send;
}

/// [`MenuApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpMenuApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpMenuApi {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// A base URL with a path prefix (`http://host/shop`) is treated as a
    /// directory, so endpoints resolve to `http://host/shop/api/...`.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpMenuApi {
            http: builder.build()?,
            base_url,
        })
    }

    /// Creates a client from the kiosk configuration.
    pub fn from_config(config: &KioskConfig) -> ClientResult<Self> {
        Self::new(config.base_url()?, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// URL for the product list; the query string is present only when a
    /// category is given. Category id 0 means "all categories" to the
    /// service, so it is sent without a filter.
    pub fn products_url(&self, category_id: Option<CategoryId>) -> ClientResult<Url> {
        let mut url = self.endpoint(PRODUCTS_PATH)?;
        if let Some(id) = category_id.filter(|id| id.0 != 0) {
            url.query_pairs_mut()
                .append_pair("category_id", &id.to_string());
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let (_, body) = Self::read_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Status and body of a 2xx response; anything else is `Status`.
    async fn read_success(response: reqwest::Response) -> ClientResult<(u16, String)> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Service returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok((status.as_u16(), body))
    }
}

impl MenuApi for HttpMenuApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let url = self.endpoint(CATEGORIES_PATH)?;
        self.get_json(url).await
    }

    async fn list_products(&self, category_id: Option<CategoryId>) -> ClientResult<Vec<Product>> {
        let url = self.products_url(category_id)?;
        self.get_json(url).await
    }

    async fn create_order(&self, order: &OrderRequest) -> ClientResult<Order> {
        let url = self.endpoint(ORDERS_PATH)?;
        debug!(%url, table_number = %order.table_number, lines = order.items.len(), "POST");
        let response = self.http.post(url).json(order).send().await?;
        let (status, body) = Self::read_success(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(status, error = %e, "Order accepted but confirmation unreadable");
            ClientError::OrderUnconfirmed {
                status,
                body,
                reason: e.to_string(),
            }
        })
    }
}
