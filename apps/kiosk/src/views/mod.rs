//! # Views
//!
//! One view per page, rendered to text from the store state.
//!
//! ## Loading
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ViewRegistry                                         │
//! │                                                                         │
//! │  Eager (built in new()):     HomeView, NotFoundView                     │
//! │                                                                         │
//! │  Lazy (built on first use):  MenuView, CartView, OrderCompleteView      │
//! │                                                                         │
//! │  view(Route::Menu) ──► OnceCell empty? ──yes──► loader(Menu).await     │
//! │                              │                        │                 │
//! │                              no                       ▼                 │
//! │                              │                 store in OnceCell        │
//! │                              ▼                        │                 │
//! │                        cached Arc<dyn View> ◄─────────┘                 │
//! │                                                                         │
//! │  Concurrent first requests wait on the same load; the loader runs      │
//! │  at most once per route.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod home;
mod menu;
mod not_found;
mod order_complete;

pub use cart::CartView;
pub use home::HomeView;
pub use menu::MenuView;
pub use not_found::NotFoundView;
pub use order_complete::OrderCompleteView;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tabletop_core::{CategoryId, Order};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::router::{Loading, Route, RouteMatch, Router};
use crate::state::StoreState;

/// Everything a view may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub state: &'a StoreState,
    pub router: &'a Router,
    /// Location being rendered, as navigated to.
    pub location: &'a str,
    /// Most recent order confirmation, if any.
    pub last_order: Option<&'a Order>,
    /// Errors raised while entering the page.
    pub alerts: &'a [String],
    /// Category filter for the menu page.
    pub category_id: Option<CategoryId>,
}

/// A renderable page.
pub trait View: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, ctx: &ViewContext<'_>) -> String;
}

pub type ViewFuture = Pin<Box<dyn Future<Output = Arc<dyn View>> + Send>>;

/// Produces the view for a lazily loaded route.
pub type ViewLoader = Arc<dyn Fn(Route) -> ViewFuture + Send + Sync>;

/// Default loader: builds the page's view.
fn load_view(route: Route) -> ViewFuture {
    Box::pin(async move {
        debug!(route = route.name(), "Loading view");
        let view: Arc<dyn View> = match route {
            Route::Home => Arc::new(HomeView),
            Route::Menu => Arc::new(MenuView),
            Route::Cart => Arc::new(CartView),
            Route::OrderComplete => Arc::new(OrderCompleteView),
        };
        view
    })
}

/// Holds eager views and caches lazy ones.
pub struct ViewRegistry {
    home: Arc<dyn View>,
    not_found: Arc<dyn View>,
    lazy: HashMap<Route, OnceCell<Arc<dyn View>>>,
    loader: ViewLoader,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::with_loader(Arc::new(load_view))
    }

    /// Uses `loader` for lazy routes.
    pub fn with_loader(loader: ViewLoader) -> Self {
        let lazy = Route::ALL
            .into_iter()
            .filter(|r| r.loading() == Loading::Lazy)
            .map(|r| (r, OnceCell::new()))
            .collect();

        ViewRegistry {
            home: Arc::new(HomeView),
            not_found: Arc::new(NotFoundView),
            lazy,
            loader,
        }
    }

    /// True once the route's view is available without loading.
    pub fn is_loaded(&self, route: Route) -> bool {
        match self.lazy.get(&route) {
            Some(cell) => cell.initialized(),
            None => true,
        }
    }

    /// View for a route, loading it on first use.
    pub async fn view(&self, route: Route) -> Arc<dyn View> {
        match self.lazy.get(&route) {
            Some(cell) => cell
                .get_or_init(|| (self.loader)(route))
                .await
                .clone(),
            None => self.home.clone(),
        }
    }

    /// View for a resolved location; unmatched locations get the 404 view.
    pub async fn resolve(&self, route_match: &RouteMatch) -> Arc<dyn View> {
        match route_match {
            RouteMatch::Found(route) => self.view(*route).await,
            RouteMatch::NotFound { .. } => self.not_found.clone(),
        }
    }
}

/// `  Ramen x2        ¥1,600` style row.
fn row(label: &str, value: &str) -> String {
    format!("  {:<28}{:>12}\n", label, value)
}

fn alert_lines(alerts: &[String]) -> String {
    alerts.iter().map(|a| format!("! {}\n", a)).collect()
}
