//! # Kiosk
//!
//! Ties the store, router, navigator and views together.
//!
//! ## Navigation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  navigate("/menu?category_id=2")                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  1. Navigator::push                                                     │
//! │  2. Router::resolve ─────────► Found(Menu) / NotFound                  │
//! │  3. Entry action (menu only) ─► load_menu(Some(2))                     │
//! │         │                          │                                    │
//! │         │                          └─ failure ─► alert line on page    │
//! │         ▼                                                               │
//! │  4. ViewRegistry::resolve ───► view (lazy views load on first use)     │
//! │  5. View::render(ctx) ───────► Page                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tabletop_client::{ClientResult, KioskConfig, MenuApi};
use tabletop_core::{CategoryId, Order, TableNumber};
use tracing::{info, warn};

use crate::commands;
use crate::error::ApiError;
use crate::router::{query_param, Navigator, Route, RouteMatch, Router};
use crate::state::OrderStore;
use crate::views::{ViewContext, ViewRegistry};

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub location: String,
    /// Matched route, `None` for the 404 page.
    pub route: Option<Route>,
    pub view: &'static str,
    pub body: String,
}

/// The running kiosk application.
pub struct Kiosk<A> {
    store: OrderStore<A>,
    router: Router,
    navigator: Navigator,
    views: ViewRegistry,
    last_order: Option<Order>,
    started: bool,
}

impl<A> Kiosk<A> {
    pub fn new(api: A, router: Router, table_number: TableNumber) -> Self {
        let navigator = Navigator::new(router.href(Route::Home));
        Kiosk {
            store: OrderStore::with_table_number(api, table_number),
            router,
            navigator,
            views: ViewRegistry::new(),
            last_order: None,
            started: false,
        }
    }

    /// Builds a kiosk using the configured base path and table number.
    pub fn from_config(api: A, config: &KioskConfig) -> ClientResult<Self> {
        Ok(Self::new(
            api,
            Router::new(config.base_path()),
            config.table_number()?,
        ))
    }

    pub fn store(&self) -> &OrderStore<A> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut OrderStore<A> {
        &mut self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn last_order(&self) -> Option<&Order> {
        self.last_order.as_ref()
    }
}

impl<A: MenuApi> Kiosk<A> {
    /// Goes to `location` and renders it.
    pub async fn navigate(&mut self, location: &str) -> Page {
        if self.started {
            self.navigator.push(location);
        } else {
            self.navigator.replace(location);
            self.started = true;
        }
        self.render(location).await
    }

    /// Goes to the named route.
    pub async fn navigate_to(&mut self, route: Route) -> Page {
        let location = self.router.href(route);
        self.navigate(&location).await
    }

    pub async fn back(&mut self) -> Option<Page> {
        let location = self.navigator.back()?.to_string();
        Some(self.render(&location).await)
    }

    pub async fn forward(&mut self) -> Option<Page> {
        let location = self.navigator.forward()?.to_string();
        Some(self.render(&location).await)
    }

    /// Submits the cart and, on success, shows the confirmation page.
    pub async fn place_order(&mut self) -> Result<Page, ApiError> {
        let order = commands::order::submit_order(&mut self.store).await?;
        info!(order_id = %order.id, "Showing order confirmation");
        self.last_order = Some(order);
        Ok(self.navigate_to(Route::OrderComplete).await)
    }

    async fn render(&mut self, location: &str) -> Page {
        let route_match = self.router.resolve(location);
        // Category 0 is "all categories".
        let category_id = query_param(location, "category_id")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&id| id != 0)
            .map(CategoryId);

        let mut alerts = Vec::new();
        if route_match == RouteMatch::Found(Route::Menu) {
            if let Err(e) = commands::menu::load_menu(&mut self.store, category_id).await {
                warn!(error = %e, "Menu shown with stale data");
                alerts.push(e.message);
            }
        }

        let view = self.views.resolve(&route_match).await;
        let body = view.render(&ViewContext {
            state: self.store.state(),
            router: &self.router,
            location,
            last_order: self.last_order.as_ref(),
            alerts: &alerts,
            category_id,
        });

        Page {
            location: location.to_string(),
            route: route_match.route(),
            view: view.name(),
            body,
        }
    }
}
