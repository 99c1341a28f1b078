//! # Router
//!
//! Maps locations to the kiosk's four pages.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path              Name              View                Loading        │
//! │  ────              ────              ────                ───────        │
//! │  /                 home              HomeView            eager          │
//! │  /menu             menu              MenuView            lazy           │
//! │  /cart             cart              CartView            lazy           │
//! │  /order-complete   order-complete    OrderCompleteView   lazy           │
//! │  anything else     -                 NotFoundView        eager          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching
//! - The configured base path is stripped first (`/kiosk/menu` → `/menu`)
//! - Query string and fragment are ignored
//! - Case-insensitive, one trailing slash tolerated (`/MENU/` → menu)

mod navigator;

pub use navigator::Navigator;

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A page of the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Menu,
    Cart,
    OrderComplete,
}

/// How a route's view is made available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    /// Built with the registry.
    Eager,
    /// Built on first navigation, then reused.
    Lazy,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Menu, Route::Cart, Route::OrderComplete];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Menu => "/menu",
            Route::Cart => "/cart",
            Route::OrderComplete => "/order-complete",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Menu => "menu",
            Route::Cart => "cart",
            Route::OrderComplete => "order-complete",
        }
    }

    pub fn loading(self) -> Loading {
        match self {
            Route::Home => Loading::Eager,
            Route::Menu | Route::Cart | Route::OrderComplete => Loading::Lazy,
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Found(Route),
    /// No route matched; carries the path as given (without query or fragment).
    NotFound { path: String },
}

impl RouteMatch {
    pub fn route(&self) -> Option<Route> {
        match self {
            RouteMatch::Found(route) => Some(*route),
            RouteMatch::NotFound { .. } => None,
        }
    }
}

/// Resolves locations under a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    /// Base path without a trailing slash; empty when served at `/`.
    base: String,
}

impl Default for Router {
    fn default() -> Self {
        Router::new("/")
    }
}

impl Router {
    pub fn new(base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        let base = if base.is_empty() || base.starts_with('/') {
            base.to_string()
        } else {
            format!("/{}", base)
        };
        Router { base }
    }

    pub fn base_path(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Resolves a location (path, optionally with query and fragment).
    pub fn resolve(&self, location: &str) -> RouteMatch {
        let path = strip_query(location);

        let matched = self
            .strip_base(path)
            .and_then(|relative| {
                let relative = normalize(relative);
                Route::ALL
                    .into_iter()
                    .find(|r| r.path().eq_ignore_ascii_case(&relative))
            });

        match matched {
            Some(route) => {
                debug!(location, route = route.name(), "Route resolved");
                RouteMatch::Found(route)
            }
            None => {
                debug!(location, "No route matched");
                RouteMatch::NotFound {
                    path: path.to_string(),
                }
            }
        }
    }

    /// Full location for a route, including the base path.
    pub fn href(&self, route: Route) -> String {
        match route {
            Route::Home if !self.base.is_empty() => format!("{}/", self.base),
            _ => format!("{}{}", self.base, route.path()),
        }
    }

    /// Route with the given name.
    pub fn by_name(&self, name: &str) -> Option<Route> {
        Route::from_name(name)
    }

    /// Full location for a named route.
    pub fn href_by_name(&self, name: &str) -> Option<String> {
        Route::from_name(name).map(|route| self.href(route))
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let prefix = path.get(..self.base.len())?;
        if !prefix.eq_ignore_ascii_case(&self.base) {
            return None;
        }
        let rest = &path[self.base.len()..];
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Splits off `?query` and `#fragment`.
fn strip_query(location: &str) -> &str {
    let end = location.find(|c: char| c == '?' || c == '#').unwrap_or(location.len());
    &location[..end]
}

fn normalize(path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => path,
    }
}

/// Query parameter value from a location, if present.
pub fn query_param(location: &str, key: &str) -> Option<String> {
    let query = location.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or_default();
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
