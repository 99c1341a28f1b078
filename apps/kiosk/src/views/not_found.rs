//! Shown for any location no route matches.

use super::{View, ViewContext};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct NotFoundView;

impl View for NotFoundView {
    fn name(&self) -> &'static str {
        "not-found"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> String {
        format!(
            "Page not found: {}\nBack to start: {}\n",
            ctx.location,
            ctx.router.href(Route::Home)
        )
    }
}
