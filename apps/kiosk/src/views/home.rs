//! Landing page shown at `/`.

use super::{View, ViewContext};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn name(&self) -> &'static str {
        "home"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let mut out = String::new();
        out.push_str("Welcome!\n");
        out.push_str(&format!("Table {}\n\n", ctx.state.table_number()));
        out.push_str(&format!(
            "Start ordering: {}\n",
            ctx.router.href(Route::Menu)
        ));

        let count = ctx.state.cart().item_count();
        if count > 0 {
            out.push_str(&format!(
                "Continue with your cart ({} items): {}\n",
                count,
                ctx.router.href(Route::Cart)
            ));
        }
        out
    }
}
