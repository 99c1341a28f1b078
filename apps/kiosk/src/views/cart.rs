//! Cart review page.

use super::{alert_lines, row, View, ViewContext};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct CartView;

impl View for CartView {
    fn name(&self) -> &'static str {
        "cart"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let cart = ctx.state.cart();
        let mut out = alert_lines(ctx.alerts);
        out.push_str(&format!("CART  (table {})\n\n", ctx.state.table_number()));

        if cart.is_empty() {
            out.push_str("  Your cart is empty\n");
            out.push_str(&format!("Back to menu: {}\n", ctx.router.href(Route::Menu)));
            return out;
        }

        for item in cart.items() {
            out.push_str(&row(
                &format!("{} x{}", item.name, item.quantity),
                &item.line_total().to_string(),
            ));
        }
        out.push_str(&format!("  {}\n", "-".repeat(40)));
        out.push_str(&row(
            &format!("TOTAL ({} items)", cart.item_count()),
            &cart.total().to_string(),
        ));
        out
    }
}
