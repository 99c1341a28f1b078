//! Confirmation page after a successful order.

use super::{row, View, ViewContext};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct OrderCompleteView;

impl View for OrderCompleteView {
    fn name(&self) -> &'static str {
        "order-complete"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let mut out = String::new();
        match ctx.last_order {
            Some(order) => {
                out.push_str("Thank you! Your order has been placed.\n\n");
                out.push_str(&row("Order", &format!("#{}", order.id)));
                out.push_str(&row("Table", &order.table_number.to_string()));
                out.push_str(&row("Status", &order.status.to_string()));
                out.push_str(&row("Total", &order.total_price.to_string()));
            }
            None => out.push_str("No order has been placed yet.\n"),
        }
        out.push_str(&format!(
            "\nOrder more: {}\n",
            ctx.router.href(Route::Menu)
        ));
        out
    }
}
