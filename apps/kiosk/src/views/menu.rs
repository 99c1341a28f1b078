//! # Menu Page
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MENU                                              Table 5             │
//! │  [Noodles] Sides                                                       │
//! │                                                                         │
//! │    #1 Ramen                                     ¥800                   │
//! │    #3 Udon                                      ¥700                   │
//! │                                                                         │
//! │  Cart: 3 items                                  ¥2,000                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use super::{alert_lines, row, View, ViewContext};
use crate::router::Route;

#[derive(Debug, Default)]
pub struct MenuView;

impl View for MenuView {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let state = ctx.state;
        let mut out = alert_lines(ctx.alerts);
        out.push_str(&format!("MENU  (table {})\n", state.table_number()));

        let tabs: Vec<String> = state
            .categories()
            .iter()
            .filter(|c| c.is_active)
            .map(|c| {
                if Some(c.id) == ctx.category_id {
                    format!("[{}]", c.name)
                } else {
                    c.name.clone()
                }
            })
            .collect();
        if !tabs.is_empty() {
            out.push_str(&tabs.join(" "));
            out.push('\n');
        }
        out.push('\n');

        let products: Vec<_> = match ctx.category_id {
            Some(id) => state.products_in(id).collect(),
            None => state.products().iter().collect(),
        };

        if products.is_empty() {
            out.push_str("  No items to show\n");
        }
        for product in products {
            let label = if product.is_available {
                format!("#{} {}", product.id, product.name)
            } else {
                format!("#{} {} (sold out)", product.id, product.name)
            };
            out.push_str(&row(&label, &product.price.to_string()));
        }

        let cart = state.cart();
        out.push('\n');
        out.push_str(&row(
            &format!("Cart: {} items", cart.item_count()),
            &cart.total().to_string(),
        ));
        out.push_str(&format!("View cart: {}\n", ctx.router.href(Route::Cart)));
        out
    }
}
