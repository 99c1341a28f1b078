//! # Tabletop Kiosk Entry Point
//!
//! ```text
//! tabletop-kiosk [LOCATION...]
//!
//!   tabletop-kiosk                      home page
//!   tabletop-kiosk /menu                menu (all categories)
//!   tabletop-kiosk "/menu?category_id=2" /cart
//! ```
//!
//! The actual setup is in lib.rs.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let locations: Vec<String> = std::env::args().skip(1).collect();

    match tabletop_kiosk::run(locations).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tabletop-kiosk: {}", e);
            ExitCode::FAILURE
        }
    }
}
