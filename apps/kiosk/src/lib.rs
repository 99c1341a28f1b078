//! # Tabletop Kiosk Library
//!
//! The table-side ordering app: guests browse the menu, build a cart and
//! send the order to the kitchen.
//!
//! ## Module Organization
//! ```text
//! tabletop_kiosk/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── kiosk.rs        ◄─── Kiosk: navigation, entry actions, rendering
//! ├── router/
//! │   ├── mod.rs      ◄─── Route table, base path, matching
//! │   └── navigator.rs◄─── Back/forward history
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── store.rs    ◄─── OrderStore, Mutation, CartTotals
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── menu.rs     ◄─── Menu loading
//! │   └── order.rs    ◄─── Table number & order submission
//! ├── views/          ◄─── Home (eager), Menu/Cart/OrderComplete (lazy), 404
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod kiosk;
pub mod router;
pub mod state;
pub mod views;

#[cfg(test)]
mod testing;

pub use error::{ApiError, ErrorCode};
pub use kiosk::{Kiosk, Page};
pub use router::{Navigator, Route, RouteMatch, Router};
pub use state::{CartTotals, Mutation, OrderStore, StoreState};

use tabletop_client::{HttpMenuApi, KioskConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the kiosk, rendering each location in turn.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Kiosk Startup                                     │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,tabletop=debug, can be overridden with RUST_LOG     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • kiosk.toml + TABLETOP_* environment overrides                     │
/// │                                                                         │
/// │  3. Build Service Client ─────────────────────────────────────────────► │
/// │     • HttpMenuApi with the configured base URL and timeout              │
/// │                                                                         │
/// │  4. Create Kiosk ─────────────────────────────────────────────────────► │
/// │     • OrderStore at the configured table, router at the base path       │
/// │                                                                         │
/// │  5. Render Locations ─────────────────────────────────────────────────► │
/// │     • Each argument in order; the home page when none are given         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(locations: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Tabletop kiosk");

    let config = KioskConfig::load(None)?;
    let api = HttpMenuApi::from_config(&config)?;
    info!(base_url = %api.base_url(), table_number = config.kiosk.table_number, "Kiosk configured");

    let mut kiosk = Kiosk::from_config(api, &config)?;

    let locations = if locations.is_empty() {
        vec![kiosk.router().href(Route::Home)]
    } else {
        locations
    };

    for location in &locations {
        let page = kiosk.navigate(location).await;
        println!("{}", page.body);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tabletop=trace` - Show trace for tabletop crates only
/// - Default: `info,tabletop=debug`
///
/// Logs go to stderr so rendered pages on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tabletop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
