//! # tabletop-client: Menu/Order Service Client
//!
//! Network access and configuration for the Tabletop kiosk.
//!
//! ## Modules
//!
//! - [`api`] - `MenuApi` trait and its HTTP implementation
//! - [`config`] - `KioskConfig` (TOML file + environment overrides)
//! - [`error`] - `ClientError`
//!
//! ## Usage
//! ```rust,no_run
//! use tabletop_client::{HttpMenuApi, KioskConfig, MenuApi};
//!
//! # async fn example() -> tabletop_client::ClientResult<()> {
//! let config = KioskConfig::load(None)?;
//! let api = HttpMenuApi::from_config(&config)?;
//! let categories = api.list_categories().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::{HttpMenuApi, MenuApi};
pub use config::KioskConfig;
pub use error::{ClientError, ClientResult};
