//! # Kiosk Configuration
//!
//! Where the menu/order service lives and how this kiosk is set up.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TABLETOP_API_URL=http://10.0.0.5:8000                              │
//! │     TABLETOP_TABLE_NUMBER=12                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $TABLETOP_CONFIG, else                         │
//! │     ~/.config/tabletop-kiosk/kiosk.toml (Linux)                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8000, table 1, base path "/"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! request_timeout_secs = 30  # 0 disables the timeout
//!
//! [kiosk]
//! table_number = 1
//! base_path = "/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tabletop_core::TableNumber;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TABLETOP_CONFIG";

// =============================================================================
// API Settings
// =============================================================================

/// Connection settings for the menu/order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Origin (and optional path prefix) the `/api/...` endpoints hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. 0 means wait forever.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

// =============================================================================
// Kiosk Settings
// =============================================================================

/// Settings for this physical kiosk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskSettings {
    /// Table the kiosk sits at. Guests can still change it in the app.
    #[serde(default = "default_table_number")]
    pub table_number: u32,

    /// Path prefix the app is served under (router base).
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_table_number() -> u32 {
    1
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for KioskSettings {
    fn default() -> Self {
        KioskSettings {
            table_number: default_table_number(),
            base_path: default_base_path(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete kiosk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub kiosk: KioskSettings,
}

impl KioskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kiosk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading kiosk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load kiosk config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ClientResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        self.base_url()?;

        if self.kiosk.table_number == 0 {
            return Err(ClientError::InvalidConfig(
                "table_number must be greater than 0".into(),
            ));
        }

        if !self.kiosk.base_path.starts_with('/') {
            return Err(ClientError::InvalidConfig(format!(
                "base_path must start with '/', got: {}",
                self.kiosk.base_path
            )));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TABLETOP_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("TABLETOP_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.request_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid request timeout"),
            }
        }

        if let Some(table) = lookup("TABLETOP_TABLE_NUMBER") {
            match table.parse::<u32>() {
                Ok(n) => {
                    debug!(table_number = n, "Overriding table number from environment");
                    self.kiosk.table_number = n;
                }
                Err(_) => warn!(value = %table, "Ignoring invalid table number"),
            }
        }

        if let Some(base) = lookup("TABLETOP_BASE_PATH") {
            self.kiosk.base_path = base;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tabletop", "kiosk")
            .map(|dirs| dirs.config_dir().join("kiosk.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Parsed service base URL. Only http and https are accepted.
    pub fn base_url(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.api.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::InvalidUrl(format!(
                "base_url must use http or https, got: {}",
                other
            ))),
        }
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.api.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Configured starting table number.
    pub fn table_number(&self) -> ClientResult<TableNumber> {
        TableNumber::new(self.kiosk.table_number)
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))
    }

    pub fn base_path(&self) -> &str {
        &self.kiosk.base_path
    }
}
