use crate::core::error::{Error, Result};
use crate::core::pipeline::PriorityTable;
use crate::core::wallet::default_priorities;
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/";

const CONFIG_FILE: &str = "config.json";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_price_feed_url")]
    pub price_feed_url: String,
    /// Prefix for currency icons; the code and `.svg` are appended
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
    #[serde(default = "default_from")]
    pub default_from: String,
    #[serde(default = "default_to")]
    pub default_to: String,
    /// Blockchain name → display rank for the wallet list
    #[serde(default = "default_priorities")]
    pub blockchain_priority: PriorityTable,
    /// JSON array of balances to show instead of the demo wallet
    #[serde(default)]
    pub wallet_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_feed_url: default_price_feed_url(),
            icon_base_url: default_icon_base_url(),
            default_from: default_from(),
            default_to: default_to(),
            blockchain_priority: default_priorities(),
            wallet_file: None,
        }
    }
}

fn default_price_feed_url() -> String {
    DEFAULT_PRICE_FEED_URL.to_string()
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "ETH".to_string()
}

/// Location of the config file, if a data directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the config to its default location using an atomic write.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path().ok_or_else(|| Error::Config("no data directory".to_string()))?;
    save_config_to(config, &path).await
}

/// Saves the config to `path` using an atomic write pattern.
/// 1. Writes to a temporary file next to `path`.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
pub async fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    // Create file with restrictive permissions before any data is written
    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
pub async fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => AppConfig::default(),
    }
}

/// Loads the config at `path`. Missing or unreadable files yield defaults.
pub async fn load_config_from(path: &Path) -> AppConfig {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => serde_json::from_str::<AppConfig>(&json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config {}: {e}", path.display());
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// Only call this outside a Tokio runtime, e.g. in `State::new()` before
/// the event loop runs tasks.
pub fn load_config_blocking() -> AppConfig {
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(load_config()),
        Err(e) => {
            tracing::warn!("Could not start runtime to read config: {e}");
            AppConfig::default()
        }
    }
}
