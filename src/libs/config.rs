//! Configuration management for the kranos application.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory resolved by [`DataStorage`]. A missing file is not
//! an error: the defaults are used instead.
//!
//! ## Database location
//!
//! The SQLite file is resolved in this order:
//!
//! 1. The `KRANOS_DB` environment variable (a `.env` file is honoured)
//! 2. `db_path` from `config.json`
//! 3. `kranos.db` inside the data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kranos::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default SQLite file name inside the data directory.
pub const DB_FILE_NAME: &str = "kranos.db";

/// Environment variable that overrides the configured database path.
pub const DB_PATH_ENV: &str = "KRANOS_DB";

const DEFAULT_CURRENCY: &str = "$";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Explicit SQLite file location. `None` keeps the database next to the
    /// configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Symbol printed in front of prices in list screens.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Reads `config.json` from the data directory, falling back to defaults
    /// when the file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to `config.json` in the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default_db = config.db_path()?;

        msg_print!(Message::ConfigModuleDatabase);
        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(default_db.display().to_string())
            .interact_text()?;

        let currency: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCurrency.to_string())
            .default(config.currency.clone())
            .interact_text()?;

        Ok(Config {
            db_path: Some(PathBuf::from(db_path)),
            currency,
        })
    }

    /// Resolves the database file path: `KRANOS_DB`, then `db_path`, then the
    /// default file in the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Formats a price for display, e.g. `$100.00`.
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.currency, price)
    }
}
