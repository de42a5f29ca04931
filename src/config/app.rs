//! Bot presentation settings loaded from config.toml.
//!
//! This module provides functionality to load the operator-facing settings
//! that are text, not code: the payment requisites shown to contributors,
//! the list of accepted banks, and the item pipeline status labels. A
//! missing file falls back to built-in defaults so a fresh checkout runs.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Transfer requisites shown by `/payment_details` and `/contribute`
    pub payment_details: String,
    /// Banks a contributor can declare a transfer from
    pub banks: Vec<String>,
    /// Pipeline status labels an item can carry, in pipeline order;
    /// the first label is the default for new items
    pub item_statuses: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            payment_details: "Transfer details are not configured yet.\n\
                              Ask an administrator before sending money."
                .to_string(),
            banks: vec![
                "Sberbank".to_string(),
                "T-Bank".to_string(),
                "Alfa-Bank".to_string(),
                "Ozon Bank".to_string(),
                "VTB".to_string(),
                "Sovcombank".to_string(),
                "Gazprombank".to_string(),
            ],
            item_statuses: vec![
                "Purchased".to_string(),
                "En route to warehouse".to_string(),
                "At warehouse".to_string(),
                "En route to Moscow".to_string(),
                "In Moscow".to_string(),
                "En route to St. Petersburg".to_string(),
                "In stock".to_string(),
                "Sold".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// The default pipeline status for newly added items.
    #[must_use]
    pub fn default_item_status(&self) -> &str {
        self.item_statuses
            .first()
            .map_or("Purchased", String::as_str)
    }
}

/// Loads bot settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads bot settings from the default location (./config.toml), falling
/// back to built-in defaults when the file does not exist.
pub fn load_default_config() -> Result<AppConfig> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        Ok(AppConfig::default())
    }
}
