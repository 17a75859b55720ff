//! User settings for VibePay
//!
//! Currency display, the food budget alert threshold, the suggested reserve
//! share and how many transactions the list view shows.

use serde::{Deserialize, Serialize};

use super::paths::VibepayPaths;
use crate::engine::EngineConfig;
use crate::error::VibepayError;
use crate::models::Money;

/// User settings for VibePay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Food spending above this (in centavos) triggers an alert
    #[serde(default = "default_food_alert_threshold")]
    pub food_alert_threshold: Money,

    /// Percentage of each income suggested for the reserve
    #[serde(default = "default_reserve_percent")]
    pub reserve_percent: u32,

    /// How many transactions the list view shows
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_food_alert_threshold() -> Money {
    Money::from_units_cents(400, 0)
}

fn default_reserve_percent() -> u32 {
    10
}

fn default_recent_transactions() -> usize {
    5
}

fn default_date_format() -> String {
    "%d %b %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            food_alert_threshold: default_food_alert_threshold(),
            reserve_percent: default_reserve_percent(),
            recent_transactions: default_recent_transactions(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &VibepayPaths) -> Result<Self, VibepayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                VibepayError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VibepayError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// The part of the settings the session engine needs
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            currency_symbol: self.currency_symbol.clone(),
            food_alert_threshold: self.food_alert_threshold,
            reserve_percent: self.reserve_percent,
        }
    }
}
