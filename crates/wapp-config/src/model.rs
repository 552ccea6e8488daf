use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wapp_domain::Currency;

/// Stores user-configurable preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Short code of the currency preset offered by default ("USD" or "IQD").
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for wallet data. Defaults to the
    /// platform data directory under `wapp`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Self::default_currency_value(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_value() -> String {
        "USD".into()
    }

    /// Maps the configured code to one of the known currency presets,
    /// falling back to US dollars for anything unrecognized.
    pub fn preset_currency(&self) -> Currency {
        match self.default_currency.to_ascii_uppercase().as_str() {
            "IQD" => Currency::iqd(),
            _ => Currency::usd(),
        }
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(root) = &self.data_root {
            return root.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("wapp"))
            .unwrap_or_else(|| PathBuf::from("wapp"))
    }
}
