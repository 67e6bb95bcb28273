use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_TTL_SECS, DEFAULT_REFRESH_SECS, DEFAULT_TICKERS};

const SETTINGS_KEY: &str = "trip_sheet_settings";

/// User settings that persist across reloads, stored as a single JSON blob
/// in `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub last_sheet_input: String,
    #[serde(default = "default_tickers")]
    pub tickers: String,
    /// Market panel auto-refresh interval in seconds; 0 disables polling
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u32,
    /// Cache lifetime forwarded to the metrics endpoint
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u32,
}

fn default_tickers() -> String {
    DEFAULT_TICKERS.to_string()
}

fn default_refresh_secs() -> u32 {
    DEFAULT_REFRESH_SECS
}

fn default_cache_ttl_secs() -> u32 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            last_sheet_input: String::new(),
            tickers: default_tickers(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl UserSettings {
    /// Load settings from `localStorage`, falling back to defaults when
    /// storage is unavailable or the stored blob does not parse.
    #[must_use]
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return Self::default();
        };
        let Ok(Some(json_str)) = storage.get_item(SETTINGS_KEY) else {
            return Self::default();
        };

        serde_json::from_str(&json_str).unwrap_or_default()
    }

    /// Save settings to `localStorage`. Best-effort: storage failures are
    /// ignored (private browsing modes deny access).
    pub fn save(&self) {
        let Some(window) = web_sys::window() else { return };
        let Ok(Some(storage)) = window.local_storage() else { return };
        let Ok(json_str) = serde_json::to_string(self) else { return };

        let _ = storage.set_item(SETTINGS_KEY, &json_str);
    }
}
