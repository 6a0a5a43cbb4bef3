//! Shared application settings (preference-order defaults).
//!
//! The CLI resolves its two preference orders through a priority chain so
//! a collection owner can pin their taste once instead of repeating flags:
//!
//! 1. CLI flag (if given)
//! 2. `[match]` entries in `~/.config/rom-thumbs/settings.toml`
//! 3. Built-in default

use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/rom-thumbs/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-thumbs").join("settings.toml")
}

/// Preference orders saved in `settings.toml`, both comma-separated strings
/// in the same shape the CLI flags take.
#[derive(Debug, Clone, Default)]
pub struct SavedOrders {
    pub thumbnail_order: Option<String>,
    pub region_priority: Option<String>,
}

/// Read the `[match]` table from the settings file. A missing or
/// unparseable file yields empty defaults — settings are never required.
pub fn load_saved_orders() -> SavedOrders {
    load_saved_orders_from(&settings_path())
}

fn load_saved_orders_from(path: &Path) -> SavedOrders {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return SavedOrders::default();
    };
    let Ok(doc) = contents.parse::<toml::Value>() else {
        log::warn!("Ignoring unparseable settings file {}", path.display());
        return SavedOrders::default();
    };

    let table = doc.get("match");
    let get = |key: &str| {
        table
            .and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    SavedOrders {
        thumbnail_order: get("thumbnail_order"),
        region_priority: get("region_priority"),
    }
}
