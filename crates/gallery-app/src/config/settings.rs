//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use gallery_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "pattern-gallery";
const CONFIG_FILENAME: &str = "config.toml";

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// `<config dir>/pattern-gallery/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Pick the config file to read
///
/// An explicit path must exist; the default location may be absent.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        }),
        None => Ok(default_config_path()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_path`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> String {
    r#"# Pattern Gallery Configuration

[behavior]
start_pattern = "singleton"   # pattern opened at startup (id or label)
transcript = "replace"        # "replace" or "append"

[ui]
show_comparison = false       # open panels on the comparison pane
show_line_numbers = true
icons = "unicode"             # "unicode" or "ascii"

[simulation]
# Fix the observer's random readings for reproducible demos
# observer_seed = 42
"#
    .to_string()
}
