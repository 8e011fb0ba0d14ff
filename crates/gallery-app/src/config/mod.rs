//! Configuration file parsing for Pattern Gallery
//!
//! Supports `<config dir>/pattern-gallery/config.toml`, or any file passed
//! with `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, resolve_config_path};
pub use types::*;
