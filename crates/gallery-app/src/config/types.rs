//! Configuration types for Pattern Gallery
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub simulation: SimulationSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Pattern opened at startup, by id or label
    #[serde(default = "default_start_pattern")]
    pub start_pattern: String,

    /// What a new scenario run does to the previous transcript
    #[serde(default)]
    pub transcript: TranscriptMode,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_pattern: default_start_pattern(),
            transcript: TranscriptMode::default(),
        }
    }
}

fn default_start_pattern() -> String {
    "singleton".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptMode {
    /// Each run replaces the transcript
    #[default]
    Replace,
    /// Each run is appended under a header line
    Append,
}

impl std::fmt::Display for TranscriptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptMode::Replace => write!(f, "replace"),
            TranscriptMode::Append => write!(f, "append"),
        }
    }
}

/// Icon rendering mode for the TUI.
///
/// Unicode glyphs render nicely in most terminals; ASCII is the fallback for
/// fonts without box-drawing or check-mark characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

impl IconMode {
    /// Checkbox glyph for a toggle
    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self, checked) {
            (IconMode::Unicode, true) => "☑",
            (IconMode::Unicode, false) => "☐",
            (IconMode::Ascii, true) => "[x]",
            (IconMode::Ascii, false) => "[ ]",
        }
    }

    /// Marker in front of the active pattern tab
    pub fn active_marker(&self) -> &'static str {
        match self {
            IconMode::Unicode => "●",
            IconMode::Ascii => "*",
        }
    }
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Open every panel on the comparison pane instead of the code pane
    #[serde(default)]
    pub show_comparison: bool,

    /// Number transcript lines
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Icon mode: "unicode" (default) or "ascii"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_comparison: false,
            show_line_numbers: true,
            icons: IconMode::default(),
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Fixes the observer's random readings when set
    #[serde(default)]
    pub observer_seed: Option<u64>,
}
