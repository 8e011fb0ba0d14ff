//! Color palette for the gallery TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Transcript line kinds ---
pub const LINE_INFO: Color = Color::Gray;
pub const LINE_STEP: Color = Color::White;
pub const LINE_RESULT: Color = Color::Green;
pub const LINE_HIGHLIGHT: Color = Color::Cyan;
pub const LINE_WARNING: Color = Color::Yellow;
pub const LINE_NUMBER: Color = Color::DarkGray;

// --- Pattern categories ---
pub const CATEGORY_CREATIONAL: Color = Color::Blue;
pub const CATEGORY_STRUCTURAL: Color = Color::Magenta;
pub const CATEGORY_BEHAVIORAL: Color = Color::Green;

// --- Code pane ---
pub const CODE_COMMENT: Color = Color::DarkGray;
pub const CODE_KEYWORD: Color = Color::Magenta;
pub const CODE_STRING: Color = Color::Yellow;
pub const CODE_TEXT: Color = Color::Gray;
