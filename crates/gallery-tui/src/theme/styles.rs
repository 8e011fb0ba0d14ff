//! Semantic style builders for the gallery TUI.

use gallery_core::{Category, LineKind};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

// --- Domain mappings ---

/// Color of a transcript line by its kind
pub fn line_kind(kind: LineKind) -> Style {
    let style = Style::default();
    match kind {
        LineKind::Info => style.fg(palette::LINE_INFO),
        LineKind::Step => style.fg(palette::LINE_STEP),
        LineKind::Result => style
            .fg(palette::LINE_RESULT)
            .add_modifier(Modifier::BOLD),
        LineKind::Highlight => style.fg(palette::LINE_HIGHLIGHT),
        LineKind::Warning => style.fg(palette::LINE_WARNING),
    }
}

pub fn category(category: Category) -> Style {
    let color = match category {
        Category::Creational => palette::CATEGORY_CREATIONAL,
        Category::Structural => palette::CATEGORY_STRUCTURAL,
        Category::Behavioral => palette::CATEGORY_BEHAVIORAL,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
