//! Pattern tabs widget
//!
//! One tab per registry entry, numbered with the key that selects it. When the
//! row is too narrow for every label, inactive labels are shortened and the
//! active one stays readable.

use gallery_app::config::IconMode;
use gallery_app::Navigation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

/// Cells a title takes besides its label: " N " + trailing space
const TITLE_CHROME: usize = 4;

/// Widget displaying the pattern registry as tabs
pub struct PatternTabs<'a> {
    navigation: &'a Navigation,
    icons: IconMode,
}

impl<'a> PatternTabs<'a> {
    pub fn new(navigation: &'a Navigation, icons: IconMode) -> Self {
        Self { navigation, icons }
    }

    /// Longest label inactive tabs may show within `width`
    fn inactive_budget(&self, width: usize) -> Option<usize> {
        let entries = self.navigation.entries();
        let dividers = entries.len().saturating_sub(1);
        let full: usize = entries
            .iter()
            .map(|kind| kind.label().chars().count() + TITLE_CHROME)
            .sum::<usize>()
            + dividers
            + TITLE_CHROME;
        if full <= width {
            return None;
        }

        let active = self.navigation.active().label().chars().count();
        let inactive = entries.len().saturating_sub(1).max(1);
        let fixed = dividers + entries.len() * TITLE_CHROME + active + TITLE_CHROME;
        Some((width.saturating_sub(fixed) / inactive).max(1))
    }

    fn tab_titles(&self, width: usize) -> Vec<Line<'static>> {
        let budget = self.inactive_budget(width);
        let active = self.navigation.active_index();

        self.navigation
            .entries()
            .iter()
            .enumerate()
            .map(|(index, kind)| {
                let is_active = index == active;
                let name = match budget {
                    Some(max) if !is_active => truncate_name(kind.label(), max),
                    _ => kind.label().to_string(),
                };
                let marker = if is_active {
                    Span::styled(
                        format!(" {} ", self.icons.active_marker()),
                        styles::focused_selected(),
                    )
                } else {
                    Span::styled(format!(" {} ", index + 1), styles::keybinding())
                };

                Line::from(vec![
                    marker,
                    Span::styled(name, styles::category(kind.category())),
                    Span::raw(" "),
                ])
            })
            .collect()
    }
}

impl Widget for PatternTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        let titles = self.tab_titles(padded_area.width as usize);

        Tabs::new(titles)
            .select(self.navigation.active_index())
            .highlight_style(styles::focused_selected())
            .style(styles::text_secondary())
            .padding("", "")
            .divider("│")
            .render(padded_area, buf);
    }
}

/// Truncate a name to max length, adding ellipsis if needed
pub(crate) fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gallery_core::PatternKind;

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Proxy", 10), "Proxy");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("Abstract Factory", 6), "Abstr…");
    }

    #[test]
    fn test_truncate_name_edge_cases() {
        assert_eq!(truncate_name("A", 1), "A");
        assert_eq!(truncate_name("ABC", 2), "A…");
        assert_eq!(truncate_name("AB", 1), "…");
    }

    #[test]
    fn test_wide_row_shows_every_label() {
        let nav = Navigation::new(PatternKind::Proxy);
        let mut term = TestTerminal::with_size(160, 1);
        term.render_widget(PatternTabs::new(&nav, IconMode::Unicode), term.area());

        for kind in PatternKind::ALL {
            assert!(term.buffer_contains(kind.label()), "missing {kind}");
        }
        assert!(term.buffer_contains("●"));
        assert!(term.buffer_contains(" 1 Singleton"));
    }

    #[test]
    fn test_narrow_row_keeps_active_label() {
        let nav = Navigation::new(PatternKind::AbstractFactory);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(PatternTabs::new(&nav, IconMode::Ascii), term.area());

        assert!(term.buffer_contains("* Abstract Factory"));
        assert!(!term.buffer_contains("Factory Method"));
        assert!(term.buffer_contains("…"));
    }

    #[test]
    fn test_no_truncation_when_everything_fits() {
        let nav = Navigation::default();
        let tabs = PatternTabs::new(&nav, IconMode::Unicode);
        assert_eq!(tabs.inactive_budget(200), None);
        assert!(tabs.inactive_budget(80).is_some());
    }
}
