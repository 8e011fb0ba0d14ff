//! Status bar widget
//!
//! One row: active pattern, transcript size, scroll mode, then either the
//! transient status message or the panel key hints.

use gallery_app::state::{AppState, StatusMessage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Below this width only the pattern and status message are shown
const COMPACT_WIDTH: u16 = 60;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn pattern_indicator(&self) -> Span<'static> {
        let kind = self.state.active();
        Span::styled(
            format!("{} {}", self.state.settings.ui.icons.active_marker(), kind.label()),
            styles::category(kind.category()),
        )
    }

    fn status_span(status: &StatusMessage) -> Span<'static> {
        let style = if status.is_error {
            styles::status_red().add_modifier(Modifier::BOLD)
        } else {
            styles::status_green()
        };
        Span::styled(status.text.clone(), style)
    }

    fn scroll_indicator(&self) -> Span<'static> {
        if self.state.panel.view.auto_scroll {
            Span::styled("⬇ Auto", styles::status_green())
        } else {
            Span::styled("⬆ Manual", styles::keybinding())
        }
    }

    fn line_count(&self) -> Span<'static> {
        let count = self.state.panel.transcript().len();
        let text = if count == 1 {
            "1 line".to_string()
        } else {
            format!("{} lines", count)
        };
        Span::styled(text, styles::text_secondary())
    }

    fn key_hints(&self) -> Vec<Span<'static>> {
        let scenario_keys: Vec<String> = self
            .state
            .panel
            .scenarios()
            .iter()
            .map(|spec| spec.key.to_string())
            .collect();

        let mut spans = Vec::new();
        for (key, label) in [
            (scenario_keys.join("/"), "run"),
            ("x".to_string(), "clear"),
            ("j/k".to_string(), "scroll"),
        ] {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {} ", label), styles::text_muted()));
        }
        spans
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::border_inactive());

        let mut segments = vec![Span::raw(" "), self.pattern_indicator()];
        segments.push(separator.clone());
        segments.push(self.line_count());
        segments.push(separator.clone());
        segments.push(self.scroll_indicator());
        segments.push(separator);

        match &self.state.status {
            Some(status) => segments.push(Self::status_span(status)),
            None => segments.extend(self.key_hints()),
        }
        segments
    }

    fn build_compact(&self) -> Vec<Span<'static>> {
        let mut segments = vec![Span::raw(" "), self.pattern_indicator()];
        if let Some(status) = &self.state.status {
            segments.push(Span::styled(" │ ", styles::border_inactive()));
            segments.push(Self::status_span(status));
        }
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let segments = if area.width < COMPACT_WIDTH {
            self.build_compact()
        } else {
            self.build_segments()
        };
        Paragraph::new(Line::from(segments)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gallery_core::PatternKind;

    #[test]
    fn test_shows_pattern_and_hints() {
        let state = create_test_state(PatternKind::Visitor);
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("● Visitor"));
        assert!(term.buffer_contains("0 lines"));
        assert!(term.buffer_contains("⬇ Auto"));
        assert!(term.buffer_contains("[a/s] run"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut state = create_test_state(PatternKind::Singleton);
        state.set_status(StatusMessage::error("Pattern 'singleton' has no scenario named 'x'"));
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("has no scenario named 'x'"));
        assert!(!term.buffer_contains("] run"));
    }

    #[test]
    fn test_counts_transcript_lines() {
        let mut state = create_test_state(PatternKind::FactoryMethod);
        state.panel.run("road").unwrap();
        let count = state.panel.transcript().len();
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains(&format!("{} lines", count)));
    }

    #[test]
    fn test_compact_shows_pattern_only() {
        let state = create_test_state(PatternKind::Proxy);
        let mut term = TestTerminal::compact();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 40, 1));

        assert!(term.buffer_contains("Proxy"));
        assert!(!term.buffer_contains("Auto"));
    }
}
