//! Scenario controls: pattern summary, trigger buttons and option toggles

use gallery_app::config::IconMode;
use gallery_app::PanelState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Rows the controls need inside their border
pub fn control_rows(panel: &PanelState) -> u16 {
    if panel.options().is_empty() {
        2
    } else {
        3
    }
}

pub struct ControlsPanel<'a> {
    panel: &'a PanelState,
    icons: IconMode,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(panel: &'a PanelState, icons: IconMode) -> Self {
        Self { panel, icons }
    }

    /// `[a] Label` for every scenario, the last one run in bold accent
    fn scenario_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for spec in self.panel.scenarios() {
            let label_style = if self.panel.last_scenario == Some(spec.id) {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(spec.key.to_string(), styles::keybinding()));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(spec.label, label_style));
            spans.push(Span::raw("   "));
        }
        Line::from(spans)
    }

    fn options_line(&self) -> Option<Line<'static>> {
        let options = self.panel.options();
        if options.is_empty() {
            return None;
        }

        let mut spans = vec![Span::raw(" ")];
        for option in options {
            let box_style = if option.enabled {
                styles::status_green()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(self.icons.checkbox(option.enabled), box_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(option.label, styles::text_secondary()));
            spans.push(Span::styled(" (", styles::text_muted()));
            spans.push(Span::styled(option.key.to_string(), styles::keybinding()));
            spans.push(Span::styled(")   ", styles::text_muted()));
        }
        Some(Line::from(spans))
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.panel.kind().label(), styles::accent_bold()),
            Span::raw(" "),
        ]));

        let mut lines = vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.panel.kind().summary(), styles::text_secondary()),
            ]),
            self.scenario_line(),
        ];
        lines.extend(self.options_line());

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
