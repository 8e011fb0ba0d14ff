//! Good-vs-bad comparison pane
//!
//! Two columns, the pattern-based transcript and the naive one, with the
//! explanatory note underneath.

use gallery_core::{Comparison, Transcript};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Rows reserved for the note under the columns
const NOTE_HEIGHT: u16 = 4;

pub struct ComparisonPane<'a> {
    comparison: &'a Comparison,
}

impl<'a> ComparisonPane<'a> {
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }
}

fn column_lines(transcript: &Transcript) -> Vec<Line<'static>> {
    transcript
        .lines()
        .iter()
        .map(|line| {
            let style = styles::line_kind(line.kind);
            Line::from(vec![
                Span::styled(line.kind.prefix(), style),
                Span::styled(line.text.clone(), style),
            ])
        })
        .collect()
}

fn render_column(title: Span<'static>, transcript: &Transcript, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles::border_inactive())
        .title(Line::from(vec![Span::raw(" "), title, Span::raw(" ")]));
    Paragraph::new(column_lines(transcript))
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

impl Widget for ComparisonPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Comparison", styles::text_primary()),
            Span::styled(" [c] code ", styles::text_muted()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [columns, note] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(NOTE_HEIGHT)]).areas(inner);
        let [good, bad] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(columns);

        render_column(
            Span::styled("With the pattern", styles::status_green()),
            &self.comparison.good,
            good,
            buf,
        );
        render_column(
            Span::styled("Without", styles::status_red()),
            &self.comparison.bad,
            bad,
            buf,
        );

        let note_block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());
        Paragraph::new(Span::styled(self.comparison.note, styles::text_secondary()))
            .block(note_block)
            .wrap(Wrap { trim: true })
            .render(note, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gallery_core::PatternKind;

    #[test]
    fn test_renders_both_columns_and_note() {
        let mut good = Transcript::new();
        good.result("same instance");
        let mut bad = Transcript::new();
        bad.warning("two instances");
        let comparison = Comparison {
            good,
            bad,
            note: "One access point",
        };

        let mut term = TestTerminal::with_size(80, 16);
        term.render_widget(ComparisonPane::new(&comparison), term.area());

        assert!(term.buffer_contains("With the pattern"));
        assert!(term.buffer_contains("Without"));
        assert!(term.buffer_contains(" = same instance"));
        assert!(term.buffer_contains(" ! two instances"));
        assert!(term.buffer_contains("One access point"));
    }

    #[test]
    fn test_renders_abstract_factory_mixed_families() {
        let comparison = PatternKind::AbstractFactory.mount().comparison();
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(ComparisonPane::new(&comparison), term.area());

        assert!(term.buffer_contains("Mixed families"));
    }
}
