//! Transcript widget
//!
//! Renders the mounted panel's transcript with optional line numbers, a
//! colored prefix per line kind and a scroll position indicator in the title.

use gallery_app::transcript_view_state::TranscriptViewState;
use gallery_core::Transcript;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::theme::{palette, styles};

pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    line_numbers: bool,
    empty_hint: Option<String>,
}

impl<'a> TranscriptView<'a> {
    pub fn new(transcript: &'a Transcript) -> Self {
        Self {
            transcript,
            line_numbers: true,
            empty_hint: None,
        }
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Text shown while the transcript is empty
    pub fn empty_hint(mut self, hint: impl Into<String>) -> Self {
        self.empty_hint = Some(hint.into());
        self
    }

    fn format_line(&self, index: usize, number_width: usize) -> Line<'static> {
        let line = &self.transcript.lines()[index];
        let mut spans = Vec::with_capacity(3);
        if self.line_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", index + 1, width = number_width),
                Style::default().fg(palette::LINE_NUMBER),
            ));
        }
        let style = styles::line_kind(line.kind);
        spans.push(Span::styled(line.kind.prefix(), style));
        spans.push(Span::styled(line.text.clone(), style));
        Line::from(spans)
    }

    /// "first-last/total" for the title
    fn position(state: &TranscriptViewState) -> String {
        if state.total_lines == 0 {
            return "0/0".to_string();
        }
        let (start, end) = state.visible_range();
        format!("{}-{}/{}", start + 1, end, state.total_lines)
    }
}

impl StatefulWidget for TranscriptView<'_> {
    type State = TranscriptViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TranscriptViewState) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Transcript", styles::text_primary()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);

        state.update_content_size(self.transcript.len(), inner.height as usize);

        let block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", Self::position(state)),
                styles::text_muted(),
            ))
            .alignment(Alignment::Right),
        );
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.transcript.is_empty() {
            let hint = self
                .empty_hint
                .as_deref()
                .unwrap_or("Nothing to show yet");
            Paragraph::new(Line::from(Span::styled(hint.to_string(), styles::text_muted())))
                .alignment(Alignment::Center)
                .render(Rect { y: inner.y + inner.height / 2, height: 1, ..inner }, buf);
            return;
        }

        let number_width = self.transcript.len().to_string().len();
        let (start, end) = state.visible_range();
        let lines: Vec<Line> = (start..end)
            .map(|index| self.format_line(index, number_width))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
