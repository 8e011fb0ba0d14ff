//! Code pane: the illustrative listing for the mounted pattern
//!
//! Highlighting is deliberately shallow: line comments, string literals and a
//! fixed keyword list.

use gallery_core::PatternKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const KEYWORDS: &[&str] = &[
    "as", "dyn", "else", "enum", "fn", "for", "if", "impl", "let", "match", "mut", "pub",
    "return", "self", "Self", "static", "struct", "trait", "use", "where", "while",
];

pub struct CodePane {
    kind: PatternKind,
}

impl CodePane {
    pub fn new(kind: PatternKind) -> Self {
        Self { kind }
    }
}

impl Widget for CodePane {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Code", styles::text_primary()),
            Span::styled(" [c] compare ", styles::text_muted()),
        ]));

        let lines: Vec<Line> = self.kind.snippet().lines().map(highlight_line).collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Split one source line into styled spans
pub(crate) fn highlight_line(source: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut chars = source.char_indices();

    while let Some((index, ch)) = chars.next() {
        if ch == '/' && source[index..].starts_with("//") {
            flush_word(&mut word, &mut spans);
            spans.push(Span::styled(
                source[index..].to_string(),
                Style::default()
                    .fg(palette::CODE_COMMENT)
                    .add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        if ch == '"' {
            flush_word(&mut word, &mut spans);
            let mut literal = String::from('"');
            for (_, next) in chars.by_ref() {
                literal.push(next);
                if next == '"' {
                    break;
                }
            }
            spans.push(Span::styled(literal, Style::default().fg(palette::CODE_STRING)));
            continue;
        }

        if ch.is_alphanumeric() || ch == '_' {
            word.push(ch);
        } else {
            flush_word(&mut word, &mut spans);
            spans.push(Span::styled(ch.to_string(), Style::default().fg(palette::CODE_TEXT)));
        }
    }
    flush_word(&mut word, &mut spans);
    Line::from(spans)
}

fn flush_word(word: &mut String, spans: &mut Vec<Span<'static>>) {
    if word.is_empty() {
        return;
    }
    let style = if KEYWORDS.contains(&word.as_str()) {
        Style::default().fg(palette::CODE_KEYWORD)
    } else {
        Style::default().fg(palette::CODE_TEXT)
    };
    spans.push(Span::styled(std::mem::take(word), style));
}
