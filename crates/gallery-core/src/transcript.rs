//! Transcript types - the ordered log lines a scenario produces

use serde::Serialize;

/// Visual weight of a transcript line
///
/// Only affects presentation; the text of a line is what the scenario produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Plain narration
    #[default]
    Info,
    /// A construction or delegation step inside the object model
    Step,
    /// The outcome a scenario is demonstrating
    Result,
    /// Something worth calling out (cache hit, identity check, ...)
    Highlight,
    /// A drawback shown by the "without the pattern" path
    Warning,
}

impl LineKind {
    /// Get display prefix for line kind
    pub fn prefix(&self) -> &'static str {
        match self {
            LineKind::Info => "   ",
            LineKind::Step => " > ",
            LineKind::Result => " = ",
            LineKind::Highlight => " * ",
            LineKind::Warning => " ! ",
        }
    }
}

/// A single line in a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered sequence of human-readable lines, displayed verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TranscriptLine::new(kind, text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(LineKind::Info, text);
    }

    pub fn step(&mut self, text: impl Into<String>) {
        self.push(LineKind::Step, text);
    }

    pub fn result(&mut self, text: impl Into<String>) {
        self.push(LineKind::Result, text);
    }

    pub fn highlight(&mut self, text: impl Into<String>) {
        self.push(LineKind::Highlight, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(LineKind::Warning, text);
    }

    /// Append every line of `other`, keeping order
    pub fn extend(&mut self, other: Transcript) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Iterate over the plain text of each line
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl From<Vec<TranscriptLine>> for Transcript {
    fn from(lines: Vec<TranscriptLine>) -> Self {
        Self { lines }
    }
}

/// Side-by-side "with the pattern" vs "without the pattern" transcripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Transcript produced by the pattern-based approach
    pub good: Transcript,
    /// Transcript produced by the naive approach
    pub bad: Transcript,
    /// Static explanation shown under both columns
    pub note: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut t = Transcript::new();
        t.info("first");
        t.step("second");
        t.result("third");

        let texts: Vec<&str> = t.texts().collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(t.lines()[1].kind, LineKind::Step);
    }

    #[test]
    fn test_extend_appends_after_existing_lines() {
        let mut a = Transcript::new();
        a.info("a");
        let mut b = Transcript::new();
        b.warning("b");

        a.extend(b);

        assert_eq!(a.len(), 2);
        assert_eq!(a.lines()[1].kind, LineKind::Warning);
    }

    #[test]
    fn test_contains_matches_substrings() {
        let mut t = Transcript::new();
        t.highlight("Loading photo.jpg from disk");
        assert!(t.contains("Loading"));
        assert!(!t.contains("cached"));
    }

    #[test]
    fn test_line_kind_prefixes_have_equal_width() {
        let kinds = [
            LineKind::Info,
            LineKind::Step,
            LineKind::Result,
            LineKind::Highlight,
            LineKind::Warning,
        ];
        for kind in kinds {
            assert_eq!(kind.prefix().len(), 3);
        }
    }

    #[test]
    fn test_transcript_serializes_kinds_in_snake_case() {
        let mut t = Transcript::new();
        t.highlight("x");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"highlight\""));
    }
}
