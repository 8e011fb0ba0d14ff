//! Headless mode - NDJSON event output instead of the TUI
//!
//! Runs scenarios without a terminal and writes one JSON object per line to
//! stdout, so scripts and tests can check transcripts without parsing ANSI.
//!
//! # Example Output
//!
//! ```json
//! {"event":"pattern_mounted","pattern":"proxy","label":"Proxy","category":"structural","timestamp":1704700001000}
//! {"event":"scenario_started","pattern":"proxy","scenario":"show-first","timestamp":1704700001001}
//! {"event":"line","pattern":"proxy","scenario":"show-first","index":0,"kind":"step","text":"Loading mountains.jpg from disk...","timestamp":1704700001001}
//! {"event":"scenario_finished","pattern":"proxy","scenario":"show-first","lines":3,"timestamp":1704700001002}
//! ```

pub mod runner;

pub use runner::{run_headless, run_with_sink, HeadlessOptions};

use chrono::Utc;
use gallery_core::{Category, Comparison, LineKind, PatternKind, Transcript};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A fresh demo was created for a pattern
    PatternMounted {
        pattern: &'static str,
        label: &'static str,
        category: Category,
        timestamp: i64,
    },

    ScenarioStarted {
        pattern: &'static str,
        scenario: String,
        timestamp: i64,
    },

    /// One transcript line, in production order
    Line {
        pattern: &'static str,
        scenario: String,
        index: usize,
        kind: LineKind,
        text: String,
        timestamp: i64,
    },

    ScenarioFinished {
        pattern: &'static str,
        scenario: String,
        lines: usize,
        timestamp: i64,
    },

    /// Good and bad transcripts of a pattern
    Comparison {
        pattern: &'static str,
        good: Vec<String>,
        bad: Vec<String>,
        note: &'static str,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn pattern_mounted(kind: PatternKind) -> Self {
        Self::PatternMounted {
            pattern: kind.id(),
            label: kind.label(),
            category: kind.category(),
            timestamp: Self::now(),
        }
    }

    pub fn scenario_started(kind: PatternKind, scenario: &str) -> Self {
        Self::ScenarioStarted {
            pattern: kind.id(),
            scenario: scenario.to_string(),
            timestamp: Self::now(),
        }
    }

    /// One `line` event per transcript line
    pub fn lines(kind: PatternKind, scenario: &str, transcript: &Transcript) -> Vec<Self> {
        let timestamp = Self::now();
        transcript
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| Self::Line {
                pattern: kind.id(),
                scenario: scenario.to_string(),
                index,
                kind: line.kind,
                text: line.text.clone(),
                timestamp,
            })
            .collect()
    }

    pub fn scenario_finished(kind: PatternKind, scenario: &str, lines: usize) -> Self {
        Self::ScenarioFinished {
            pattern: kind.id(),
            scenario: scenario.to_string(),
            lines,
            timestamp: Self::now(),
        }
    }

    pub fn comparison(kind: PatternKind, comparison: &Comparison) -> Self {
        let texts = |t: &Transcript| t.texts().map(str::to_string).collect();
        Self::Comparison {
            pattern: kind.id(),
            good: texts(&comparison.good),
            bad: texts(&comparison.bad),
            note: comparison.note,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
