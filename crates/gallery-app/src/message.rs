//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (q / Esc)
    RequestQuit,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Select pattern by index (0-based, for keys 1-9)
    SelectPattern(usize),
    /// Switch to next pattern (Tab)
    NextPattern,
    /// Switch to previous pattern (Shift+Tab)
    PreviousPattern,

    // ─────────────────────────────────────────────────────────
    // Panel
    // ─────────────────────────────────────────────────────────
    /// Trigger a scenario of the active pattern
    RunScenario(String),
    /// Flip one of the active pattern's options
    ToggleOption(String),
    /// Switch the right column between code and comparison
    TogglePane,
    /// Empty the transcript
    ClearTranscript,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll transcript up one line
    ScrollUp,
    /// Scroll transcript down one line
    ScrollDown,
    /// Scroll to top of transcript
    ScrollToTop,
    /// Scroll to bottom of transcript
    ScrollToBottom,
    PageUp,
    PageDown,
}
