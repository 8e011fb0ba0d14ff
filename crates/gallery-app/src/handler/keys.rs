//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Characters the shell binds itself; demos must not use them for scenarios
/// or options.
pub const RESERVED_KEYS: &[char] = &[
    'q', 'c', 'x', 'h', 'j', 'k', 'l', 'g', 'G', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        // Force quit - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Pattern Navigation
        // ─────────────────────────────────────────────────────────
        // Number keys 1-9 select pattern by index
        InputKey::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectPattern(index))
        }
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextPattern),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => {
            Some(Message::PreviousPattern)
        }

        // ─────────────────────────────────────────────────────────
        // Panel
        // ─────────────────────────────────────────────────────────
        InputKey::Char('c') => Some(Message::TogglePane),
        InputKey::Char('x') => Some(Message::ClearTranscript),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // Enter re-runs the first scenario
        InputKey::Enter => state
            .panel
            .scenarios()
            .first()
            .map(|spec| Message::RunScenario(spec.id.to_string())),

        InputKey::Char(ch) => handle_demo_key(state, ch),

        _ => None,
    }
}

/// Scenario and option shortcuts of the mounted demo
fn handle_demo_key(state: &AppState, ch: char) -> Option<Message> {
    if let Some(spec) = state.panel.scenarios().iter().find(|s| s.key == ch) {
        return Some(Message::RunScenario(spec.id.to_string()));
    }
    state
        .panel
        .options()
        .into_iter()
        .find(|o| o.key == ch)
        .map(|o| Message::ToggleOption(o.id.to_string()))
}
