//! Main update function - handles state transitions (TEA pattern)

use gallery_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, StatusMessage};

use super::{keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectPattern(index) => {
            state.select_pattern(index);
            UpdateResult::none()
        }
        Message::NextPattern => {
            state.next_pattern();
            UpdateResult::none()
        }
        Message::PreviousPattern => {
            state.previous_pattern();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Panel
        // ─────────────────────────────────────────────────────────
        Message::RunScenario(id) => {
            if let Err(e) = state.panel.run(&id) {
                warn!("{}", e);
                state.set_status(StatusMessage::error(e.to_string()));
            }
            UpdateResult::none()
        }

        Message::ToggleOption(id) => {
            if !state.panel.toggle_option(&id) {
                debug!("{} has no option '{}'", state.active(), id);
            }
            UpdateResult::none()
        }

        Message::TogglePane => {
            state.panel.toggle_pane();
            UpdateResult::none()
        }

        Message::ClearTranscript => {
            state.panel.clear_transcript();
            state.set_status(StatusMessage::info("Transcript cleared"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}
