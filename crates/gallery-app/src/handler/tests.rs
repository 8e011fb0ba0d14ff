//! Tests for handler module

use super::*;
use crate::config::{Settings, TranscriptMode};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::panel::SidePane;
use crate::state::{AppPhase, AppState};
use gallery_core::patterns::state::Signal;
use gallery_core::PatternKind;

/// Run a message and every follow-up, like the event loop does
fn process(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn press(state: &mut AppState, key: InputKey) {
    process(state, Message::Key(key));
}

fn seeded() -> Settings {
    let mut settings = Settings::default();
    settings.simulation.observer_seed = Some(11);
    settings
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::RequestQuit)
    );
}

#[test]
fn test_escape_key_produces_request_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::RequestQuit));
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_select_by_index() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::SelectPattern(0))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('9')),
        Some(Message::SelectPattern(8))
    );
}

#[test]
fn test_tab_and_arrows_cycle_patterns() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.active(), PatternKind::FactoryMethod);
    press(&mut state, InputKey::Right);
    assert_eq!(state.active(), PatternKind::AbstractFactory);
    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.active(), PatternKind::State);
}

#[test]
fn test_selecting_active_pattern_keeps_its_state() {
    let mut state = AppState::starting_on(PatternKind::State, seeded());
    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.panel.runs, 1);

    press(&mut state, InputKey::Char('9'));

    assert_eq!(state.panel.runs, 1, "same panel, not remounted");
    assert!(!state.panel.transcript().is_empty());
}

#[test]
fn test_switching_away_and_back_resets_traffic_light() {
    let mut state = AppState::starting_on(PatternKind::State, seeded());
    press(&mut state, InputKey::Char('a'));
    assert!(state.panel.transcript().contains("Switching to Green"));

    press(&mut state, InputKey::Char('1'));
    assert_eq!(state.active(), PatternKind::Singleton);
    press(&mut state, InputKey::Char('9'));

    assert_eq!(state.active(), PatternKind::State);
    assert!(state.panel.transcript().is_empty());
    // First request after remount starts from Red again
    press(&mut state, InputKey::Char('a'));
    assert!(state.panel.transcript().contains("Red: cars STOP"));
    assert!(state
        .panel
        .transcript()
        .contains(&format!("Light is now {}", Signal::Green.label())));
}

#[test]
fn test_switching_patterns_drops_proxy_cache() {
    let mut state = AppState::starting_on(PatternKind::Proxy, seeded());
    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Char('a'));
    assert!(state.panel.transcript().contains("Using cached"));

    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::Char('a'));

    assert!(state.panel.transcript().contains("Loading mountains.jpg"));
}

// ─────────────────────────────────────────────────────────
// Scenarios & Options
// ─────────────────────────────────────────────────────────

#[test]
fn test_scenario_keys_map_to_active_demo() {
    let state = AppState::starting_on(PatternKind::FactoryMethod, seeded());
    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::RunScenario("road".to_string()))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::RunScenario("sea".to_string()))
    );
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
}

#[test]
fn test_enter_runs_first_scenario() {
    let state = AppState::starting_on(PatternKind::Visitor, seeded());
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::RunScenario("area".to_string()))
    );
}

#[test]
fn test_decorator_option_keys_then_order() {
    let mut state = AppState::starting_on(PatternKind::Decorator, seeded());
    // Shot toggled before milk; layers still apply milk first
    press(&mut state, InputKey::Char('t'));
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Char('a'));

    assert!(state
        .panel
        .transcript()
        .contains("Order: Americano, Milk, Extra Shot = 4,200 KRW"));
}

#[test]
fn test_unknown_scenario_sets_error_status() {
    let mut state = AppState::starting_on(PatternKind::Adapter, seeded());
    process(&mut state, Message::RunScenario("refund".to_string()));

    let status = state.status.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("refund"));
    assert!(state.panel.transcript().is_empty());
    assert!(!state.should_quit());
}

#[test]
fn test_every_demo_key_avoids_reserved_keys() {
    for kind in PatternKind::ALL {
        let state = AppState::starting_on(kind, seeded());
        for spec in state.panel.scenarios() {
            assert!(!RESERVED_KEYS.contains(&spec.key), "{kind}: {}", spec.key);
        }
        for option in state.panel.options() {
            assert!(!RESERVED_KEYS.contains(&option.key), "{kind}: {}", option.key);
        }
    }
}

#[test]
fn test_observer_runs_are_reproducible_with_seed() {
    let mut a = AppState::starting_on(PatternKind::Observer, seeded());
    let mut b = AppState::starting_on(PatternKind::Observer, seeded());
    for _ in 0..3 {
        press(&mut a, InputKey::Char('a'));
        press(&mut b, InputKey::Char('a'));
    }
    assert_eq!(a.panel.transcript(), b.panel.transcript());
}

// ─────────────────────────────────────────────────────────
// Panes & Transcript
// ─────────────────────────────────────────────────────────

#[test]
fn test_c_toggles_comparison_pane() {
    let mut state = AppState::starting_on(PatternKind::Proxy, seeded());
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.panel.pane, SidePane::Comparison);
    assert!(state.panel.comparison().is_some());
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.panel.pane, SidePane::Code);
}

#[test]
fn test_clear_transcript_key() {
    let mut state = AppState::starting_on(PatternKind::Singleton, seeded());
    press(&mut state, InputKey::Char('a'));
    assert!(!state.panel.transcript().is_empty());

    press(&mut state, InputKey::Char('x'));

    assert!(state.panel.transcript().is_empty());
    assert!(state.status.is_some());
}

#[test]
fn test_append_mode_accumulates_runs() {
    let mut settings = seeded();
    settings.behavior.transcript = TranscriptMode::Append;
    let mut state = AppState::starting_on(PatternKind::State, settings);

    press(&mut state, InputKey::Char('s'));
    press(&mut state, InputKey::Char('a'));

    assert!(state.panel.transcript().contains("after 3 requests"));
    assert!(state.panel.transcript().contains("after 4 requests"));
}

#[test]
fn test_scroll_keys_move_transcript_view() {
    let mut state = AppState::starting_on(PatternKind::Decorator, seeded());
    state.panel.view.update_content_size(40, 10);
    assert_eq!(state.panel.view.offset, 30);

    press(&mut state, InputKey::Char('k'));
    assert_eq!(state.panel.view.offset, 29);
    press(&mut state, InputKey::Char('g'));
    assert_eq!(state.panel.view.offset, 0);
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.panel.view.offset, 1);
    press(&mut state, InputKey::Char('G'));
    assert_eq!(state.panel.view.offset, 30);
    assert!(state.panel.view.auto_scroll);
}

#[test]
fn test_tick_ages_status() {
    let mut state = AppState::new();
    process(&mut state, Message::ClearTranscript);
    assert!(state.status.is_some());
    for _ in 0..100 {
        update(&mut state, Message::Tick);
    }
    assert!(state.status.is_none());
}
