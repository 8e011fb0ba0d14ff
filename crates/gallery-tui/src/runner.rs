//! Main TUI runner - entry point and event loop

use gallery_app::config::Settings;
use gallery_app::handler;
use gallery_app::message::Message;
use gallery_app::signals;
use gallery_app::state::AppState;
use gallery_core::prelude::*;
use gallery_core::PatternKind;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
///
/// `start` overrides the configured start pattern.
pub async fn run(settings: Settings, start: Option<PatternKind>) -> Result<()> {
    let mut state = match start {
        Some(kind) => AppState::starting_on(kind, settings),
        None => AppState::with_settings(settings),
    };
    info!("Starting on {}", state.active());

    let mut term = terminal::init()?;

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    terminal::restore();
    info!("Exited after {} scenario runs on {}", state.panel.runs, state.active());
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up it produces through the update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
