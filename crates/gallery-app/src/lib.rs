//! gallery-app - Application state and orchestration for Pattern Gallery
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the navigation registry, the mounted panel, key mapping and
//! configuration loading. It never touches the terminal.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod panel;
pub mod signals;
pub mod state;
pub mod transcript_view_state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::Navigation;
pub use panel::{PanelState, SidePane};
pub use state::{AppPhase, AppState, StatusMessage};
