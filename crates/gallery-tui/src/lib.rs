//! gallery-tui - Terminal UI for Pattern Gallery
//!
//! Adds terminal setup, event polling, layout and widgets on top of the
//! gallery-app state machine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
