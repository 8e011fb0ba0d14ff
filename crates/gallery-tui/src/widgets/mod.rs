//! Custom widget components

mod code_pane;
mod comparison_pane;
mod controls;
mod header;
mod status_bar;
mod tabs;
mod transcript_view;

pub use code_pane::CodePane;
pub use comparison_pane::ComparisonPane;
pub use controls::{control_rows, ControlsPanel};
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use tabs::PatternTabs;
pub use transcript_view::TranscriptView;
