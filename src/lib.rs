//! Pattern Gallery library
//!
//! Binary-side pieces that sit beside the TUI: the headless NDJSON runner and
//! the `--list` registry printout.

pub mod headless;
pub mod list;

pub use headless::{run_headless, HeadlessOptions};
pub use list::registry_listing;
