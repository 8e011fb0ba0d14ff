//! # gallery-core - Pattern Simulations
//!
//! Foundation crate for Pattern Gallery. Holds the nine design-pattern object
//! models, the transcript types they narrate into, and the error and logging
//! infrastructure shared by every other crate.
//!
//! This crate has **no internal dependencies** and knows nothing about the
//! terminal; every simulation is a plain synchronous function of its state.
//!
//! ## Public API
//!
//! ### Patterns (`patterns`)
//! - [`PatternKind`] - The nine patterns, with ids, labels, categories and summaries
//! - [`PatternDemo`] - Contract a mounted panel is driven through
//! - [`ScenarioSpec`], [`DemoOption`] - Trigger buttons and toggles a demo offers
//!
//! ### Transcripts (`transcript`)
//! - [`Transcript`] - Ordered lines produced by one scenario run
//! - [`Comparison`] - "With the pattern" vs "without the pattern" pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gallery_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod patterns;
pub mod snippets;
pub mod transcript;

/// Prelude for common imports used throughout all Pattern Gallery crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use patterns::{Category, DemoOption, PatternDemo, PatternKind, ScenarioSpec};
pub use transcript::{Comparison, LineKind, Transcript, TranscriptLine};
