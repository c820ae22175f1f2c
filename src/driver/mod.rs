//! Headless panel driver
//!
//! Drives a `SearchPanel` from a line-oriented command script, so the panel
//! can be exercised from the command line or from test fixtures without a
//! frontend.
//!
//! # Script format
//!
//! ```text
//! # comments and blank lines are ignored
//! mount
//! query green tea
//! filter
//! tick
//! category age
//! toggle teen
//! back
//! apply
//! results 20 more
//! show
//! ```
//!
//! - `commands`: `PanelCommand` and script parsing
//! - `executor`: `ScriptRunner`, which applies commands and records their events

pub mod commands;
pub mod executor;

pub use commands::{PanelCommand, parse_script};
pub use executor::{ScriptRunner, StepOutcome, StepReport};
