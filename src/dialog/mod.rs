//! Filter dialog module
//!
//! UI-agnostic model of the modal filter-selection dialog. A frontend renders
//! the derived view (`category_rows`, `active_values`, `show_reset_button`)
//! and forwards user input to the transition methods.
//!
//! - `controller`: The dialog state machine
//! - `deferred`: Single-shot cancellable action used for the attach-then-show sequence

pub mod controller;
pub mod deferred;

pub use controller::{CategoryRow, DialogPhase, FilterDialog};
pub use deferred::{DeferredAction, DeferredToken};
