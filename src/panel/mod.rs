//! Search panel module
//!
//! The search bar, the filter dialog and the results area composed over one
//! committed state.
//!
//! # Architecture
//!
//! - `search_bar`: Query input, clear button, filter button and badge
//! - `coordinator`: Query and committed filters, page size, reload signals
//! - `session`: `SearchPanel`, which wires the pieces together and collects their events

pub mod coordinator;
pub mod search_bar;
pub mod session;

pub use coordinator::{ParamChanges, QueryCoordinator};
pub use search_bar::SearchBar;
pub use session::{DialogView, PanelSnapshot, PanelView, SearchPanel, SearchPanelBuilder};
