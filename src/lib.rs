//! Facetr - headless state core for a faceted search panel
//!
//! This library models a search bar, a two-page filter selection dialog and
//! a paged results area without rendering anything. Frontends forward user
//! input to a [`SearchPanel`] and react to the [`SearchEvent`]s it emits.
//!
//! # Examples
//!
//! ```
//! use facetr::catalog::{FilterCatalog, FilterCategory, FilterValue};
//! use facetr::{SearchEvent, SearchPanel};
//!
//! let catalog = FilterCatalog::new(vec![FilterCategory::new(
//!     "age",
//!     "Age",
//!     vec![FilterValue::new("child", "Child"), FilterValue::new("teen", "Teen")],
//! )])
//! .unwrap();
//!
//! let mut panel = SearchPanel::builder().catalog(catalog).build().unwrap();
//! panel.mount();
//! panel.open_filters().unwrap();
//! panel.tick();
//! panel.select_category("age").unwrap();
//! panel.toggle_value("teen").unwrap();
//! panel.back().unwrap();
//! panel.apply_filters().unwrap();
//!
//! assert_eq!(panel.badge_count(), 1);
//! assert!(panel.take_events().contains(&SearchEvent::ReloadRequested));
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod driver;
pub mod error;
pub mod events;
pub mod output;
pub mod panel;
pub mod selection;

#[cfg(test)]
pub mod testing;

pub use catalog::{FilterCatalog, FilterCategory, FilterValue};
pub use config::PanelConfig;
pub use dialog::{DialogPhase, FilterDialog};
pub use error::{FacetError, Result};
pub use events::{EventQueue, SearchEvent};
pub use panel::{PanelSnapshot, PanelView, ParamChanges, SearchPanel};
pub use selection::SelectedFilters;
