//! Filter selection state
//!
//! Owns the selected-filters map and the draft/commit operations performed
//! while the filter dialog is open, plus the read-only derivations used for
//! badges and summaries.
//!
//! # Architecture
//!
//! - `map`: The `SelectedFilters` type (category id -> ordered value ids)
//! - `draft`: Pure draft operations (`begin_edit`, `select_category`, `toggle_value`, ...)
//! - `labels`: Derived labels and counts that never fail
//!
//! # Examples
//!
//! ```
//! use facetr::catalog::{FilterCategory, FilterValue};
//! use facetr::selection::{self, SelectedFilters};
//!
//! let age = FilterCategory::new(
//!     "age",
//!     "Age",
//!     vec![FilterValue::new("child", "Child"), FilterValue::new("teen", "Teen")],
//! );
//!
//! let committed = SelectedFilters::new();
//! let mut draft = selection::begin_edit(&committed);
//! let mut values = selection::select_category(&draft, &age);
//! selection::toggle_value(&mut values, "teen");
//! selection::commit_category(&mut draft, &age.id, &values);
//!
//! assert_eq!(selection::selected_value_names(&age, &draft, "None"), "Teen");
//! assert_eq!(selection::selected_count(&committed), 0);
//! ```

pub mod draft;
pub mod labels;
pub mod map;

pub use draft::{
    DraftValue, apply_draft, begin_edit, commit_category, reset_draft, select_category,
    toggle_value,
};
pub use labels::{has_any_selection, selected_count, selected_value_names};
pub use map::SelectedFilters;
