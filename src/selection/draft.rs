//! Draft editing operations
//!
//! Pure functions over the selected filters map used while a filter dialog
//! session is open. The draft is always an owned copy of the committed map,
//! so nothing done here can leak into committed state until it is applied.

use super::map::SelectedFilters;
use crate::catalog::{FilterCategory, FilterValue};
use serde::Serialize;

/// A filter value decorated with its transient selection flag
///
/// Only exists for the category currently open in the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftValue {
    /// The catalog value
    pub value: FilterValue,

    /// Whether the value is checked in the draft
    pub selected: bool,
}

impl DraftValue {
    /// Value id shorthand
    #[must_use]
    pub fn id(&self) -> &str {
        &self.value.id
    }
}

/// Start an editing session from the committed map
#[must_use]
pub fn begin_edit(committed: &SelectedFilters) -> SelectedFilters {
    committed.clone()
}

/// Decorate every value of `category` with its draft selection flag
///
/// Value order follows the catalog. Calling this twice without toggling in
/// between yields identical results.
#[must_use]
pub fn select_category(draft: &SelectedFilters, category: &FilterCategory) -> Vec<DraftValue> {
    category
        .values
        .iter()
        .map(|value| DraftValue {
            value: value.clone(),
            selected: draft.contains(&category.id, &value.id),
        })
        .collect()
}

/// Flip the selection flag of one value
///
/// Returns `false` (and changes nothing) if no value has this id.
pub fn toggle_value(values: &mut [DraftValue], value_id: &str) -> bool {
    match values.iter_mut().find(|draft| draft.value.id == value_id) {
        Some(draft) => {
            draft.selected = !draft.selected;
            true
        }
        None => false,
    }
}

/// Write the checked values of the open category back into the draft
///
/// The category entry is removed when nothing is checked.
pub fn commit_category(draft: &mut SelectedFilters, category_id: &str, values: &[DraftValue]) {
    let selected = values
        .iter()
        .filter(|draft_value| draft_value.selected)
        .map(|draft_value| draft_value.value.id.clone());
    draft.set(category_id, selected);
}

/// The map that becomes committed when the draft is applied
#[must_use]
pub fn apply_draft(draft: &SelectedFilters) -> SelectedFilters {
    draft.clone()
}

/// A cleared draft with no selections in any category
#[must_use]
pub const fn reset_draft() -> SelectedFilters {
    SelectedFilters::new()
}
