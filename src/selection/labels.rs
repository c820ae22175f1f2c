//! Derived labels and counts
//!
//! Read-path helpers. None of these fail: ids that are missing from the
//! catalog simply contribute nothing to the produced labels.

use super::map::SelectedFilters;
use crate::catalog::FilterCategory;

/// Comma-joined names of the selected values of a category
///
/// Names follow the category's value order. Returns `placeholder` when the
/// category has no values, nothing is selected, or none of the selected ids
/// exist in the category.
#[must_use]
pub fn selected_value_names(
    category: &FilterCategory,
    filters: &SelectedFilters,
    placeholder: &str,
) -> String {
    let selected = filters.get(&category.id);
    if category.values.is_empty() || selected.is_empty() {
        return placeholder.to_string();
    }

    let names: Vec<&str> = category
        .values
        .iter()
        .filter(|value| selected.contains(&value.id))
        .map(|value| value.name.as_str())
        .collect();

    if names.is_empty() {
        placeholder.to_string()
    } else {
        names.join(", ")
    }
}

/// True if any category has at least one selected value
#[must_use]
pub fn has_any_selection(filters: &SelectedFilters) -> bool {
    filters.iter().any(|(_, ids)| !ids.is_empty())
}

/// Total number of selected values across all categories
#[must_use]
pub fn selected_count(filters: &SelectedFilters) -> usize {
    filters.iter().map(|(_, ids)| ids.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterCategory;
    use crate::testing::{age_category, filters};

    const PLACEHOLDER: &str = "No filters yet";

    #[test]
    fn test_names_follow_catalog_order() {
        let selected = filters(&[("age", &["adult", "child"])]);
        assert_eq!(
            selected_value_names(&age_category(), &selected, PLACEHOLDER),
            "Child, Adult"
        );
    }

    #[test]
    fn test_names_placeholder_for_empty_map() {
        assert_eq!(
            selected_value_names(&age_category(), &SelectedFilters::new(), PLACEHOLDER),
            PLACEHOLDER
        );
    }

    #[test]
    fn test_names_placeholder_for_category_without_values() {
        let empty = FilterCategory::new("age", "Age", vec![]);
        let selected = filters(&[("age", &["teen"])]);
        assert_eq!(selected_value_names(&empty, &selected, PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn test_names_ignore_stale_ids() {
        let selected = filters(&[("age", &["elder"])]);
        assert_eq!(
            selected_value_names(&age_category(), &selected, PLACEHOLDER),
            PLACEHOLDER
        );
    }

    #[test]
    fn test_selected_count() {
        let selected = filters(&[("age", &["child", "teen"]), ("color", &[])]);
        assert_eq!(selected_count(&selected), 2);
        assert_eq!(selected_count(&SelectedFilters::new()), 0);
    }

    #[test]
    fn test_count_includes_categories_missing_from_catalog() {
        let selected = filters(&[("retired", &["x"]), ("age", &["teen"])]);
        assert_eq!(selected_count(&selected), 2);
    }

    #[test]
    fn test_has_any_selection() {
        assert!(!has_any_selection(&SelectedFilters::new()));
        assert!(!has_any_selection(&filters(&[("color", &[])])));
        assert!(has_any_selection(&filters(&[("color", &[]), ("age", &["teen"])])));
    }
}
