//! Testing utilities for facetr
//!
//! Fixture catalogs and a compact way to spell selected-filter maps.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{FilterCatalog, FilterCategory, FilterValue};
use crate::selection::SelectedFilters;

/// The "Age" category: child, teen, adult
#[must_use]
pub fn age_category() -> FilterCategory {
    FilterCategory::new(
        "age",
        "Age",
        vec![
            FilterValue::new("child", "Child").with_count(12),
            FilterValue::new("teen", "Teen").with_count(7),
            FilterValue::new("adult", "Adult"),
        ],
    )
}

/// The "Color" category: red, green, blue
#[must_use]
pub fn color_category() -> FilterCategory {
    FilterCategory::new(
        "color",
        "Color",
        vec![
            FilterValue::new("red", "Red"),
            FilterValue::new("green", "Green").with_count(0),
            FilterValue::new("blue", "Blue").with_count(3),
        ],
    )
}

/// Catalog with the age and color categories, in that order
#[must_use]
pub fn sample_catalog() -> FilterCatalog {
    FilterCatalog::new(vec![age_category(), color_category()])
        .expect("sample catalog ids are unique")
}

/// Build a `SelectedFilters` from `(category, values)` pairs
///
/// Empty value lists are kept, so tests can check that they compare equal to
/// absent keys.
#[must_use]
pub fn filters(entries: &[(&str, &[&str])]) -> SelectedFilters {
    entries
        .iter()
        .map(|(category, values)| (*category, values.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.value_count(), 6);
    }

    #[test]
    fn test_filters_helper() {
        let map = filters(&[("age", &["teen"]), ("color", &[])]);
        assert_eq!(map.get("age"), ["teen".to_string()]);
        assert!(map.get("color").is_empty());
    }
}
