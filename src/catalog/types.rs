//! Filter catalog data structures
//!
//! - `FilterValue`: One selectable option inside a category
//! - `FilterCategory`: A named facet with its ordered values
//! - `FilterCatalog`: The validated, ordered list of categories for a session

use crate::error::{FacetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable option within a filter category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterValue {
    /// Identifier stored in the selected filters map
    pub id: String,

    /// Name shown to the user
    pub name: String,

    /// Optional number of results carrying this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl FilterValue {
    /// Create a value without a result count
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: None,
        }
    }

    /// Attach a result count
    #[must_use]
    pub const fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Label for value lists, e.g. `Teen (12)`
    ///
    /// The count is hidden when it is absent or zero.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.count {
            Some(count) if count > 0 => format!("{} ({count})", self.name),
            _ => self.name.clone(),
        }
    }
}

/// A named facet with an enumerable set of values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCategory {
    /// Key used in the selected filters map
    pub id: String,

    /// Name shown in the category list
    pub name: String,

    /// Selectable values, in display order
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

impl FilterCategory {
    /// Create a category with the given values
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values,
        }
    }

    /// Look up a value by id
    #[must_use]
    pub fn value(&self, id: &str) -> Option<&FilterValue> {
        self.values.iter().find(|value| value.id == id)
    }

    /// Whether the category contains a value with this id
    #[must_use]
    pub fn contains_value(&self, id: &str) -> bool {
        self.value(id).is_some()
    }
}

/// Accepted on-disk shapes: a bare list (JSON) or a `categories` table (TOML/JSON)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    List(Vec<FilterCategory>),
    Table { categories: Vec<FilterCategory> },
}

impl TryFrom<RawCatalog> for FilterCatalog {
    type Error = FacetError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        match raw {
            RawCatalog::List(categories) | RawCatalog::Table { categories } => {
                Self::new(categories)
            }
        }
    }
}

/// Ordered, validated list of filter categories
///
/// Immutable once constructed. Category ids are unique and value ids are
/// unique within their category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawCatalog")]
pub struct FilterCatalog {
    categories: Vec<FilterCategory>,
}

impl FilterCatalog {
    /// Build a catalog, validating id uniqueness
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Configuration` if two categories share an id,
    /// or if a category lists the same value id twice.
    pub fn new(categories: Vec<FilterCategory>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(FacetError::Configuration(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }

            let mut values = HashSet::new();
            for value in &category.values {
                if !values.insert(value.id.as_str()) {
                    return Err(FacetError::Configuration(format!(
                        "duplicate value id '{}' in category '{}'",
                        value.id, category.id
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// An empty catalog (disables the filter button)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// All categories in display order
    #[must_use]
    pub fn categories(&self) -> &[FilterCategory] {
        &self.categories
    }

    /// Look up a category by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FilterCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look up a category by id, failing for unknown ids
    ///
    /// # Errors
    ///
    /// Returns `FacetError::UnknownCategory` if no category has this id.
    pub fn require(&self, id: &str) -> Result<&FilterCategory> {
        self.get(id)
            .ok_or_else(|| FacetError::UnknownCategory(id.to_string()))
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of values across all categories
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.categories.iter().map(|c| c.values.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_display_label_with_count() {
        let value = FilterValue::new("teen", "Teen").with_count(12);
        assert_eq!(value.display_label(), "Teen (12)");
    }

    #[test]
    fn test_display_label_hides_zero_and_missing_count() {
        assert_eq!(FilterValue::new("teen", "Teen").display_label(), "Teen");
        assert_eq!(
            FilterValue::new("teen", "Teen").with_count(0).display_label(),
            "Teen"
        );
    }

    #[test]
    fn test_catalog_rejects_duplicate_category() {
        let result = FilterCatalog::new(vec![
            FilterCategory::new("age", "Age", vec![]),
            FilterCategory::new("age", "Age again", vec![]),
        ]);
        assert!(matches!(result, Err(FacetError::Configuration(_))));
    }

    #[test]
    fn test_catalog_rejects_duplicate_value() {
        let result = FilterCatalog::new(vec![FilterCategory::new(
            "age",
            "Age",
            vec![FilterValue::new("teen", "Teen"), FilterValue::new("teen", "Teenager")],
        )]);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate value id 'teen'"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.value_count(), 6);
        assert_eq!(catalog.get("age").map(|c| c.name.as_str()), Some("Age"));
        assert!(catalog.get("size").is_none());
        assert!(matches!(
            catalog.require("size"),
            Err(FacetError::UnknownCategory(id)) if id == "size"
        ));
    }

    #[test]
    fn test_catalog_from_json_list() {
        let json = r#"[
            {"id": "age", "name": "Age", "values": [
                {"id": "child", "name": "Child", "count": 3},
                {"id": "teen", "name": "Teen"}
            ]}
        ]"#;

        let catalog: FilterCatalog = serde_json::from_str(json).unwrap();
        let age = catalog.get("age").unwrap();
        assert_eq!(age.values.len(), 2);
        assert_eq!(age.values[0].count, Some(3));
        assert_eq!(age.values[1].count, None);
    }

    #[test]
    fn test_catalog_from_toml_table() {
        let toml_str = r#"
            [[categories]]
            id = "color"
            name = "Color"

            [[categories.values]]
            id = "red"
            name = "Red"
        "#;

        let catalog: FilterCatalog = toml::from_str(toml_str).unwrap();
        assert!(catalog.get("color").unwrap().contains_value("red"));
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let json = r#"[{"id": "a", "name": "A"}, {"id": "a", "name": "B"}]"#;
        assert!(serde_json::from_str::<FilterCatalog>(json).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FilterCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.value_count(), 0);
    }
}
