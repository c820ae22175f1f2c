//! Filter catalog module
//!
//! The catalog is the list of filter categories (facets) and their selectable
//! values. It is supplied once per session and never mutated afterwards.
//!
//! # Storage
//!
//! Catalogs can be loaded from JSON (a bare list of categories, or an object
//! with a `categories` key) or TOML (`[[categories]]` tables).
//!
//! # Examples
//!
//! ```
//! use facetr::catalog::{FilterCatalog, FilterCategory, FilterValue};
//!
//! let catalog = FilterCatalog::new(vec![FilterCategory::new(
//!     "age",
//!     "Age",
//!     vec![FilterValue::new("child", "Child"), FilterValue::new("teen", "Teen")],
//! )])
//! .unwrap();
//!
//! assert_eq!(catalog.get("age").unwrap().values.len(), 2);
//! ```

pub mod types;

pub use types::{FilterCatalog, FilterCategory, FilterValue};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON or TOML file
///
/// The format is chosen by file extension; anything other than `.toml` is
/// parsed as JSON.
///
/// # Errors
///
/// Returns `FacetError` if the file cannot be read, does not parse, or
/// fails catalog validation.
pub fn load_catalog(path: &Path) -> Result<FilterCatalog> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let catalog: FilterCatalog = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    tracing::debug!(
        "Loaded catalog from {}: {} categories, {} values",
        path.display(),
        catalog.len(),
        catalog.value_count()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FacetError;
    use std::io::Write;

    #[test]
    fn test_load_json_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"categories": [{{"id": "age", "name": "Age", "values": [{{"id": "teen", "name": "Teen"}}]}}]}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_toml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[[categories]]\nid = \"age\"\nname = \"Age\"").unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.get("age").unwrap().values.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(FacetError::Io(_))));
    }

    #[test]
    fn test_load_invalid_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"id": "a", "name": "A"}}, {{"id": "a", "name": "A"}}]"#).unwrap();

        assert!(load_catalog(file.path()).is_err());
    }
}
