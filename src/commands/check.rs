//! Check command - validate a filter catalog

use crate::{Result, catalog, output};
use std::path::Path;

/// Execute the check command
///
/// # Errors
///
/// Returns `FacetError` if the catalog cannot be read, parsed or validated.
pub fn execute(path: &Path, json: bool, quiet: bool) -> Result<()> {
    let catalog = catalog::load_catalog(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else if quiet {
        println!("ok");
    } else {
        println!("{}: {}", path.display(), output::format_catalog(&catalog));
    }

    if catalog.is_empty() && !quiet {
        eprintln!("Warning: catalog has no categories; the filter button will be disabled");
    }
    Ok(())
}
