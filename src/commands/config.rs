//! Config command - show, locate or initialise the panel configuration

use crate::cli::ConfigCommands;
use crate::config::PanelConfig;
use crate::{FacetError, Result};
use std::path::{Path, PathBuf};

/// Execute a config subcommand
///
/// `path` overrides the default configuration location.
///
/// # Errors
///
/// Returns `FacetError` if the configuration cannot be loaded or written,
/// or `init` would overwrite a file without `--force`.
pub fn execute(command: &ConfigCommands, path: Option<&Path>, quiet: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => PanelConfig::config_path()?,
    };

    match command {
        ConfigCommands::Show => show(&path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => init(path, *force, quiet),
    }
}

fn show(path: &Path) -> Result<()> {
    let config = if path.exists() {
        PanelConfig::load_from(path)?
    } else {
        PanelConfig::default()
    };

    let toml_string = toml::to_string_pretty(&config)
        .map_err(|e| FacetError::Configuration(format!("Failed to serialize config: {e}")))?;
    print!("{toml_string}");
    Ok(())
}

fn init(path: PathBuf, force: bool, quiet: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(FacetError::Configuration(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    PanelConfig::default().save_to(&path)?;
    if !quiet {
        println!("Wrote default configuration to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("facetr").join("config.toml");

        execute(&ConfigCommands::Init { force: false }, Some(&path), true).unwrap();
        assert_eq!(PanelConfig::load_from(&path).unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "hide_filter_button = true\n").unwrap();

        let result = execute(&ConfigCommands::Init { force: false }, Some(&path), true);
        assert!(matches!(result, Err(FacetError::Configuration(_))));

        execute(&ConfigCommands::Init { force: true }, Some(&path), true).unwrap();
        assert!(!PanelConfig::load_from(&path).unwrap().hide_filter_button);
    }
}
