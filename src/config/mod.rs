//! Configuration module for facetr
//!
//! Holds the pass-through text labels and the paging settings of a search
//! panel. Configuration is stored as TOML in the user's config directory
//! (`~/.config/facetr/config.toml` on Linux); every field has a default, so
//! a partial or missing file is fine.

use crate::error::{FacetError, Result};
use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of results per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default page size growth on "load more"
pub const DEFAULT_PAGE_INCREMENT: usize = 20;

/// User-facing text. Values are opaque and passed through unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    /// Reset button in the filter dialog
    pub reset_button: String,
    /// Apply button in the filter dialog
    pub save_button: String,
    /// Summary shown for a category with no selected values
    pub no_values: String,
    /// Text shown when a search returns nothing
    pub no_results: String,
    /// Label of the "load more" button
    pub more_button: String,
    /// Search input placeholder
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            reset_button: "Reset".to_string(),
            save_button: "Save filters".to_string(),
            no_values: "No filters yet".to_string(),
            no_results: "No matching results found.".to_string(),
            more_button: "More".to_string(),
            placeholder: "Search".to_string(),
        }
    }
}

/// Pagination settings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size after any query or filter change
    pub page_size: usize,
    /// Added to the page size on each "load more"
    pub increment: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            increment: DEFAULT_PAGE_INCREMENT,
        }
    }
}

/// Search panel configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PanelConfig {
    /// Hide the filter button in the search bar
    #[serde(default)]
    pub hide_filter_button: bool,

    /// Text labels
    #[serde(default)]
    pub labels: Labels,

    /// Pagination
    #[serde(default)]
    pub paging: PagingConfig,
}

impl PanelConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Configuration` if the system config directory
    /// cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FacetError::Configuration("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("facetr").join("config.toml"))
    }

    /// Load the configuration from the default path
    ///
    /// Falls back to defaults when no config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the file exists but cannot be parsed or is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load the configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the file cannot be read, parsed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the config directory cannot be determined or written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the configuration as TOML to a specific path
    ///
    /// # Errors
    ///
    /// Returns `FacetError` if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            FacetError::Configuration(format!("Failed to serialize config: {e}"))
        })?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Configuration` if the page size or increment is zero.
    pub fn validate(&self) -> Result<()> {
        if self.paging.page_size == 0 {
            return Err(FacetError::Configuration(
                "paging.page_size must be greater than zero".to_string(),
            ));
        }
        if self.paging.increment == 0 {
            return Err(FacetError::Configuration(
                "paging.increment must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
