//! Configuration loading
//!
//! Reads `~/.config/tagpick/config.toml`. A missing default file means an
//! all-defaults config; a file that exists but does not parse is an error.
//! Command-line flags override whatever the file sets.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, CatalogConfig, Config};

use crate::error::TagError;

const CONFIG_DIR: &str = "tagpick";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from its default location
pub fn load_config() -> Result<Config, TagError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents)
            .map_err(|e| TagError::Config(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the config from an explicit path, which must exist
pub fn load_config_from_path(path: &Path) -> Result<Config, TagError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| TagError::Config(format!("{}: {}", path.display(), e)))?;
    parse_config(&contents).map_err(|e| TagError::Config(format!("{}: {}", path.display(), e)))
}

pub fn parse_config(content: &str) -> Result<Config, TagError> {
    toml::from_str::<Config>(content).map_err(|e| TagError::Config(e.message().to_string()))
}

/// Settings given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint_url: Option<String>,
    pub catalog: Option<PathBuf>,
    pub debounce_delay_ms: Option<u64>,
    pub max_suggestions: Option<usize>,
}

impl Config {
    /// Apply command-line overrides on top of the file settings
    ///
    /// An explicit source on the command line replaces both sources from the
    /// file, so `--catalog` is not shadowed by a configured endpoint.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        match (overrides.endpoint_url, overrides.catalog) {
            (None, None) => {}
            (endpoint_url, catalog) => {
                self.autocomplete.endpoint_url = endpoint_url;
                self.catalog.path = catalog;
            }
        }
        if let Some(ms) = overrides.debounce_delay_ms {
            self.autocomplete.debounce_delay_ms = ms;
        }
        if let Some(max) = overrides.max_suggestions {
            self.autocomplete.max_suggestions = max;
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
