// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::autocomplete::{
    AutocompleteOptions, DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_DELAY_MS,
    DEFAULT_MAX_SUGGESTIONS,
};

fn default_debounce_delay_ms() -> u64 {
    DEFAULT_DEBOUNCE_DELAY_MS
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

/// Autocomplete configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            endpoint_url: None,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
        }
    }
}

impl AutocompleteConfig {
    pub fn to_options(&self) -> AutocompleteOptions {
        AutocompleteOptions {
            endpoint_url: self.endpoint_url.clone(),
            debounce_delay_ms: self.debounce_delay_ms,
            max_suggestions: self.max_suggestions,
            blur_grace_ms: self.blur_grace_ms,
        }
    }
}

/// Local tag catalog section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
