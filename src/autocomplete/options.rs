use std::time::Duration;

pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;

/// Options for one tag autocomplete binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOptions {
    /// Suggestion endpoint; `None` means the host supplies another source
    pub endpoint_url: Option<String>,
    /// Quiet period after the last keystroke before a fetch is issued
    pub debounce_delay_ms: u64,
    /// Upper bound on rendered suggestions
    pub max_suggestions: usize,
    /// Delay between losing focus and hiding the dropdown
    pub blur_grace_ms: u64,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
        }
    }
}

impl AutocompleteOptions {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}
