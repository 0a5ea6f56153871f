use thiserror::Error;

/// Custom error types for tagpick
#[derive(Debug, Error)]
pub enum TagError {
    #[error("No input field matches selector `{0}`")]
    MissingBindTarget(String),

    #[error("Input field `{0}` already has tag autocomplete bound")]
    AlreadyBound(String),

    #[error(
        "No suggestion source configured.\n\nPass --endpoint <URL> or --catalog <PATH>, or set endpoint_url under [autocomplete] in the config file."
    )]
    NoSuggestionSource,

    #[error("Invalid endpoint URL `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    #[error("Invalid tag catalog: {0}")]
    Catalog(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
