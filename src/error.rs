use thiserror::Error;

/// Errors that can occur while loading, fetching or preparing recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to fetch the recipe document
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read a local recipe document
    #[error("Failed to read document: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A configured vocabulary could not be compiled into matchers
    #[error("Invalid vocabulary for language '{lang}': {source}")]
    VocabularyError {
        lang: String,
        #[source]
        source: regex::Error,
    },

    /// The configured default language has no vocabulary
    #[error("No vocabulary configured for default language '{0}'")]
    MissingDefaultLanguage(String),
}
