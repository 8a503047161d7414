use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for dictionary loading operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when opening or reading the word list.
    #[error("Failed to read dictionary '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the word list holds no usable words.
    #[error("Dictionary '{0}' contains no words")]
    Empty(String),
}
