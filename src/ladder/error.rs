use thiserror::Error;

// Error type for a ladder query that breaks the search preconditions.
// The messages are shown to the user as-is by the query prompter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// One of the two words is empty.
    #[error("The two words must not be empty.")]
    EmptyWord,

    /// Start and target are the same word.
    #[error("The two words must be different.")]
    IdenticalWords(String),

    /// Start and target have a different number of characters.
    #[error("The two words must be the same length.")]
    LengthMismatch { start: usize, target: usize },

    /// A word is missing from the dictionary.
    #[error("The two words must be found in the dictionary.")]
    NotInDictionary(String),
}
