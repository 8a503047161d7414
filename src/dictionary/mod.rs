// error module
mod error;
// loader module
mod loader;

use std::collections::{BTreeMap, HashSet};

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the loader module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::DictionaryError;
pub use loader::{load_dictionary_from_file, read_dictionary};

/// An immutable set of lowercase words.
///
/// Built once per run and only ever read afterwards; every search borrows it.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from raw entries.
    ///
    /// Each entry is trimmed and lowercased. Entries that are empty after
    /// trimming are skipped and duplicates collapse into one word.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Dictionary { words }
    }

    /// Returns `true` if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words made of exactly `length` characters.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .filter(move |word| word.chars().count() == length)
            .map(String::as_str)
    }

    /// Number of words for each word length, in characters.
    pub fn count_by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.chars().count()).or_insert(0) += 1;
        }
        counts
    }
}
