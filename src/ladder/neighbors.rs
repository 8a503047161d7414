use crate::dictionary::Dictionary;

/// Letters substituted into a word, in enumeration order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Enumerates the dictionary words one substitution away from a given word.
#[derive(Clone, Copy, Debug)]
pub struct NeighborGenerator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> NeighborGenerator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        NeighborGenerator { dictionary }
    }

    /// Returns every dictionary word that differs from `word` in exactly one
    /// character position.
    ///
    /// Candidates are produced position by position, left to right, and
    /// within a position in `ALPHABET` order. Distinct (position, letter)
    /// pairs always yield distinct words, so the result holds no duplicates,
    /// and `word` itself never appears in it.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let mut letters: Vec<char> = word.chars().collect();
        let mut candidate = String::with_capacity(word.len());
        let mut found = Vec::new();

        for position in 0..letters.len() {
            let original = letters[position];
            for letter in ALPHABET.chars().filter(|&c| c != original) {
                letters[position] = letter;
                candidate.clear();
                candidate.extend(letters.iter());
                if self.dictionary.contains(&candidate) {
                    found.push(candidate.clone());
                }
            }
            letters[position] = original;
        }
        found
    }
}
