use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::DictionaryError;
use super::Dictionary;

//─────────────────────────────────────────────────────────────────────────────

/// Loads a newline-delimited word list from a file.
pub fn load_dictionary_from_file(file_path: &Path) -> Result<Dictionary, DictionaryError> {
    let source = file_path.display().to_string();
    let file = File::open(file_path).map_err(|e| DictionaryError::ReadFile(source.clone(), e))?;
    read_dictionary(BufReader::new(file), &source)
}

/// Reads a newline-delimited word list from any buffered reader.
///
/// `source` only names the input in error messages. Both `\n` and `\r\n`
/// line endings are accepted since every line is trimmed.
pub fn read_dictionary<R: BufRead>(reader: R, source: &str) -> Result<Dictionary, DictionaryError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| DictionaryError::ReadFile(source.into(), e))?;

    let dictionary = Dictionary::from_words(lines);
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty(source.into()));
    }
    Ok(dictionary)
}
