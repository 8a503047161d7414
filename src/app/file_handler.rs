//! Locates and loads the dictionary for a session.
//!
//! The dictionary either comes from the `--dictionary` path, where a failure
//! is fatal, or from an interactive prompt that retries until a file opens.

use std::io::{BufRead, Write};
use std::path::Path;

use super::error::AppError;
use super::prompter;
use super::{verbose_eprintln, verbose_println};
use crate::dictionary::{self, Dictionary, DictionaryError};

/// Loads the dictionary named on the command line.
///
/// # Errors
/// Returns `AppError::Dictionary` if the file cannot be read or holds no words.
pub fn load_dictionary(dictionary_path: &Path, quiet_mode: bool) -> Result<Dictionary, AppError> {
    let dictionary = dictionary::load_dictionary_from_file(dictionary_path).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Input Error: {}", e);
        AppError::from(e)
    })?;
    verbose_println!(
        quiet_mode,
        "Loaded {} words from {}",
        dictionary.len(),
        dictionary_path.display()
    );
    Ok(dictionary)
}

/// Prompts for a dictionary file name until one loads.
///
/// # Errors
/// Returns `AppError::NoDictionary` on empty input or end of input, and
/// `AppError::Io` if the console fails.
pub fn prompt_for_dictionary<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    quiet_mode: bool,
) -> Result<Dictionary, AppError> {
    loop {
        let file_name = match prompter::read_line(input, output, "Dictionary file name: ")? {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::NoDictionary),
        };
        match load_dictionary(Path::new(&file_name), quiet_mode) {
            Ok(dictionary) => return Ok(dictionary),
            Err(AppError::Dictionary(DictionaryError::Empty(_))) => {
                writeln!(output, "That file contains no words. Try again.")?
            }
            Err(_) => writeln!(output, "Unable to open that file. Try again.")?,
        }
    }
}
