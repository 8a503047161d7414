//! Console prompting for ladder queries.
//!
//! Reads two words per query, normalizes them and re-prompts until they form
//! a valid query or the user asks to quit.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::dictionary::Dictionary;
use crate::ladder;
use std::io::{self, BufRead, Write};

/// What the user asked for at the word prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// A validated pair of words to connect.
    Ladder { start: String, target: String },
    /// Empty input or end of input.
    Quit,
}

/// Writes `prompt`, then reads one line and returns it trimmed.
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads one word, lowercased. Empty input and end of input both yield `None`.
fn read_word<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    Ok(read_line(input, output, prompt)?
        .map(|word| word.to_lowercase())
        .filter(|word| !word.is_empty()))
}

/// Prompts for two words until they pass `ladder::validate_query`.
///
/// # Errors
/// Returns `AppError::Io` if the console cannot be read or written.
pub fn prompt_for_query<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    input: &mut R,
    output: &mut W,
    quiet_mode: bool,
) -> Result<Query, AppError> {
    writeln!(output)?;
    loop {
        let Some(start) = read_word(input, output, "Word 1 (or Enter to quit): ")? else {
            return Ok(Query::Quit);
        };
        let Some(target) = read_word(input, output, "Word 2 (or Enter to quit): ")? else {
            return Ok(Query::Quit);
        };

        match ladder::validate_query(dictionary, &start, &target) {
            Ok(()) => {
                verbose_println!(quiet_mode, "[QUERY] {} -> {}", start, target);
                return Ok(Query::Ladder { start, target });
            }
            Err(e) => {
                verbose_eprintln!(quiet_mode, "Rejected query '{}' -> '{}': {:?}", start, target, e);
                writeln!(output, "{}", e)?;
                writeln!(output)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["code", "data", "cat", "dog"])
    }

    fn prompt(input: &str) -> (Query, String) {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let query = prompt_for_query(&dictionary(), &mut reader, &mut output, true).unwrap();
        (query, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_valid_words_after_normalizing() {
        let (query, _) = prompt("  CODE \nData\n");
        assert_eq!(
            query,
            Query::Ladder {
                start: "code".into(),
                target: "data".into()
            }
        );
    }

    #[test]
    fn reprompts_until_valid() {
        let (query, output) = prompt("cat\ncat\ncat\ncode\ncat\ncow\ncat\ndog\n");
        assert_eq!(
            query,
            Query::Ladder {
                start: "cat".into(),
                target: "dog".into()
            }
        );
        assert!(output.contains("The two words must be different."));
        assert!(output.contains("The two words must be the same length."));
        assert!(output.contains("The two words must be found in the dictionary."));
        assert_eq!(output.matches("Word 1 (or Enter to quit): ").count(), 4);
    }

    #[test]
    fn empty_word_quits() {
        assert_eq!(prompt("\n").0, Query::Quit);
        assert_eq!(prompt("cat\n   \n").0, Query::Quit);
    }

    #[test]
    fn end_of_input_quits() {
        assert_eq!(prompt("").0, Query::Quit);
        assert_eq!(prompt("cat\n").0, Query::Quit);
    }

    #[test]
    fn read_line_trims() {
        let mut reader = Cursor::new("  words.txt \r\n");
        let mut output = Vec::new();
        let line = read_line(&mut reader, &mut output, "File: ").unwrap();
        assert_eq!(line.as_deref(), Some("words.txt"));
        assert_eq!(output, b"File: ");
    }
}
