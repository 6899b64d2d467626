//! Dictionary loading utilities
//!
//! Builds a [`Lexicon`] from a file, a string, or the embedded list.
//! Malformed lines are skipped by the lexicon itself.

use super::DICTIONARY;
use crate::core::{Lexicon, LexiconError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Load a lexicon of `word_length`-letter words from a file
///
/// One word per line; blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Lexicon` if `word_length` is 0.
///
/// # Examples
/// ```no_run
/// use weaver::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt", 4).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Lexicon, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(lexicon_from_str(&content, word_length)?)
}

/// Build a lexicon from newline-separated text
///
/// # Errors
///
/// Returns `LexiconError::ZeroWordLength` if `word_length` is 0.
pub fn lexicon_from_str(content: &str, word_length: usize) -> Result<Lexicon, LexiconError> {
    Lexicon::new(
        word_length,
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Build a lexicon from the embedded dictionary
///
/// # Errors
///
/// Returns `LexiconError::ZeroWordLength` if `word_length` is 0. Lengths other
/// than the embedded list's produce an empty lexicon.
pub fn embedded_lexicon(word_length: usize) -> Result<Lexicon, LexiconError> {
    Lexicon::new(word_length, DICTIONARY.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DEFAULT_WORD_LENGTH, DICTIONARY_COUNT};

    #[test]
    fn lexicon_from_str_skips_invalid() {
        let text = "cold\n# comment\n\nCORD\ntoolong\nab\nc0ld\n  warm  \n";
        let lexicon = lexicon_from_str(text, 4).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("cold"));
        assert!(lexicon.contains("cord"));
        assert!(lexicon.contains("warm"));
    }

    #[test]
    fn lexicon_from_str_empty() {
        let lexicon = lexicon_from_str("", 4).unwrap();
        assert!(lexicon.is_empty());
    }

    #[test]
    fn lexicon_from_str_zero_length() {
        assert_eq!(
            lexicon_from_str("cold", 0).unwrap_err(),
            LexiconError::ZeroWordLength
        );
    }

    #[test]
    fn embedded_lexicon_loads_everything() {
        let lexicon = embedded_lexicon(DEFAULT_WORD_LENGTH).unwrap();
        assert_eq!(lexicon.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt", 4);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
