//! Word representation
//!
//! A Word is a run of ASCII letters stored in canonical lowercase form.
//! Equality, ordering and hashing all operate on the canonical text.

use std::fmt;
use thiserror::Error;

/// A canonical lowercase word
///
/// The length is not fixed by the type; a [`Lexicon`](super::Lexicon) pins every
/// member to a single length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only ASCII letters")]
    NonAlphabetic(String),
    #[error("word '{word}' must be exactly {expected} letters, got {found}")]
    InvalidLength {
        word: String,
        expected: usize,
        found: usize,
    },
}

/// Two words of different lengths were compared letter by letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compare words of different lengths ({left} vs {right})")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use weaver::core::Word;
    ///
    /// let word = Word::new(" Cold ").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("c0ld").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(trimmed.to_owned()));
        }

        Ok(Self {
            text: trimmed.to_ascii_lowercase(),
        })
    }

    /// Create a new Word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// [`Word::new`] reports.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                found: word.len(),
                word: word.text,
                expected: length,
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count the positions at which two words differ
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words have different lengths.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize, LengthMismatch> {
        if self.len() != other.len() {
            return Err(LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .as_bytes()
            .iter()
            .zip(other.as_bytes())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Copy of this word with the letter at `position` replaced
    ///
    /// `letter` must be a lowercase ASCII letter and `position < len()`.
    pub(crate) fn with_letter(&self, position: usize, letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        let mut bytes = self.text.as_bytes().to_vec();
        bytes[position] = letter;
        Self {
            text: bytes.into_iter().map(char::from).collect(),
        }
    }
}

/// Check whether two words differ in exactly one letter position
///
/// # Errors
/// Returns `LengthMismatch` if the words have different lengths. Comparing
/// words of unequal length is a caller bug, not a "no".
///
/// # Examples
/// ```
/// use weaver::core::{Word, is_one_letter_different};
///
/// let cold = Word::new("cold").unwrap();
/// let cord = Word::new("cord").unwrap();
/// assert_eq!(is_one_letter_different(&cold, &cord), Ok(true));
/// assert_eq!(is_one_letter_different(&cold, &cold), Ok(false));
/// ```
pub fn is_one_letter_different(a: &Word, b: &Word) -> Result<bool, LengthMismatch> {
    a.hamming_distance(b).map(|distance| distance == 1)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = w("cold");
        assert_eq!(word.text(), "cold");
        assert_eq!(word.as_bytes(), b"cold");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(w("COLD").text(), "cold");
        assert_eq!(w("CoLd").text(), "cold");
        assert_eq!(w("  warm\n").text(), "warm");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert!(matches!(Word::new("c0ld"), Err(WordError::NonAlphabetic(_))));
        assert!(matches!(Word::new("co ld"), Err(WordError::NonAlphabetic(_))));
        assert!(matches!(Word::new("café"), Err(WordError::NonAlphabetic(_))));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("cold", 4).is_ok());
        assert_eq!(
            Word::with_length("colder", 4),
            Err(WordError::InvalidLength {
                word: "colder".to_owned(),
                expected: 4,
                found: 6,
            })
        );
    }

    #[test]
    fn one_letter_difference() {
        assert_eq!(is_one_letter_different(&w("cold"), &w("cord")), Ok(true));
        assert_eq!(is_one_letter_different(&w("cold"), &w("warm")), Ok(false));
        assert_eq!(is_one_letter_different(&w("cold"), &w("cold")), Ok(false));
    }

    #[test]
    fn one_letter_difference_length_mismatch() {
        assert_eq!(
            is_one_letter_different(&w("cold"), &w("colds")),
            Err(LengthMismatch { left: 4, right: 5 })
        );
    }

    #[test]
    fn hamming_distance_counts_positions() {
        assert_eq!(w("cold").hamming_distance(&w("warm")), Ok(4));
        assert_eq!(w("cold").hamming_distance(&w("wand")), Ok(3));
        assert_eq!(w("cold").hamming_distance(&w("card")), Ok(2));
        assert_eq!(w("abcd").hamming_distance(&w("dcba")), Ok(4));
    }

    #[test]
    fn with_letter_replaces_position() {
        assert_eq!(w("cold").with_letter(2, b'r'), w("cord"));
        assert_eq!(w("cold").with_letter(0, b'c'), w("cold"));
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(w("cold"), w("COLD"));
        assert_ne!(w("cold"), w("cord"));
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", w("Ward")), "ward");
    }
}
