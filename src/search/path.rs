//! Ordered word sequences

use crate::core::{Word, is_one_letter_different};
use std::fmt;

/// An immutable ordered sequence of words
///
/// Produced by the path finder (source first, target last) and by
/// [`GameSession::current_path`](crate::game::GameSession::current_path) as a
/// snapshot of the player's accepted moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPath {
    words: Vec<Word>,
}

impl SearchPath {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of words, endpoints included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of one-letter steps (`len - 1`, or 0 when empty)
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.words.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// True if every consecutive pair differs in exactly one letter
    ///
    /// Pairs of unequal length count as invalid.
    #[must_use]
    pub fn is_valid_ladder(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| is_one_letter_different(&pair[0], &pair[1]).unwrap_or(false))
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl From<Vec<Word>> for SearchPath {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}
