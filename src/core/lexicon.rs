//! Fixed-length word set
//!
//! A Lexicon is built once from candidate strings and is read-only afterwards.
//! All members share the same length, fixed at construction.

use super::word::{LengthMismatch, Word, is_one_letter_different};
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for lexicon construction and sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("lexicon needs at least 2 words to sample from, has {size}")]
    LexiconTooSmall { size: usize },
}

/// An immutable set of equal-length words
#[derive(Debug, Clone)]
pub struct Lexicon {
    word_length: usize,
    members: FxHashSet<Word>,
    // Sorted copy of `members` for indexed sampling and stable iteration
    ordered: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon of `word_length`-letter words
    ///
    /// Candidates that are not exactly `word_length` ASCII letters are skipped.
    /// Duplicates (after case normalisation) collapse into one member.
    ///
    /// # Errors
    /// Returns `LexiconError::ZeroWordLength` if `word_length` is 0.
    ///
    /// # Examples
    /// ```
    /// use weaver::core::Lexicon;
    ///
    /// let lexicon = Lexicon::new(4, ["cold", "CORD", "cord", "toolong", "c0ld"]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("Cold"));
    /// ```
    pub fn new<I, S>(word_length: usize, candidates: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(LexiconError::ZeroWordLength);
        }

        let mut members = FxHashSet::default();
        let mut skipped = 0usize;
        for candidate in candidates {
            match Word::with_length(candidate, word_length) {
                Ok(word) => {
                    members.insert(word);
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} malformed dictionary entries");
        }

        let mut ordered: Vec<Word> = members.iter().cloned().collect();
        ordered.sort_unstable();

        log::debug!(
            "built lexicon of {} words with length {word_length}",
            ordered.len()
        );

        Ok(Self {
            word_length,
            members,
            ordered,
        })
    }

    /// Length shared by every member
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate members in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.ordered.iter()
    }

    /// Check whether the canonical form of `word` is a member
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Check whether an already-canonical word is a member
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Look up the member matching `word`, if any
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        let word = Word::new(word).ok()?;
        self.members.get(&word)
    }

    /// All members differing from `word` in exactly one position
    ///
    /// `word` itself need not be a member. Neighbours are generated by trying
    /// every other letter at every position and probing the member set, so the
    /// cost is `len × 25` lookups regardless of lexicon size.
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&Word> {
        if word.len() != self.word_length {
            return Vec::new();
        }

        let bytes = word.as_bytes();
        let mut found = Vec::new();
        for position in 0..bytes.len() {
            for letter in b'a'..=b'z' {
                if letter == bytes[position] {
                    continue;
                }
                let candidate = word.with_letter(position, letter);
                if let Some(member) = self.members.get(&candidate) {
                    found.push(member);
                }
            }
        }
        found
    }

    /// Check whether two words differ in exactly one letter position
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words have different lengths.
    pub fn is_one_letter_different(&self, a: &Word, b: &Word) -> Result<bool, LengthMismatch> {
        is_one_letter_different(a, b)
    }

    /// Draw two distinct members uniformly at random
    ///
    /// # Errors
    /// Returns `LexiconError::LexiconTooSmall` if fewer than 2 members exist.
    pub fn sample_two_distinct<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Word, Word), LexiconError> {
        if self.ordered.len() < 2 {
            return Err(LexiconError::LexiconTooSmall {
                size: self.ordered.len(),
            });
        }

        let picks = index::sample(rng, self.ordered.len(), 2);
        Ok((
            self.ordered[picks.index(0)].clone(),
            self.ordered[picks.index(1)].clone(),
        ))
    }
}
