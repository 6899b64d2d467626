//! Core domain types for Weaver
//!
//! Words, the fixed-length lexicon and the one-letter adjacency predicate.
//! Everything here is pure and read-only once built.

mod lexicon;
mod word;

pub use lexicon::{Lexicon, LexiconError};
pub use word::{LengthMismatch, Word, WordError, is_one_letter_different};
