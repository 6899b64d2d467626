//! Word lists for Weaver
//!
//! Provides the embedded default dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Word length of the embedded dictionary
pub const DEFAULT_WORD_LENGTH: usize = 4;
