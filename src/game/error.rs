//! Session configuration faults
//!
//! Rejected moves are not errors; they come back as [`MoveResult`](super::MoveResult).

use crate::core::{LexiconError, WordError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("start and target words have not been configured")]
    Unconfigured,
    #[error("an explicit {0} word is required when endpoints are not randomized")]
    MissingEndpoint(Endpoint),
    #[error("{endpoint} word '{word}' must be {expected} letters, got {found}")]
    InvalidWordLength {
        endpoint: Endpoint,
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid {endpoint} word: {source}")]
    InvalidWord {
        endpoint: Endpoint,
        source: WordError,
    },
    #[error("{endpoint} word '{word}' is not in the dictionary")]
    NotInLexicon { endpoint: Endpoint, word: String },
    #[error("no reachable word pair found after {attempts} attempts")]
    NoReachablePairFound { attempts: usize },
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Which endpoint an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Target => write!(f, "target"),
        }
    }
}
