//! Ladder solving command
//!
//! Finds a shortest ladder between two words without a game session.

use crate::core::{Lexicon, Word, WordError};
use crate::search::{PathFinder, SearchOutcome};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub source: String,
    pub target: String,
    pub max_expansions: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(source: String, target: String) -> Self {
        Self {
            source,
            target,
            max_expansions: None,
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub source: Word,
    pub target: Word,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Solve a ladder between the configured words
///
/// The words need not be dictionary members; a non-member source is searched
/// from positionally.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed or not of the lexicon's
/// word length.
pub fn solve_ladder(config: SolveConfig, lexicon: &Lexicon) -> Result<SolveResult, WordError> {
    let source = Word::with_length(&config.source, lexicon.word_length())?;
    let target = Word::with_length(&config.target, lexicon.word_length())?;

    let finder = config
        .max_expansions
        .map_or_else(PathFinder::new, PathFinder::with_budget);

    let start = Instant::now();
    let outcome = finder.search(lexicon, &source, &target);
    let duration = start.elapsed();

    Ok(SolveResult {
        source,
        target,
        outcome,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> Lexicon {
        Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap()
    }

    #[test]
    fn solve_finds_path() {
        let config = SolveConfig::new("cold".to_string(), "warm".to_string());
        let result = solve_ladder(config, &ladder()).unwrap();

        match result.outcome {
            SearchOutcome::Found(path) => assert_eq!(path.edge_count(), 4),
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn solve_normalises_input() {
        let config = SolveConfig::new("COLD".to_string(), " Warm ".to_string());
        let result = solve_ladder(config, &ladder()).unwrap();
        assert_eq!(result.source.text(), "cold");
        assert_eq!(result.target.text(), "warm");
    }

    #[test]
    fn solve_invalid_word_returns_error() {
        let config = SolveConfig::new("colder".to_string(), "warm".to_string());
        assert!(solve_ladder(config, &ladder()).is_err());
    }

    #[test]
    fn solve_unreachable() {
        let config = SolveConfig::new("cold".to_string(), "west".to_string());
        let result = solve_ladder(config, &ladder()).unwrap();
        assert_eq!(result.outcome, SearchOutcome::Unreachable);
    }

    #[test]
    fn solve_respects_budget() {
        let mut config = SolveConfig::new("cold".to_string(), "warm".to_string());
        config.max_expansions = Some(2);
        let result = solve_ladder(config, &ladder()).unwrap();
        assert!(matches!(
            result.outcome,
            SearchOutcome::BudgetExhausted { expanded: 2 }
        ));
    }
}
