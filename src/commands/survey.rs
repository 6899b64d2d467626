//! Survey command
//!
//! Samples random start/target pairs and measures how often they are
//! connected and how long the shortest ladders are. Searches run in parallel;
//! the lexicon is shared read-only between them.

use crate::core::{Lexicon, LexiconError, Word};
use crate::search::{SearchPath, shortest_path};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from a survey run
#[derive(Debug)]
pub struct SurveyResult {
    pub pairs_sampled: usize,
    pub reachable: usize,
    pub unreachable: usize,
    /// Ladder length in steps → number of pairs
    pub distribution: HashMap<usize, usize>,
    pub average_steps: f64,
    pub longest: Option<SearchPath>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Sample `pairs` random distinct pairs and solve each one
///
/// # Errors
///
/// Returns `LexiconError::LexiconTooSmall` if the lexicon has fewer than two
/// words.
pub fn run_survey<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    pairs: usize,
    rng: &mut R,
    show_progress: bool,
) -> Result<SurveyResult, LexiconError> {
    let samples: Vec<(Word, Word)> = (0..pairs)
        .map(|_| lexicon.sample_two_distinct(rng))
        .collect::<Result<_, _>>()?;

    let pb = if show_progress {
        ProgressBar::new(samples.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let paths: Vec<Option<SearchPath>> = samples
        .par_iter()
        .map(|(source, target)| {
            let path = shortest_path(lexicon, source, target);
            pb.inc(1);
            path
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut longest: Option<SearchPath> = None;
    let mut total_steps = 0usize;

    for path in paths.iter().flatten() {
        let steps = path.edge_count();
        total_steps += steps;
        *distribution.entry(steps).or_insert(0) += 1;
        if longest.as_ref().is_none_or(|best| steps > best.edge_count()) {
            longest = Some(path.clone());
        }
    }

    let reachable = paths.iter().filter(|p| p.is_some()).count();
    log::info!("survey: {reachable}/{pairs} pairs reachable in {duration:?}");

    Ok(SurveyResult {
        pairs_sampled: pairs,
        reachable,
        unreachable: pairs - reachable,
        distribution,
        average_steps: if reachable > 0 {
            total_steps as f64 / reachable as f64
        } else {
            0.0
        },
        longest,
        duration,
        pairs_per_second: pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn survey_connected_lexicon() {
        let lexicon = Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_survey(&lexicon, 20, &mut rng, false).unwrap();

        assert_eq!(result.pairs_sampled, 20);
        assert_eq!(result.reachable, 20);
        assert_eq!(result.unreachable, 0);
        assert!(result.average_steps >= 1.0);
        assert!(result.average_steps <= 4.0);
        assert!(result.longest.as_ref().is_some_and(SearchPath::is_valid_ladder));
    }

    #[test]
    fn survey_distribution_sums_to_reachable() {
        let lexicon = Lexicon::new(4, ["cold", "cord", "card", "mist", "most"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let result = run_survey(&lexicon, 30, &mut rng, false).unwrap();

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.reachable);
        assert_eq!(result.reachable + result.unreachable, 30);
    }

    #[test]
    fn survey_fully_disconnected() {
        let lexicon = Lexicon::new(4, ["cold", "mist"]).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let result = run_survey(&lexicon, 5, &mut rng, false).unwrap();

        assert_eq!(result.reachable, 0);
        assert!(result.longest.is_none());
        assert!(result.average_steps.abs() < f64::EPSILON);
    }

    #[test]
    fn survey_zero_pairs() {
        let lexicon = Lexicon::new(4, ["cold", "cord"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_survey(&lexicon, 0, &mut rng, false).unwrap();
        assert_eq!(result.pairs_sampled, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn survey_too_small_lexicon() {
        let lexicon = Lexicon::new(4, ["cold"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(run_survey(&lexicon, 3, &mut rng, false).is_err());
    }
}
