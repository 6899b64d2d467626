//! Breadth-first shortest-path search
//!
//! Nodes are words, edges join words that differ in exactly one position.
//! The graph is never materialised: neighbours are generated on demand from
//! the lexicon.

use super::SearchPath;
use crate::core::{Lexicon, Word};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Result of a (possibly budgeted) search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path from source to target
    Found(SearchPath),
    /// The whole reachable component was explored without meeting the target
    Unreachable,
    /// The expansion budget ran out before the search finished
    BudgetExhausted { expanded: usize },
}

impl SearchOutcome {
    /// Convert to the found path, if any
    #[must_use]
    pub fn into_path(self) -> Option<SearchPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unreachable | Self::BudgetExhausted { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Breadth-first path finder with an optional expansion budget
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    max_expansions: Option<usize>,
}

impl PathFinder {
    /// Unbounded path finder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Path finder that gives up after expanding `max_expansions` nodes
    #[must_use]
    pub const fn with_budget(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Search for a shortest path from `source` to `target`
    ///
    /// Neither endpoint has to be a lexicon member. A non-member source acts as
    /// a virtual node whose neighbours are computed positionally; a non-member
    /// target can only be reached when it equals the source.
    #[must_use]
    pub fn search(&self, lexicon: &Lexicon, source: &Word, target: &Word) -> SearchOutcome {
        if source == target {
            return SearchOutcome::Found(SearchPath::new(vec![source.clone()]));
        }

        if !lexicon.contains_word(target) {
            return SearchOutcome::Unreachable;
        }

        // Each discovered word maps to the word it was reached from
        let mut came_from: FxHashMap<&Word, Option<&Word>> = FxHashMap::default();
        let mut queue: VecDeque<&Word> = VecDeque::new();
        came_from.insert(source, None);
        queue.push_back(source);

        let mut expanded = 0usize;
        while let Some(current) = queue.pop_front() {
            if self.max_expansions.is_some_and(|budget| expanded >= budget) {
                log::debug!("search {source} → {target} exhausted budget after {expanded} nodes");
                return SearchOutcome::BudgetExhausted { expanded };
            }
            expanded += 1;

            for next in lexicon.neighbors(current) {
                if came_from.contains_key(next) {
                    continue;
                }
                came_from.insert(next, Some(current));

                if next == target {
                    log::debug!("search {source} → {target} found after {expanded} expansions");
                    return SearchOutcome::Found(reconstruct(&came_from, next));
                }
                queue.push_back(next);
            }
        }

        log::debug!("search {source} → {target} unreachable, explored {expanded} nodes");
        SearchOutcome::Unreachable
    }
}

/// Walk parent links back from `end` to the source
fn reconstruct(came_from: &FxHashMap<&Word, Option<&Word>>, end: &Word) -> SearchPath {
    let mut words = vec![end.clone()];
    let mut cursor = came_from.get(end).copied().flatten();
    while let Some(word) = cursor {
        words.push(word.clone());
        cursor = came_from.get(word).copied().flatten();
    }
    words.reverse();
    SearchPath::new(words)
}

/// Find a shortest path from `source` to `target`
///
/// Returns `None` when the target is unreachable. When `source == target` the
/// result is the single-word path `[source]`.
///
/// # Examples
/// ```
/// use weaver::core::{Lexicon, Word};
/// use weaver::search::shortest_path;
///
/// let lexicon = Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap();
/// let cold = Word::new("cold").unwrap();
/// let warm = Word::new("warm").unwrap();
///
/// let path = shortest_path(&lexicon, &cold, &warm).unwrap();
/// assert_eq!(path.to_string(), "cold → cord → card → ward → warm");
/// ```
#[must_use]
pub fn shortest_path(lexicon: &Lexicon, source: &Word, target: &Word) -> Option<SearchPath> {
    PathFinder::new().search(lexicon, source, target).into_path()
}

/// Breadth-first distance from `source` to every reachable word
///
/// The source itself is included at distance 0, member or not.
#[must_use]
pub fn distances_from(lexicon: &Lexicon, source: &Word) -> FxHashMap<Word, usize> {
    let mut distances: FxHashMap<&Word, usize> = FxHashMap::default();
    let mut queue: VecDeque<&Word> = VecDeque::new();
    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current] + 1;
        for next in lexicon.neighbors(current) {
            if !distances.contains_key(next) {
                distances.insert(next, next_distance);
                queue.push_back(next);
            }
        }
    }

    distances
        .into_iter()
        .map(|(word, distance)| (word.clone(), distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> Lexicon {
        Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &SearchPath) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    #[test]
    fn finds_unique_shortest_path() {
        let path = shortest_path(&ladder(), &w("cold"), &w("warm")).unwrap();
        assert_eq!(texts(&path), ["cold", "cord", "card", "ward", "warm"]);
        assert_eq!(path.edge_count(), 4);
    }

    #[test]
    fn same_source_and_target() {
        let path = shortest_path(&ladder(), &w("card"), &w("card")).unwrap();
        assert_eq!(texts(&path), ["card"]);
    }

    #[test]
    fn same_source_and_target_outside_lexicon() {
        let path = shortest_path(&ladder(), &w("zzzz"), &w("zzzz")).unwrap();
        assert_eq!(texts(&path), ["zzzz"]);
    }

    #[test]
    fn unreachable_target() {
        let lexicon = Lexicon::new(4, ["cold", "cord", "mist", "most"]).unwrap();
        assert!(shortest_path(&lexicon, &w("cold"), &w("most")).is_none());
    }

    #[test]
    fn target_outside_lexicon_is_unreachable() {
        assert!(shortest_path(&ladder(), &w("cold"), &w("west")).is_none());
    }

    #[test]
    fn virtual_source_reaches_members() {
        // "colt" is not a member but neighbours "cold" positionally
        let path = shortest_path(&ladder(), &w("colt"), &w("card")).unwrap();
        assert_eq!(texts(&path), ["colt", "cold", "cord", "card"]);
    }

    #[test]
    fn picks_shorter_of_two_routes() {
        // cold → cord → card (2 steps) vs cold → bold → bald → bard → card (4)
        let lexicon =
            Lexicon::new(4, ["cold", "cord", "card", "bold", "bald", "bard"]).unwrap();
        let path = shortest_path(&lexicon, &w("cold"), &w("card")).unwrap();
        assert_eq!(path.edge_count(), 2);
        assert!(path.is_valid_ladder());
    }

    #[test]
    fn budget_exhaustion_is_distinct_from_unreachable() {
        let finder = PathFinder::with_budget(1);
        let outcome = finder.search(&ladder(), &w("cold"), &w("warm"));
        assert_eq!(outcome, SearchOutcome::BudgetExhausted { expanded: 1 });
        assert!(outcome.into_path().is_none());
    }

    #[test]
    fn generous_budget_still_finds_path() {
        let finder = PathFinder::with_budget(100);
        let outcome = finder.search(&ladder(), &w("cold"), &w("warm"));
        assert!(outcome.is_found());
    }

    #[test]
    fn zero_budget_still_answers_trivial_query() {
        let finder = PathFinder::with_budget(0);
        assert!(finder.search(&ladder(), &w("cold"), &w("cold")).is_found());
    }

    #[test]
    fn distances_cover_component() {
        let distances = distances_from(&ladder(), &w("cold"));
        assert_eq!(distances.len(), 5);
        assert_eq!(distances[&w("cold")], 0);
        assert_eq!(distances[&w("cord")], 1);
        assert_eq!(distances[&w("warm")], 4);
    }
}
