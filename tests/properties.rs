// Property tests for adjacency and shortest-path search
// Small lexicons over a three-letter alphabet keep exhaustive checks cheap.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use weaver::core::{Lexicon, Word, is_one_letter_different};
use weaver::search::{distances_from, is_reachable, shortest_path};

fn word_strategy(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), len)
        .prop_map(|letters| letters.into_iter().collect())
}

fn lexicon_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word_strategy(3), 2..20)
}

/// Distances by brute force: compare every pair of members directly
fn brute_force_distances(members: &[Word], source: &Word) -> HashMap<Word, usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(source.clone(), 0);
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for candidate in members {
            if current.hamming_distance(candidate) == Ok(1) && !distances.contains_key(candidate) {
                distances.insert(candidate.clone(), next_distance);
                queue.push_back(candidate.clone());
            }
        }
    }
    distances
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(a in word_strategy(4), b in word_strategy(4)) {
        let a = Word::new(&a).unwrap();
        let b = Word::new(&b).unwrap();
        prop_assert_eq!(is_one_letter_different(&a, &b), is_one_letter_different(&b, &a));
    }

    #[test]
    fn word_is_never_adjacent_to_itself(a in word_strategy(5)) {
        let a = Word::new(&a).unwrap();
        prop_assert_eq!(is_one_letter_different(&a, &a), Ok(false));
    }

    #[test]
    fn unequal_lengths_are_an_error(a in word_strategy(3), b in word_strategy(4)) {
        let a = Word::new(&a).unwrap();
        let b = Word::new(&b).unwrap();
        prop_assert!(is_one_letter_different(&a, &b).is_err());
    }

    #[test]
    fn path_to_self_is_single_word(words in lexicon_strategy(), source in word_strategy(3)) {
        let lexicon = Lexicon::new(3, &words).unwrap();
        let source = Word::new(&source).unwrap();
        let path = shortest_path(&lexicon, &source, &source).unwrap();
        prop_assert_eq!(path.as_slice(), std::slice::from_ref(&source));
    }

    #[test]
    fn found_paths_are_valid_and_shortest(
        words in lexicon_strategy(),
        source_index in any::<prop::sample::Index>(),
        target_index in any::<prop::sample::Index>(),
    ) {
        let lexicon = Lexicon::new(3, &words).unwrap();
        let members: Vec<Word> = lexicon.iter().cloned().collect();
        let source = source_index.get(&members).clone();
        let target = target_index.get(&members).clone();

        let expected = brute_force_distances(&members, &source);
        let computed = distances_from(&lexicon, &source);
        prop_assert_eq!(computed.len(), expected.len());
        for (word, distance) in &expected {
            prop_assert_eq!(computed.get(word), Some(distance));
        }

        match shortest_path(&lexicon, &source, &target) {
            Some(path) => {
                prop_assert!(path.is_valid_ladder());
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&target));
                prop_assert!(path.iter().all(|w| lexicon.contains_word(w)));
                prop_assert_eq!(Some(&path.edge_count()), expected.get(&target));
            }
            None => prop_assert!(!expected.contains_key(&target)),
        }
    }

    #[test]
    fn reachability_agrees_with_shortest_path(
        words in lexicon_strategy(),
        source in word_strategy(3),
        target in word_strategy(3),
    ) {
        let lexicon = Lexicon::new(3, &words).unwrap();
        let source = Word::new(&source).unwrap();
        let target = Word::new(&target).unwrap();
        prop_assert_eq!(
            is_reachable(&lexicon, &source, &target),
            shortest_path(&lexicon, &source, &target).is_some()
        );
    }
}
