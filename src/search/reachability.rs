//! Reachability checks for candidate endpoint pairs

use super::shortest_path;
use crate::core::{Lexicon, Word};

/// Check whether `target` can be reached from `source`
///
/// Exactly equivalent to `shortest_path(..).is_some()`. Reads only.
#[must_use]
pub fn is_reachable(lexicon: &Lexicon, source: &Word, target: &Word) -> bool {
    shortest_path(lexicon, source, target).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn connected_pair_is_reachable() {
        let lexicon = Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap();
        assert!(is_reachable(&lexicon, &w("cold"), &w("warm")));
        assert!(is_reachable(&lexicon, &w("warm"), &w("cold")));
    }

    #[test]
    fn disconnected_pair_is_not_reachable() {
        let lexicon = Lexicon::new(4, ["cold", "cord", "mist", "most"]).unwrap();
        assert!(!is_reachable(&lexicon, &w("cold"), &w("mist")));
        assert!(is_reachable(&lexicon, &w("mist"), &w("most")));
    }

    #[test]
    fn lexicon_is_untouched() {
        let lexicon = Lexicon::new(4, ["cold", "cord"]).unwrap();
        let before: Vec<Word> = lexicon.iter().cloned().collect();
        let _ = is_reachable(&lexicon, &w("cold"), &w("cord"));
        let after: Vec<Word> = lexicon.iter().cloned().collect();
        assert_eq!(before, after);
    }
}
