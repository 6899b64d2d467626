//! Move-validation state machine
//!
//! A session starts unconfigured. Once endpoints are set it is active: moves
//! are validated against the lexicon and appended to the attempted path.
//! Reaching the target is a queryable condition, not a terminal state.

use super::config::GameConfig;
use super::error::{Endpoint, GameError};
use super::events::{Observers, SessionEvent, SubscriptionId};
use crate::core::{Lexicon, Word, is_one_letter_different};
use crate::search::{SearchPath, is_reachable, shortest_path};
use rand::Rng;
use std::sync::Arc;

/// Outcome of submitting a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The word was appended to the attempted path
    Accepted,
    /// The word is not in the dictionary
    RejectedNotInLexicon,
    /// The word does not differ from the current word in exactly one letter
    RejectedNotAdjacent,
}

impl MoveResult {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Player-facing explanation of a rejection
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::RejectedNotInLexicon => "not in the dictionary",
            Self::RejectedNotAdjacent => "must change exactly one letter of the current word",
        }
    }
}

#[derive(Debug, Clone)]
struct Endpoints {
    start: Word,
    target: Word,
}

/// A single game over a shared lexicon
///
/// Not meant for concurrent mutation; share the [`Lexicon`] between sessions
/// instead.
#[derive(Debug)]
pub struct GameSession {
    lexicon: Arc<Lexicon>,
    config: GameConfig,
    endpoints: Option<Endpoints>,
    attempted_path: Vec<Word>,
    observers: Observers,
}

impl GameSession {
    /// Create an unconfigured session
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, config: GameConfig) -> Self {
        Self {
            lexicon,
            config,
            endpoints: None,
            attempted_path: Vec::new(),
            observers: Observers::default(),
        }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next call that reads it
    pub const fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.endpoints.is_some()
    }

    #[must_use]
    pub fn start_word(&self) -> Option<&Word> {
        self.endpoints.as_ref().map(|e| &e.start)
    }

    #[must_use]
    pub fn target_word(&self) -> Option<&Word> {
        self.endpoints.as_ref().map(|e| &e.target)
    }

    /// Set start and target using the thread-local RNG when randomizing
    ///
    /// # Errors
    /// See [`GameSession::configure_endpoints_with_rng`].
    pub fn configure_endpoints(
        &mut self,
        start: Option<&str>,
        target: Option<&str>,
    ) -> Result<(), GameError> {
        self.configure_endpoints_with_rng(start, target, &mut rand::rng())
    }

    /// Set start and target, clearing the attempted path to `[start]`
    ///
    /// With `randomize_endpoints` the explicit words are ignored and up to
    /// `max_random_attempts` distinct pairs are drawn until a reachable one
    /// turns up. Otherwise both explicit words must be dictionary members of
    /// the lexicon's word length.
    ///
    /// On error the session is left exactly as it was.
    ///
    /// # Errors
    /// - `MissingEndpoint`, `InvalidWord`, `InvalidWordLength`, `NotInLexicon`
    ///   for bad explicit words
    /// - `Lexicon(LexiconTooSmall)` if there are fewer than two words to sample
    /// - `NoReachablePairFound` if every sampled pair was unreachable
    pub fn configure_endpoints_with_rng<R: Rng + ?Sized>(
        &mut self,
        start: Option<&str>,
        target: Option<&str>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let (start, target) = if self.config.randomize_endpoints {
            self.pick_reachable_pair(rng)?
        } else {
            (
                self.resolve_endpoint(Endpoint::Start, start)?,
                self.resolve_endpoint(Endpoint::Target, target)?,
            )
        };

        log::info!("configured endpoints {start} → {target}");

        self.attempted_path.clear();
        self.attempted_path.push(start.clone());
        self.endpoints = Some(Endpoints {
            start: start.clone(),
            target: target.clone(),
        });
        self.observers
            .notify(&SessionEvent::EndpointsConfigured { start, target });
        Ok(())
    }

    fn resolve_endpoint(&self, endpoint: Endpoint, text: Option<&str>) -> Result<Word, GameError> {
        let text = text.ok_or(GameError::MissingEndpoint(endpoint))?;
        let word = Word::new(text).map_err(|source| GameError::InvalidWord { endpoint, source })?;

        let expected = self.lexicon.word_length();
        if word.len() != expected {
            return Err(GameError::InvalidWordLength {
                endpoint,
                found: word.len(),
                word: word.text().to_owned(),
                expected,
            });
        }

        if !self.lexicon.contains_word(&word) {
            return Err(GameError::NotInLexicon {
                endpoint,
                word: word.text().to_owned(),
            });
        }

        Ok(word)
    }

    fn pick_reachable_pair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Word, Word), GameError> {
        let attempts = self.config.max_random_attempts;
        for attempt in 1..=attempts {
            let (start, target) = self.lexicon.sample_two_distinct(rng)?;
            if is_reachable(&self.lexicon, &start, &target) {
                log::debug!("random pair {start} → {target} accepted on attempt {attempt}");
                return Ok((start, target));
            }
            log::debug!("random pair {start} → {target} unreachable, retrying");
        }

        log::warn!("no reachable word pair found after {attempts} attempts");
        Err(GameError::NoReachablePairFound { attempts })
    }

    /// Validate `word` against the current word and append it on success
    ///
    /// Input is trimmed and case-normalised. Rejections leave the session
    /// untouched; resubmitting the current word is not adjacent (zero letters
    /// differ).
    ///
    /// # Errors
    /// Returns `GameError::Unconfigured` if no endpoints have been set.
    pub fn submit_move(&mut self, word: &str) -> Result<MoveResult, GameError> {
        let current = self.attempted_path.last().ok_or(GameError::Unconfigured)?;

        let Some(candidate) = self.lexicon.get(word) else {
            return Ok(MoveResult::RejectedNotInLexicon);
        };

        // Both words are lexicon members, so their lengths always match
        let adjacent = matches!(is_one_letter_different(current, candidate), Ok(true));
        if !adjacent {
            return Ok(MoveResult::RejectedNotAdjacent);
        }

        let candidate = candidate.clone();
        self.attempted_path.push(candidate.clone());
        self.observers
            .notify(&SessionEvent::MoveAccepted { word: candidate });
        Ok(MoveResult::Accepted)
    }

    /// Case-insensitive comparison with the target word
    ///
    /// Does not require `word` to have been submitted. Always false while
    /// unconfigured.
    #[must_use]
    pub fn is_winning_word(&self, word: &str) -> bool {
        let Some(target) = self.target_word() else {
            return false;
        };
        Word::new(word).is_ok_and(|word| &word == target)
    }

    /// True once the most recently accepted word is the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        match (self.attempted_path.last(), self.target_word()) {
            (Some(last), Some(target)) => last == target,
            _ => false,
        }
    }

    /// Snapshot of the attempted path (empty while unconfigured)
    #[must_use]
    pub fn current_path(&self) -> SearchPath {
        SearchPath::new(self.attempted_path.clone())
    }

    /// Number of accepted moves since the last configure or reset
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.attempted_path.len().saturating_sub(1)
    }

    /// Clear the attempted path back to `[start]`, keeping endpoints and config
    ///
    /// # Errors
    /// Returns `GameError::Unconfigured` if no endpoints have been set.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.endpoints.is_none() {
            return Err(GameError::Unconfigured);
        }
        self.attempted_path.truncate(1);
        self.observers.notify(&SessionEvent::Reset);
        Ok(())
    }

    /// Shortest path from start to target, independent of the attempted path
    ///
    /// # Errors
    /// Returns `GameError::Unconfigured` if no endpoints have been set.
    pub fn solution_path(&self) -> Result<Option<SearchPath>, GameError> {
        let endpoints = self.endpoints.as_ref().ok_or(GameError::Unconfigured)?;
        Ok(shortest_path(
            &self.lexicon,
            &endpoints.start,
            &endpoints.target,
        ))
    }

    /// Register a callback run synchronously after every successful mutation
    pub fn subscribe(&mut self, callback: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
