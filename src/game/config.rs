//! Session configuration

/// Default number of random endpoint pairs tried before giving up
pub const DEFAULT_MAX_RANDOM_ATTEMPTS: usize = 10;

/// Flags controlling how a [`GameSession`](super::GameSession) behaves
///
/// `report_invalid_moves` and `reveal_solution_path` are presentation hints:
/// the session stores them but never changes its own behaviour because of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Surface rejected moves to the player instead of ignoring them silently
    pub report_invalid_moves: bool,
    /// Pick start and target from the lexicon instead of using explicit words
    pub randomize_endpoints: bool,
    /// Show the computed solution instead of the attempted path
    pub reveal_solution_path: bool,
    /// Random pairs to try before reporting that none were reachable
    pub max_random_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            report_invalid_moves: true,
            randomize_endpoints: false,
            reveal_solution_path: false,
            max_random_attempts: DEFAULT_MAX_RANDOM_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_report_invalid_moves(mut self, value: bool) -> Self {
        self.report_invalid_moves = value;
        self
    }

    #[must_use]
    pub const fn with_randomize_endpoints(mut self, value: bool) -> Self {
        self.randomize_endpoints = value;
        self
    }

    #[must_use]
    pub const fn with_reveal_solution_path(mut self, value: bool) -> Self {
        self.reveal_solution_path = value;
        self
    }

    #[must_use]
    pub const fn with_max_random_attempts(mut self, attempts: usize) -> Self {
        self.max_random_attempts = attempts;
        self
    }
}
