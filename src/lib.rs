//! Weaver
//!
//! A word-ladder puzzle engine: change one letter at a time to get from a start
//! word to a target word, with every intermediate step a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use weaver::core::Lexicon;
//! use weaver::game::{GameConfig, GameSession, MoveResult};
//!
//! let lexicon = Lexicon::new(4, ["cold", "cord", "card", "ward", "warm"]).unwrap();
//! let mut session = GameSession::new(Arc::new(lexicon), GameConfig::default());
//! session.configure_endpoints(Some("cold"), Some("warm")).unwrap();
//!
//! assert_eq!(session.submit_move("cord").unwrap(), MoveResult::Accepted);
//! assert_eq!(session.submit_move("warm").unwrap(), MoveResult::RejectedNotAdjacent);
//!
//! let solution = session.solution_path().unwrap().unwrap();
//! assert_eq!(solution.edge_count(), 4);
//! ```

// Core domain types
pub mod core;

// Shortest-path search
pub mod search;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup for binaries
pub mod logging;
