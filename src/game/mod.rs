//! Game session state
//!
//! The session validates moves, tracks the attempted path and notifies
//! observers of every change.

mod config;
mod error;
mod events;
mod session;

pub use config::{DEFAULT_MAX_RANDOM_ATTEMPTS, GameConfig};
pub use error::{Endpoint, GameError};
pub use events::{SessionEvent, SubscriptionId};
pub use session::{GameSession, MoveResult};
