//! Word-ladder search
//!
//! Breadth-first shortest paths over the implicit one-letter adjacency graph,
//! plus the reachability predicate used when picking random endpoints.

mod path;
mod path_finder;
mod reachability;

pub use path::SearchPath;
pub use path_finder::{PathFinder, SearchOutcome, distances_from, shortest_path};
pub use reachability::is_reachable;
