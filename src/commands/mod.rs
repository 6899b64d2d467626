//! Command implementations

pub mod play;
pub mod solve;
pub mod survey;

pub use play::{PlaySummary, run_play};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
pub use survey::{SurveyResult, run_survey};
