//! Game session: turn scheduling, landing dispatch, termination.

pub mod engine;
pub mod outcome;

pub use engine::{Game, GameBuilder};
pub use outcome::{GameResult, TurnOutcome};
