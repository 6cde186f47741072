//! Core engine types: players, dice, status reporting.
//!
//! This module holds the building blocks the rest of the engine is
//! assembled from. The dice source and the status sink are traits so
//! hosts and tests inject their own collaborators.

pub mod dice;
pub mod player;
pub mod report;

pub use dice::{DiceRoll, DiceSource, ScriptedDice, SeededDice};
pub use player::{Player, PlayerId, Roster, STARTING_MONEY};
pub use report::{ConsoleSink, NullSink, RecordingSink, StatusSink};
