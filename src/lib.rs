//! # tycoon-engine
//!
//! A closed-economy property-trading board game engine: players circle
//! a fixed 32-cell board, buy and upgrade properties, pay rent, and
//! are liquidated into bankruptcy when they cannot cover a debt. The
//! last solvent player wins.
//!
//! ## Design Principles
//!
//! 1. **Injected collaborators**: the dice source and the status sink
//!    are traits passed in at construction. With seeded or scripted
//!    dice a whole game is reproducible.
//!
//! 2. **Stable indices over object graphs**: board cells refer to
//!    properties by id into a property table. Upgrading a property
//!    mutates a level field; it never swaps the object a cell holds.
//!
//! 3. **Policy branches, not errors**: "cannot buy", "cannot upgrade"
//!    and "cannot pay before liquidation" leave state unchanged and
//!    are narrated through the status sink. The one irreversible
//!    outcome, bankruptcy, is a designed economic state derived from
//!    balance and holdings, never stored.
//!
//! ## Modules
//!
//! - `core`: player roster, dice sources, status sinks
//! - `board`: cell variants, the property model, board generation
//! - `economy`: debt settlement, liquidation, bankruptcy
//! - `game`: landing dispatch, turn scheduler, results
//!
//! ## Example
//!
//! ```
//! use tycoon_engine::{Game, GameResult};
//!
//! let mut game = Game::new(["Alice", "Bob"], 42);
//! let result = game.run_to_completion();
//! assert!(matches!(result, GameResult::Winner(_) | GameResult::Draw));
//! ```

pub mod board;
pub mod core;
pub mod economy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConsoleSink, DiceRoll, DiceSource, NullSink, Player, PlayerId, RecordingSink, Roster,
    ScriptedDice, SeededDice, StatusSink, STARTING_MONEY,
};

pub use crate::board::{
    Board, Cell, ColorGroup, Property, PropertyId, BOARD_SIZE, BONUS_AMOUNT, MAX_UPGRADE_LEVEL,
    PENALTY_AMOUNT, START_BONUS, UPGRADE_COST, UPGRADE_REFUND, UPGRADE_RENT_STEP,
};

pub use crate::economy::settle_debt;

pub use crate::game::{Game, GameBuilder, GameResult, TurnOutcome};
