//! Results of scheduler steps and finished games.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single survivor.
    Winner(PlayerId),
    /// No solvent players remain.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What one scheduler step did.
///
/// A step walks one player through roll, move, landing and advance;
/// bankrupt players are passed over inside the step without being
/// reported, since they no longer take turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player's skip-turn flag was set; it was cleared and the
    /// turn forfeited without a roll.
    Skipped { player: PlayerId },
    /// The player rolled, moved and resolved the landing effect of
    /// the cell they arrived at.
    Moved {
        player: PlayerId,
        roll: DiceRoll,
        cell: usize,
    },
    /// At most one solvent player remains; nothing happened and
    /// nothing will.
    Finished(GameResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        assert!(!GameResult::Draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = TurnOutcome::Moved {
            player: PlayerId::new(0),
            roll: DiceRoll::new(2, 3),
            cell: 5,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: TurnOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
