//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! The per-player economic record: balance, board position, held
//! properties and the skip-next-turn flag. Bankruptcy is never stored;
//! it is derived from balance and holdings on every query.
//!
//! ## Roster
//!
//! Ordered player storage backed by `Vec` for O(1) access, indexable
//! by `PlayerId`. Turn order is roster order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::PropertyId;

/// Balance every player starts the game with.
///
/// Distinct from the 200 credited for landing on the Start cell:
/// that is a landing bonus, not the initial stake.
pub const STARTING_MONEY: i64 = 1500;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player game state.
///
/// Money may only go below zero transiently inside a debt settlement;
/// once a settlement returns, a non-bankrupt player's balance is >= 0
/// and a bankrupt player's balance is exactly 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    pub(crate) money: i64,
    pub(crate) position: usize,
    /// Properties held, in acquisition order. A property appears in at
    /// most one player's holdings at any time.
    pub(crate) holdings: Vec<PropertyId>,
    pub(crate) skip_turn: bool,
}

impl Player {
    /// Create a player with the given name and starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, money: i64) -> Self {
        Self {
            name: name.into(),
            money,
            position: 0,
            holdings: Vec::new(),
            skip_turn: false,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance.
    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Current board position (0-based cell index).
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Properties currently held, in acquisition order.
    #[must_use]
    pub fn holdings(&self) -> &[PropertyId] {
        &self.holdings
    }

    /// Whether the player's next turn will be skipped.
    #[must_use]
    pub fn skips_next_turn(&self) -> bool {
        self.skip_turn
    }

    /// Derived bankruptcy predicate.
    ///
    /// A player is bankrupt exactly when their balance is <= 0 **and**
    /// they hold no properties. The conjunction is deliberate: a player
    /// at zero money with residual property is still alive, since that
    /// property can be liquidated against future debts.
    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.money <= 0 && self.holdings.is_empty()
    }

    pub(crate) fn remove_holding(&mut self, id: PropertyId) {
        self.holdings.retain(|&held| held != id);
    }
}

/// Ordered player storage with O(1) access by `PlayerId`.
///
/// Roster order is turn order. Players are never removed, only flagged
/// bankrupt through their derived predicate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from player names, all starting at `money`.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, money: i64) -> Self {
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::new(name, money))
            .collect();

        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        Self { players }
    }

    /// Number of players in the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a reference to a player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Get a mutable reference to a player.
    pub(crate) fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// Iterate over (PlayerId, &Player) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId)
    }

    /// Players whose bankruptcy predicate does not hold.
    pub fn solvent_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.iter()
            .filter(|(_, p)| !p.is_bankrupt())
            .map(|(id, _)| id)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new("Alice", STARTING_MONEY);

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.money(), 1500);
        assert_eq!(player.position(), 0);
        assert!(player.holdings().is_empty());
        assert!(!player.skips_next_turn());
        assert!(!player.is_bankrupt());
    }

    #[test]
    fn test_bankruptcy_is_a_conjunction() {
        let mut player = Player::new("Broke", 0);
        assert!(player.is_bankrupt());

        // Zero money but residual property: still alive.
        player.holdings.push(PropertyId::new(3));
        assert!(!player.is_bankrupt());

        player.money = -50;
        assert!(!player.is_bankrupt());

        player.holdings.clear();
        assert!(player.is_bankrupt());
    }

    #[test]
    fn test_remove_holding() {
        let mut player = Player::new("Holder", 100);
        player.holdings.push(PropertyId::new(1));
        player.holdings.push(PropertyId::new(2));

        player.remove_holding(PropertyId::new(1));
        assert_eq!(player.holdings(), &[PropertyId::new(2)]);

        // Removing an id that is not held is a no-op.
        player.remove_holding(PropertyId::new(9));
        assert_eq!(player.holdings(), &[PropertyId::new(2)]);
    }

    #[test]
    fn test_roster_indexing() {
        let mut roster = Roster::new(["A", "B", "C"], 1500);

        assert_eq!(roster.player_count(), 3);
        assert_eq!(roster[PlayerId::new(1)].name(), "B");

        roster[PlayerId::new(2)].money = 7;
        assert_eq!(roster[PlayerId::new(2)].money(), 7);
    }

    #[test]
    fn test_roster_solvent_players() {
        let mut roster = Roster::new(["A", "B"], 1500);
        assert_eq!(roster.solvent_players().count(), 2);

        roster[PlayerId::new(0)].money = 0;
        assert_eq!(roster.solvent_players().count(), 1);
        assert_eq!(roster.solvent_players().next(), Some(PlayerId::new(1)));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_roster_empty() {
        let _ = Roster::new(Vec::<String>::new(), 1500);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("Ser", 300);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
