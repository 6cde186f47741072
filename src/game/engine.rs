//! The game engine: landing dispatch and the turn scheduler.
//!
//! One `Game` owns the board, the roster and the two injected
//! collaborators (dice and status sink). Everything is synchronous:
//! a scheduler step runs the whole roll / move / land / advance
//! sequence to completion before returning, so there is exactly one
//! logical actor mutating state at any time.

use crate::board::{Board, Cell, PropertyId, ColorGroup, MAX_UPGRADE_LEVEL, START_BONUS, UPGRADE_COST};
use crate::core::{
    DiceRoll, DiceSource, NullSink, PlayerId, Player, Roster, SeededDice, StatusSink,
    STARTING_MONEY,
};
use crate::economy::settle_debt;

use super::outcome::{GameResult, TurnOutcome};

/// Builder for a [`Game`].
///
/// Player names are required; everything else has a default: the
/// standard board, a starting balance of 1500, entropy-seeded dice
/// and a sink that discards status lines.
pub struct GameBuilder {
    names: Vec<String>,
    starting_money: i64,
    dice: Box<dyn DiceSource>,
    sink: Box<dyn StatusSink>,
}

impl GameBuilder {
    /// Start building a game for the given players, in turn order.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            starting_money: STARTING_MONEY,
            dice: Box::new(SeededDice::from_entropy()),
            sink: Box::new(NullSink),
        }
    }

    /// Override the starting balance (default 1500).
    #[must_use]
    pub fn starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Use deterministic dice with the given seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.dice = Box::new(SeededDice::new(seed));
        self
    }

    /// Use a custom dice source.
    #[must_use]
    pub fn dice(mut self, dice: impl DiceSource + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    /// Use a custom status sink.
    #[must_use]
    pub fn sink(mut self, sink: impl StatusSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the game.
    ///
    /// Panics if the player list is empty.
    #[must_use]
    pub fn build(self) -> Game {
        Game {
            board: Board::standard(),
            roster: Roster::new(self.names, self.starting_money),
            current: 0,
            steps: 0,
            dice: self.dice,
            sink: self.sink,
        }
    }
}

/// A running game session.
pub struct Game {
    board: Board,
    roster: Roster,
    /// Index of the player whose turn it is, cyclic over the roster.
    current: usize,
    /// Number of completed (non-skipped) turns.
    steps: u64,
    dice: Box<dyn DiceSource>,
    sink: Box<dyn StatusSink>,
}

impl Game {
    /// Create a game with default settings and seeded dice.
    #[must_use]
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, seed: u64) -> Self {
        GameBuilder::new(names).seed(seed).build()
    }

    // === Read-only views ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.roster[id]
    }

    /// All players in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.roster.iter()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.player_count()
    }

    /// Whose turn the next step will act on (bankrupt players are
    /// passed over when the step runs).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// Number of completed turns so far.
    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Whether one player owns every property in a color group.
    #[must_use]
    pub fn player_owns_group(&self, player: PlayerId, group: ColorGroup) -> bool {
        self.board.group_fully_owned_by(group, player)
    }

    /// Terminal check: `Some` once at most one solvent player remains.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let mut solvent = self.roster.solvent_players();
        match (solvent.next(), solvent.next()) {
            (Some(_), Some(_)) => None,
            (Some(winner), None) => Some(GameResult::Winner(winner)),
            (None, _) => Some(GameResult::Draw),
        }
    }

    // === Host-facing mutation ===

    /// Roll the injected dice without moving anyone.
    pub fn roll_dice(&mut self) -> DiceRoll {
        self.dice.roll()
    }

    /// Assign an unowned property to a player directly, outside the
    /// purchase flow. For scenario setup by hosts and tests.
    ///
    /// Panics if the property is already owned.
    pub fn grant(&mut self, player: PlayerId, id: PropertyId) {
        assert!(
            self.board.property(id).owner().is_none(),
            "Property is already owned"
        );
        self.board.property_mut(id).owner = Some(player);
        self.roster[player].holdings.push(id);
    }

    /// Activate or clear the monopoly rent doubling on a property.
    /// When the doubling applies is the host's decision; see
    /// [`Game::player_owns_group`].
    pub fn set_monopoly(&mut self, id: PropertyId, active: bool) {
        self.board.property_mut(id).set_monopoly(active);
    }

    /// Apply a debt of `amount` against `player`, liquidating assets
    /// and declaring bankruptcy as needed.
    pub fn apply_penalty(&mut self, player: PlayerId, amount: i64, beneficiary: Option<PlayerId>) {
        settle_debt(
            &mut self.board,
            &mut self.roster,
            player,
            amount,
            beneficiary,
            self.sink.as_mut(),
        );
    }

    // === Landing dispatch ===

    /// Resolve the landing effect of a cell against a player.
    ///
    /// Does not move the player; the scheduler updates positions
    /// before dispatching.
    pub fn land_on(&mut self, player: PlayerId, cell: usize) {
        match self.board.cell(cell) {
            Cell::Start => {
                self.roster[player].money += START_BONUS;
                self.sink.status(&format!(
                    "{} collected {} for landing on Start.",
                    self.roster[player].name(),
                    START_BONUS
                ));
            }
            Cell::Bonus(amount) => {
                self.roster[player].money += amount;
                self.sink.status(&format!(
                    "{} collected a bonus of {}.",
                    self.roster[player].name(),
                    amount
                ));
            }
            Cell::Jail => {
                self.roster[player].skip_turn = true;
                self.sink.status(&format!(
                    "{} was sent to jail and skips the next turn.",
                    self.roster[player].name()
                ));
            }
            Cell::Penalty(amount) => self.apply_penalty(player, amount, None),
            Cell::Property(id) => self.land_on_property(player, id),
        }
    }

    fn land_on_property(&mut self, player: PlayerId, id: PropertyId) {
        match self.board.property(id).owner() {
            None => self.try_buy(player, id),
            Some(owner) if owner != player => self.charge_rent(player, owner, id),
            Some(_) => self.try_upgrade(player, id),
        }
    }

    fn try_buy(&mut self, player: PlayerId, id: PropertyId) {
        let price = self.board.property(id).price();

        if self.roster[player].money >= price {
            self.roster[player].money -= price;
            self.board.property_mut(id).owner = Some(player);
            self.roster[player].holdings.push(id);
            self.sink.status(&format!(
                "{} buys {} for {}.",
                self.roster[player].name(),
                self.board.property(id).name(),
                price
            ));
        } else {
            self.sink.status(&format!(
                "{} cannot afford {}.",
                self.roster[player].name(),
                self.board.property(id).name()
            ));
        }
    }

    fn charge_rent(&mut self, guest: PlayerId, owner: PlayerId, id: PropertyId) {
        let rent = self.board.property(id).rent();
        self.sink.status(&format!(
            "{} owes {} to {} for {}.",
            self.roster[guest].name(),
            rent,
            self.roster[owner].name(),
            self.board.property(id).name()
        ));
        self.apply_penalty(guest, rent, Some(owner));
    }

    fn try_upgrade(&mut self, player: PlayerId, id: PropertyId) {
        let group = self.board.property(id).group();
        let level = self.board.property(id).upgrade_level();
        let owns_group = self.board.group_fully_owned_by(group, player);
        let unimproved = self.board.group_unimproved(group);
        let can_pay = self.roster[player].money >= UPGRADE_COST;

        if level < MAX_UPGRADE_LEVEL && can_pay && owns_group && unimproved {
            self.roster[player].money -= UPGRADE_COST;
            self.board.property_mut(id).upgrade_level += 1;
            self.sink.status(&format!(
                "{} upgrades {} to level {}.",
                self.roster[player].name(),
                self.board.property(id).name(),
                level + 1
            ));
        } else if !owns_group || !unimproved {
            self.sink.status(&format!(
                "{} cannot upgrade {}: the whole color group must be owned and unimproved.",
                self.roster[player].name(),
                self.board.property(id).name()
            ));
        } else {
            self.sink.status(&format!(
                "{} cannot afford to upgrade {}.",
                self.roster[player].name(),
                self.board.property(id).name()
            ));
        }
    }

    // === Turn scheduler ===

    /// Run one scheduler step.
    ///
    /// Bankrupt players are passed over without consuming a counted
    /// turn. A player whose skip flag is set forfeits the turn and
    /// the flag is cleared. Otherwise the player rolls two dice,
    /// moves by their sum (wrapping around the board), the landing
    /// effect is dispatched, the step counter advances and the turn
    /// passes to the cyclic successor.
    pub fn step(&mut self) -> TurnOutcome {
        if let Some(result) = self.result() {
            return TurnOutcome::Finished(result);
        }

        // At least two solvent players exist here, so this terminates.
        while self.roster[self.current_player()].is_bankrupt() {
            self.advance();
        }
        let player = self.current_player();

        if self.roster[player].skip_turn {
            self.roster[player].skip_turn = false;
            self.sink
                .status(&format!("{} skips this turn.", self.roster[player].name()));
            self.advance();
            return TurnOutcome::Skipped { player };
        }

        let roll = self.dice.roll();
        self.sink.status(&format!(
            "{} rolled {}.",
            self.roster[player].name(),
            roll
        ));

        let cell = (self.roster[player].position + roll.total()) % self.board.len();
        self.roster[player].position = cell;
        self.sink.status(&format!(
            "{} landed on {}.",
            self.roster[player].name(),
            self.board.cell_label(cell)
        ));

        self.land_on(player, cell);
        self.status_report();

        self.steps += 1;
        self.advance();

        TurnOutcome::Moved { player, roll, cell }
    }

    /// Drive steps until the game terminates; returns the result.
    pub fn run_to_completion(&mut self) -> GameResult {
        loop {
            if let TurnOutcome::Finished(result) = self.step() {
                match result {
                    GameResult::Winner(winner) => self.sink.status(&format!(
                        "Game over! Winner: {}.",
                        self.roster[winner].name()
                    )),
                    GameResult::Draw => self.sink.status("Game over! No solvent players remain."),
                }
                self.sink
                    .status(&format!("Total steps taken: {}.", self.steps));
                return result;
            }
        }
    }

    /// Emit one balance/holdings summary line per player.
    pub fn status_report(&mut self) {
        for (_, player) in self.roster.iter() {
            let holdings: Vec<String> = player
                .holdings()
                .iter()
                .map(|&id| {
                    let prop = self.board.property(id);
                    format!("{} (level {})", prop.name(), prop.upgrade_level())
                })
                .collect();
            self.sink.status(&format!(
                "{} - balance: {}, properties: {}",
                player.name(),
                player.money(),
                holdings.join(", ")
            ));
        }
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.roster.player_count();
    }
}
