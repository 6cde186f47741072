//! Play one game on the console.
//!
//! Two players, entropy-seeded dice, every status line printed.

use tycoon_engine::{ConsoleSink, GameBuilder, SeededDice};

fn main() {
    let mut game = GameBuilder::new(["Player 1", "Player 2"])
        .dice(SeededDice::from_entropy())
        .sink(ConsoleSink)
        .build();

    game.run_to_completion();
}
