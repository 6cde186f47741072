//! Board cell variants.
//!
//! The closed set of landing effects. Cells are fixed at board
//! generation; the `Property` variant points into the board's property
//! table, so a property's state can change without touching the cell.

use serde::{Deserialize, Serialize};

use super::property::PropertyId;

/// One fixed position on the board with an associated landing effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Credits the landing player 200.
    Start,
    /// Credits the landing player the contained amount.
    Bonus(i64),
    /// Fines the landing player the contained amount, liquidating
    /// assets if needed.
    Penalty(i64),
    /// The landing player skips their next turn.
    Jail,
    /// Buy, pay rent, or upgrade, depending on ownership.
    Property(PropertyId),
}

impl Cell {
    /// The property this cell points at, if it is a property cell.
    #[must_use]
    pub fn property(self) -> Option<PropertyId> {
        match self {
            Cell::Property(id) => Some(id),
            _ => None,
        }
    }
}
