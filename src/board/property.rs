//! The property economic model.
//!
//! A property is created once at board generation and never destroyed;
//! only its owner, upgrade level and monopoly flag change over a game.
//! Rent is computed from those fields through a fixed pipeline of
//! multiplier stages rather than by swapping decorated objects in and
//! out of board slots.

use serde::{Deserialize, Serialize};

/// Price of one upgrade.
pub const UPGRADE_COST: i64 = 100;

/// Maximum upgrade level a property can reach.
pub const MAX_UPGRADE_LEVEL: u8 = 3;

/// Flat rent increase per upgrade level, before multipliers.
pub const UPGRADE_RENT_STEP: i64 = 50;

/// Flat refund per upgrade level sold during liquidation, independent
/// of the property's price or rent.
pub const UPGRADE_REFUND: i64 = 50;

/// Stable identifier of a property in the board's property table.
///
/// Board cells refer to properties by id, so upgrading a property
/// never replaces the cell that points at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u16);

impl PropertyId {
    /// Create a new property ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Property({})", self.0)
    }
}

/// Tag partitioning properties into upgrade groups.
///
/// Owning every property of a group (with none upgraded yet) unlocks
/// upgrades on its members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorGroup(pub u8);

/// The level multiplier stage of the rent pipeline.
///
/// Applied to an already-computed rent value, truncating to an
/// integer: level 1 is x1.5, level 2 is x2.0, level 3 is x2.5.
/// Level 0 passes the rent through unchanged.
#[must_use]
pub fn apply_level_multiplier(rent: i64, level: u8) -> i64 {
    match level {
        1 => rent * 3 / 2,
        2 => rent * 2,
        3 => rent * 5 / 2,
        _ => rent,
    }
}

/// The monopoly stage of the rent pipeline.
///
/// Doubles whatever the wrapped computation yields when active.
#[must_use]
pub fn apply_monopoly(rent: i64, active: bool) -> i64 {
    if active {
        rent * 2
    } else {
        rent
    }
}

/// The economic entity of the game: a purchasable, upgradable cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    price: i64,
    group: ColorGroup,
    base_rent: i64,
    pub(crate) upgrade_level: u8,
    pub(crate) owner: Option<crate::core::PlayerId>,
    monopoly: bool,
}

impl Property {
    /// Create a property. Base rent is half the price, rounded down.
    #[must_use]
    pub fn new(name: impl Into<String>, price: i64, group: ColorGroup) -> Self {
        Self {
            name: name.into(),
            price,
            group,
            base_rent: price / 2,
            upgrade_level: 0,
            owner: None,
            monopoly: false,
        }
    }

    /// The property's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purchase price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Color group tag.
    #[must_use]
    pub fn group(&self) -> ColorGroup {
        self.group
    }

    /// Rent before upgrades and multipliers (price / 2).
    #[must_use]
    pub fn base_rent(&self) -> i64 {
        self.base_rent
    }

    /// Current upgrade level (0-3).
    #[must_use]
    pub fn upgrade_level(&self) -> u8 {
        self.upgrade_level
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<crate::core::PlayerId> {
        self.owner
    }

    /// Whether the monopoly rent doubling is active.
    #[must_use]
    pub fn is_monopoly(&self) -> bool {
        self.monopoly
    }

    /// Activate or clear the monopoly rent doubling.
    ///
    /// The engine never sets this on its own; when the doubling
    /// applies is decided by the host.
    pub fn set_monopoly(&mut self, active: bool) {
        self.monopoly = active;
    }

    /// Effective rent through the full pipeline.
    ///
    /// `base_rent + 50 x level`, then the level multiplier stage, then
    /// the monopoly stage. Each stage multiplies the previous stage's
    /// result.
    #[must_use]
    pub fn rent(&self) -> i64 {
        let rent = self.base_rent + UPGRADE_RENT_STEP * i64::from(self.upgrade_level);
        let rent = apply_level_multiplier(rent, self.upgrade_level);
        apply_monopoly(rent, self.monopoly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_base_rent_is_half_price() {
        let prop = Property::new("Street", 200, ColorGroup(1));
        assert_eq!(prop.base_rent(), 100);
        assert_eq!(prop.rent(), 100);

        // Integer division truncates.
        let odd = Property::new("Odd", 305, ColorGroup(0));
        assert_eq!(odd.base_rent(), 152);
    }

    #[test]
    fn test_level_multiplier_stage() {
        // The stage in isolation over a computed rent of 100.
        assert_eq!(apply_level_multiplier(100, 0), 100);
        assert_eq!(apply_level_multiplier(100, 1), 150);
        assert_eq!(apply_level_multiplier(100, 2), 200);
        assert_eq!(apply_level_multiplier(100, 3), 250);

        // Truncation matches float truncation: 101 * 1.5 = 151.5 -> 151.
        assert_eq!(apply_level_multiplier(101, 1), 151);
    }

    #[test]
    fn test_monopoly_stage_doubles() {
        assert_eq!(apply_monopoly(100, false), 100);
        assert_eq!(apply_monopoly(100, true), 200);
    }

    #[test]
    fn test_rent_composes_stages() {
        let mut prop = Property::new("Street", 200, ColorGroup(1));

        // Level 1: (100 + 50) * 1.5.
        prop.upgrade_level = 1;
        assert_eq!(prop.rent(), 225);

        // Level 2: (100 + 100) * 2.
        prop.upgrade_level = 2;
        assert_eq!(prop.rent(), 400);

        // Level 3: (100 + 150) * 2.5.
        prop.upgrade_level = 3;
        assert_eq!(prop.rent(), 625);

        // Monopoly wraps the already-computed rent.
        prop.set_monopoly(true);
        assert_eq!(prop.rent(), 1250);
    }

    #[test]
    fn test_monopoly_on_unimproved_property() {
        let mut prop = Property::new("Street", 200, ColorGroup(1));
        prop.set_monopoly(true);
        assert_eq!(prop.rent(), 200);
    }

    #[test]
    fn test_ownership_starts_clear() {
        let mut prop = Property::new("Street", 200, ColorGroup(1));
        assert_eq!(prop.owner(), None);

        prop.owner = Some(PlayerId::new(1));
        assert_eq!(prop.owner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_property_serde() {
        let prop = Property::new("Street", 200, ColorGroup(1));
        let json = serde_json::to_string(&prop).unwrap();
        let deserialized: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(prop, deserialized);
    }
}
