//! The board: a fixed cycle of cells over a property table.
//!
//! The board is generated once per game with a deterministic layout
//! rule and its length never changes. Cells refer to properties by
//! stable [`PropertyId`], so ownership and upgrades mutate entries of
//! the property table, never the cell sequence itself.

pub mod cell;
pub mod property;

pub use cell::Cell;
pub use property::{
    apply_level_multiplier, apply_monopoly, ColorGroup, Property, PropertyId, MAX_UPGRADE_LEVEL,
    UPGRADE_COST, UPGRADE_REFUND, UPGRADE_RENT_STEP,
};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Number of cells on the standard board.
pub const BOARD_SIZE: usize = 32;

/// Amount credited for landing on the Start cell.
pub const START_BONUS: i64 = 200;

/// Amount credited by a Bonus cell on the standard board.
pub const BONUS_AMOUNT: i64 = 150;

/// Amount fined by a Penalty cell on the standard board.
pub const PENALTY_AMOUNT: i64 = 100;

/// The fixed property list of the standard board: name, price, group.
const PROPERTY_SEED: [(&str, i64, u8); 16] = [
    ("Mercedes-Benz", 300, 0),
    ("KFC", 250, 0),
    ("UFC", 280, 1),
    ("Nike", 270, 1),
    ("Apple", 350, 2),
    ("Microsoft", 330, 2),
    ("Tesla", 400, 3),
    ("Coca-Cola", 310, 3),
    ("Mercedes-Benz2", 300, 0),
    ("KFC2", 250, 0),
    ("UFC2", 280, 1),
    ("Nike2", 270, 1),
    ("Apple2", 350, 2),
    ("Microsoft2", 330, 2),
    ("Tesla2", 400, 3),
    ("Coca-Cola2", 310, 3),
];

/// Members of one color group. Standard groups have four members.
type GroupMembers = SmallVec<[PropertyId; 4]>;

/// An ordered, fixed-size cycle of cells plus the property table the
/// property cells point into.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    properties: Vec<Property>,
    groups: FxHashMap<ColorGroup, GroupMembers>,
}

impl Board {
    /// Generate the standard 32-cell board.
    ///
    /// Index 0 is Start. The fixed property list is walked in order;
    /// after the k-th placed property (1-based), a Penalty cell is
    /// inserted when k % 4 == 0, a Bonus cell when k % 5 == 0 and a
    /// Jail cell when k % 6 == 0. The tail is padded with Penalty
    /// cells up to exactly 32 cells.
    #[must_use]
    pub fn standard() -> Self {
        let mut cells = vec![Cell::Start];
        let mut properties = Vec::with_capacity(PROPERTY_SEED.len());

        for (placed, &(name, price, group)) in PROPERTY_SEED.iter().enumerate() {
            let id = PropertyId::new(properties.len() as u16);
            properties.push(Property::new(name, price, ColorGroup(group)));
            cells.push(Cell::Property(id));

            let k = placed + 1;
            if k % 4 == 0 {
                cells.push(Cell::Penalty(PENALTY_AMOUNT));
            }
            if k % 5 == 0 {
                cells.push(Cell::Bonus(BONUS_AMOUNT));
            }
            if k % 6 == 0 {
                cells.push(Cell::Jail);
            }
        }

        while cells.len() < BOARD_SIZE {
            cells.push(Cell::Penalty(PENALTY_AMOUNT));
        }

        Self::from_parts(cells, properties)
    }

    /// Build a board that is nothing but the given properties, one
    /// cell each. Used to set up exact economic scenarios in tests.
    #[cfg(test)]
    pub(crate) fn with_properties(properties: Vec<Property>) -> Self {
        let cells = (0..properties.len())
            .map(|i| Cell::Property(PropertyId::new(i as u16)))
            .collect();

        let mut groups: FxHashMap<ColorGroup, GroupMembers> = FxHashMap::default();
        for (i, prop) in properties.iter().enumerate() {
            groups
                .entry(prop.group())
                .or_default()
                .push(PropertyId::new(i as u16));
        }

        Self {
            cells,
            properties,
            groups,
        }
    }

    fn from_parts(cells: Vec<Cell>, properties: Vec<Property>) -> Self {
        assert!(!cells.is_empty(), "Board must have at least 1 cell");

        let mut groups: FxHashMap<ColorGroup, GroupMembers> = FxHashMap::default();
        for (i, prop) in properties.iter().enumerate() {
            groups
                .entry(prop.group())
                .or_default()
                .push(PropertyId::new(i as u16));
        }

        Self {
            cells,
            properties,
            groups,
        }
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells. Never true for a generated
    /// board; position wrapping relies on it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at the given index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in board order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The property with the given id.
    #[must_use]
    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.index()]
    }

    pub(crate) fn property_mut(&mut self, id: PropertyId) -> &mut Property {
        &mut self.properties[id.index()]
    }

    /// Iterate over all property ids in table order.
    pub fn property_ids(&self) -> impl Iterator<Item = PropertyId> {
        (0..self.properties.len() as u16).map(PropertyId::new)
    }

    /// Look up a property by name.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<PropertyId> {
        self.properties
            .iter()
            .position(|p| p.name() == name)
            .map(|i| PropertyId::new(i as u16))
    }

    /// The cell index a property sits at.
    #[must_use]
    pub fn cell_of(&self, id: PropertyId) -> Option<usize> {
        self.cells.iter().position(|c| c.property() == Some(id))
    }

    /// All members of a color group, in table order.
    #[must_use]
    pub fn group_members(&self, group: ColorGroup) -> &[PropertyId] {
        self.groups.get(&group).map_or(&[], |members| members)
    }

    /// Whether one player owns every property in the group.
    #[must_use]
    pub fn group_fully_owned_by(&self, group: ColorGroup, player: PlayerId) -> bool {
        self.group_members(group)
            .iter()
            .all(|&id| self.property(id).owner() == Some(player))
    }

    /// Whether no property in the group has been upgraded yet.
    #[must_use]
    pub fn group_unimproved(&self, group: ColorGroup) -> bool {
        self.group_members(group)
            .iter()
            .all(|&id| self.property(id).upgrade_level() == 0)
    }

    /// Human-readable label for a cell, for status reporting.
    #[must_use]
    pub fn cell_label(&self, index: usize) -> &str {
        match self.cells[index] {
            Cell::Start => "Start",
            Cell::Bonus(_) => "Bonus",
            Cell::Penalty(_) => "Penalty",
            Cell::Jail => "Jail",
            Cell::Property(id) => self.property(id).name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_shape() {
        let board = Board::standard();

        assert_eq!(board.len(), BOARD_SIZE);
        assert_eq!(board.cell(0), Cell::Start);
        assert!(board.cells().iter().any(|c| matches!(c, Cell::Jail)));
        assert_eq!(board.property_ids().count(), 16);
    }

    #[test]
    fn test_standard_board_layout_rule() {
        let board = Board::standard();

        // After the 4th property comes a penalty, after the 5th a
        // bonus, after the 6th a jail.
        assert_eq!(board.cell(5), Cell::Penalty(PENALTY_AMOUNT));
        assert_eq!(board.cell(7), Cell::Bonus(BONUS_AMOUNT));
        assert_eq!(board.cell(9), Cell::Jail);

        // The tail is penalty padding.
        for index in 26..BOARD_SIZE {
            assert_eq!(board.cell(index), Cell::Penalty(PENALTY_AMOUNT));
        }
    }

    #[test]
    fn test_standard_board_cell_census() {
        let board = Board::standard();

        let count = |f: fn(&Cell) -> bool| board.cells().iter().filter(|c| f(c)).count();
        assert_eq!(count(|c| matches!(c, Cell::Start)), 1);
        assert_eq!(count(|c| matches!(c, Cell::Property(_))), 16);
        assert_eq!(count(|c| matches!(c, Cell::Penalty(_))), 10);
        assert_eq!(count(|c| matches!(c, Cell::Bonus(_))), 3);
        assert_eq!(count(|c| matches!(c, Cell::Jail)), 2);
    }

    #[test]
    fn test_groups_have_four_members() {
        let board = Board::standard();

        for group in 0..4 {
            assert_eq!(board.group_members(ColorGroup(group)).len(), 4);
        }
        assert!(board.group_members(ColorGroup(9)).is_empty());
    }

    #[test]
    fn test_find_property_and_cell_of() {
        let board = Board::standard();

        let tesla = board.find_property("Tesla").unwrap();
        assert_eq!(board.property(tesla).price(), 400);

        let cell = board.cell_of(tesla).unwrap();
        assert_eq!(board.cell(cell), Cell::Property(tesla));
        assert_eq!(board.cell_label(cell), "Tesla");

        assert!(board.find_property("Nonexistent").is_none());
    }

    #[test]
    fn test_group_ownership_queries() {
        let mut board = Board::standard();
        let group = ColorGroup(0);
        let player = PlayerId::new(0);

        assert!(!board.group_fully_owned_by(group, player));
        assert!(board.group_unimproved(group));

        let members: Vec<_> = board.group_members(group).to_vec();
        for id in &members {
            board.property_mut(*id).owner = Some(player);
        }
        assert!(board.group_fully_owned_by(group, player));

        board.property_mut(members[0]).upgrade_level = 1;
        assert!(!board.group_unimproved(group));
    }
}
