//! The penalty and bankruptcy resolver.
//!
//! Given a debtor, an amount and an optional beneficiary, deduct the
//! amount, liquidating the debtor's assets in two deterministic passes
//! when their balance does not cover it:
//!
//! 1. Upgrades, properties ordered by level descending, one level at a
//!    time at a flat refund, until covered.
//! 2. Remaining properties ordered by price ascending, at half price
//!    each, until covered.
//!
//! If even full liquidation falls short, the debtor goes bankrupt:
//! their balance is zeroed (residual proceeds are discarded), every
//! remaining holding becomes ownerless, and the beneficiary is not
//! paid. The resolver returns nothing; callers observe the outcome
//! through the debtor's balance, holdings and bankruptcy predicate.

use std::cmp::Reverse;

use crate::board::{Board, PropertyId, UPGRADE_REFUND};
use crate::core::{PlayerId, Roster, StatusSink};

/// Apply a debt of `amount` against `debtor`, liquidating as needed.
///
/// When `beneficiary` is given it is credited the full amount, but
/// only if the debtor can pay after liquidation.
pub fn settle_debt(
    board: &mut Board,
    roster: &mut Roster,
    debtor: PlayerId,
    amount: i64,
    beneficiary: Option<PlayerId>,
    sink: &mut dyn StatusSink,
) {
    if roster[debtor].money >= amount {
        transfer(roster, debtor, amount, beneficiary);
        return;
    }

    sink.status(&format!(
        "{} cannot pay the penalty of {}.",
        roster[debtor].name(),
        amount
    ));

    liquidate_upgrades(board, roster, debtor, amount, sink);
    liquidate_properties(board, roster, debtor, amount, sink);

    if roster[debtor].money >= amount {
        transfer(roster, debtor, amount, beneficiary);
    } else {
        declare_bankruptcy(board, roster, debtor, sink);
    }
}

/// Debit the debtor and credit the beneficiary, if any.
fn transfer(roster: &mut Roster, debtor: PlayerId, amount: i64, beneficiary: Option<PlayerId>) {
    roster[debtor].money -= amount;
    if let Some(to) = beneficiary {
        roster[to].money += amount;
    }
}

/// Sell upgrade levels, highest-level properties first, at a flat
/// refund per level, until the debt is covered or none remain.
fn liquidate_upgrades(
    board: &mut Board,
    roster: &mut Roster,
    debtor: PlayerId,
    amount: i64,
    sink: &mut dyn StatusSink,
) {
    // Order is fixed up front; ties keep acquisition order.
    let mut by_level: Vec<PropertyId> = roster[debtor].holdings.clone();
    by_level.sort_by_key(|&id| Reverse(board.property(id).upgrade_level()));

    for id in by_level {
        while board.property(id).upgrade_level() > 0 && roster[debtor].money < amount {
            board.property_mut(id).upgrade_level -= 1;
            roster[debtor].money += UPGRADE_REFUND;
            sink.status(&format!(
                "{} sells an upgrade on {} for {}.",
                roster[debtor].name(),
                board.property(id).name(),
                UPGRADE_REFUND
            ));
        }
    }
}

/// Sell whole properties, cheapest first, at half price each,
/// stopping as soon as the debt is covered.
fn liquidate_properties(
    board: &mut Board,
    roster: &mut Roster,
    debtor: PlayerId,
    amount: i64,
    sink: &mut dyn StatusSink,
) {
    let mut by_price: Vec<PropertyId> = roster[debtor].holdings.clone();
    by_price.sort_by_key(|&id| board.property(id).price());

    for id in by_price {
        if roster[debtor].money >= amount {
            break;
        }
        let proceeds = board.property(id).price() / 2;
        roster[debtor].money += proceeds;
        board.property_mut(id).owner = None;
        roster[debtor].remove_holding(id);
        sink.status(&format!(
            "{} sells {} for {}.",
            roster[debtor].name(),
            board.property(id).name(),
            proceeds
        ));
    }
}

/// Zero the balance, clear every remaining holding and its owner.
/// Residual partial proceeds are discarded, not carried forward.
fn declare_bankruptcy(
    board: &mut Board,
    roster: &mut Roster,
    debtor: PlayerId,
    sink: &mut dyn StatusSink,
) {
    sink.status(&format!("{} is bankrupt!", roster[debtor].name()));

    roster[debtor].money = 0;
    let held: Vec<PropertyId> = roster[debtor].holdings.drain(..).collect();
    for id in held {
        board.property_mut(id).owner = None;
    }
}
