//! Debt settlement: penalties, forced liquidation and bankruptcy.

pub mod resolver;

pub use resolver::settle_debt;
