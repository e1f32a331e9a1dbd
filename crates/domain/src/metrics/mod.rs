//! Display metrics derived from reserves.
//!
//! These values use `Decimal` and never flow into a transaction argument.

pub mod fees;
pub mod valuation;
