//! Constant-product AMM domain: value types and exact pool math.
//!
//! This crate contains everything needed to price a two-token pool:
//! - Fixed-point parsing and formatting of token amounts
//! - Integer square root for first-deposit LP minting
//! - Swap output, fee and price impact calculation
//! - Optimal deposit ratio, LP minting and redemption
//! - Slippage bounds for transaction arguments
//! - Display metrics and on-chain event analysis
//!
//! All functions are pure; nothing here performs I/O.

/// Prelude module for convenient imports.
pub mod prelude;

/// Contract call arguments.
pub mod call;
/// Error types.
pub mod error;
/// On-chain event analysis.
pub mod events;
/// Trading fee rate.
pub mod fees;
/// Amount text validation.
pub mod input;
/// Exact pool math.
pub mod math;
/// Display metrics.
pub mod metrics;
/// Reserve snapshots.
pub mod pool;
/// LP position views.
pub mod position;
/// Swap and liquidity quotes.
pub mod quote;
/// Tokens and raw amounts.
pub mod token;

pub use error::DomainError;
