//! Quote orchestration for a constant-product pool.
//!
//! Connects the pure pool math in `campswap-domain` to user input:
//! - `DexConfig`: the pool, its tokens, fee and slippage
//! - `ReserveReader`: where reserve snapshots come from
//! - `QuoteEngine`: swap, exact-output, deposit and removal quotes

/// Prelude module for convenient imports.
pub mod prelude;

/// Pool configuration.
pub mod config;
/// Quote construction.
pub mod engine;
/// Error types.
pub mod error;
/// Reserve snapshot sources.
pub mod reader;

pub use config::DexConfig;
pub use engine::{PoolOverview, QuoteEngine};
pub use error::QuoteError;
pub use reader::{ReserveReader, StaticReserves};
