//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use campswap_quoting::prelude::*;
//! ```

pub use crate::config::DexConfig;
pub use crate::engine::{PoolOverview, QuoteEngine};
pub use crate::error::QuoteError;
pub use crate::reader::{ReserveReader, StaticReserves};
