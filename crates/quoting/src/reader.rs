use crate::error::QuoteError;
use campswap_domain::pool::ReserveState;
use campswap_domain::token::TokenAmount;

/// Source of pool reserve snapshots.
///
/// Implementations wrap whatever reads the pool contract. Each call returns
/// a complete snapshot; callers never combine fields from two reads.
pub trait ReserveReader {
    /// Reads the current reserves and LP supply.
    fn reserves(&self) -> Result<ReserveState, QuoteError>;
}

/// A reader that always returns the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticReserves {
    /// The snapshot handed out on every read.
    pub state: ReserveState,
}

impl StaticReserves {
    /// Creates a new StaticReserves reader.
    pub fn new(state: ReserveState) -> Self {
        Self { state }
    }

    /// Builds the snapshot from raw reserve values, checking consistency.
    pub fn from_raw(
        reserve_a: TokenAmount,
        reserve_b: TokenAmount,
        total_lp_supply: TokenAmount,
    ) -> Result<Self, QuoteError> {
        Ok(Self::new(ReserveState::new(
            reserve_a,
            reserve_b,
            total_lp_supply,
        )?))
    }
}

impl ReserveReader for StaticReserves {
    fn reserves(&self) -> Result<ReserveState, QuoteError> {
        Ok(self.state)
    }
}
