use primitive_types::U256;

/// Errors raised by the AMM math and value types.
///
/// Degenerate pools are not errors: swaps against an empty pool quote zero
/// and the first deposit takes the geometric-mean branch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The input is not a nonnegative decimal number.
    #[error("invalid amount format: {0:?}")]
    InvalidAmountFormat(String),
    /// The value does not fit in 256 bits.
    #[error("amount exceeds 256 bits")]
    AmountOverflow,
    /// The pool cannot provide the requested output.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,
    /// Reserves and LP supply disagree on whether the pool is seeded.
    #[error("inconsistent reserves: a={reserve_a}, b={reserve_b}, lp_supply={total_supply}")]
    InconsistentReserves {
        reserve_a: U256,
        reserve_b: U256,
        total_supply: U256,
    },
    /// A 100% fee leaves no effective input to trade with.
    #[error("fee consumes the entire input")]
    FeeConsumesInput,
    /// A display conversion into `Decimal` failed.
    #[error("decimal conversion failed: {0}")]
    DecimalConversion(String),
}
