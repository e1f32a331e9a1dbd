use campswap_domain::DomainError;

/// Errors raised while building quotes for the configured pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// Pool math or amount parsing failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The token is neither side of the configured pair.
    #[error("unknown token: {0}")]
    UnknownToken(String),
    /// The configuration is incomplete or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The reserve reader could not produce a snapshot.
    #[error("reserves unavailable: {0}")]
    ReserveUnavailable(String),
}
