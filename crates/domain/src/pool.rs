use crate::error::DomainError;
use crate::token::TokenAmount;
use serde::{Deserialize, Serialize};

/// Which way a swap moves through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Token A in, token B out.
    AToB,
    /// Token B in, token A out.
    BToA,
}

impl SwapDirection {
    /// The opposite direction through the same pool.
    pub fn reversed(self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

/// Snapshot of one pool as read from chain.
///
/// A snapshot is never mutated: a refresh produces a new value. Either all
/// three fields are zero (unseeded) or none is; deserialization goes
/// through [`ReserveState::new`] and enforces the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReserveState")]
pub struct ReserveState {
    pub reserve_a: TokenAmount,
    pub reserve_b: TokenAmount,
    pub total_lp_supply: TokenAmount,
}

/// Wire shape of a `ReserveState`, checked before it becomes one.
#[derive(Deserialize)]
struct RawReserveState {
    reserve_a: TokenAmount,
    reserve_b: TokenAmount,
    total_lp_supply: TokenAmount,
}

impl TryFrom<RawReserveState> for ReserveState {
    type Error = DomainError;

    fn try_from(raw: RawReserveState) -> Result<Self, Self::Error> {
        Self::new(raw.reserve_a, raw.reserve_b, raw.total_lp_supply)
    }
}

impl ReserveState {
    /// Builds a snapshot, rejecting partially seeded pools.
    pub fn new(
        reserve_a: TokenAmount,
        reserve_b: TokenAmount,
        total_lp_supply: TokenAmount,
    ) -> Result<Self, DomainError> {
        let zeros = [reserve_a, reserve_b, total_lp_supply]
            .iter()
            .filter(|v| v.is_zero())
            .count();
        if zeros != 0 && zeros != 3 {
            return Err(DomainError::InconsistentReserves {
                reserve_a: reserve_a.0,
                reserve_b: reserve_b.0,
                total_supply: total_lp_supply.0,
            });
        }
        Ok(Self {
            reserve_a,
            reserve_b,
            total_lp_supply,
        })
    }

    /// The unseeded pool.
    pub fn empty() -> Self {
        Self {
            reserve_a: TokenAmount::zero(),
            reserve_b: TokenAmount::zero(),
            total_lp_supply: TokenAmount::zero(),
        }
    }

    /// True once the first deposit has landed.
    pub fn is_seeded(&self) -> bool {
        !self.reserve_a.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a swap direction.
    pub fn reserves_for(&self, direction: SwapDirection) -> (TokenAmount, TokenAmount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partially_seeded_pool_is_rejected() {
        let err = ReserveState::new(
            TokenAmount::from(1000u64),
            TokenAmount::zero(),
            TokenAmount::from(10u64),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InconsistentReserves { .. }));
    }

    #[test]
    fn test_reserves_follow_direction() {
        let state = ReserveState::new(
            TokenAmount::from(1000u64),
            TokenAmount::from(2000u64),
            TokenAmount::from(1414u64),
        )
        .unwrap();
        assert!(state.is_seeded());
        assert_eq!(
            state.reserves_for(SwapDirection::BToA),
            (TokenAmount::from(2000u64), TokenAmount::from(1000u64))
        );
        assert_eq!(SwapDirection::AToB.reversed(), SwapDirection::BToA);
        assert!(!ReserveState::empty().is_seeded());
    }

    #[test]
    fn test_deserialize_enforces_seeding_rule() {
        let state = ReserveState::new(
            TokenAmount::from(1000u64),
            TokenAmount::from(2000u64),
            TokenAmount::from(1414u64),
        )
        .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<ReserveState>(&json).unwrap(), state);

        let partial = r#"{"reserve_a":"0x3e8","reserve_b":"0x0","total_lp_supply":"0x586"}"#;
        assert!(serde_json::from_str::<ReserveState>(partial).is_err());

        let empty = serde_json::to_string(&ReserveState::empty()).unwrap();
        assert_eq!(serde_json::from_str::<ReserveState>(&empty).unwrap(), ReserveState::empty());
    }
}
