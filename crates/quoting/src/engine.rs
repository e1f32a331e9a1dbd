//! Quote orchestration.
//!
//! Turns raw user input and a reserve snapshot into quotes ready to become
//! contract calls. Every method is a pure function of its arguments and the
//! engine's configuration.

use crate::config::DexConfig;
use crate::error::QuoteError;
use crate::reader::ReserveReader;
use campswap_domain::error::DomainError;
use campswap_domain::math::constant_product::{
    quote_price_impact, quote_swap_input, quote_swap_output, swap_fee,
};
use campswap_domain::math::fixed_point::{format_amount, parse_amount};
use campswap_domain::math::liquidity::{
    mint_lp_tokens, optimal_deposit_amounts, pool_share, redeem_lp_tokens,
};
use campswap_domain::math::slippage::{max_amount_in, min_amount_out};
use campswap_domain::metrics::valuation::{pool_value_in_b, spot_price};
use campswap_domain::pool::{ReserveState, SwapDirection};
use campswap_domain::position::UserPosition;
use campswap_domain::quote::{ExactOutputQuote, LiquidityQuote, RemovalQuote, SwapQuote};
use campswap_domain::token::{Token, TokenAmount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Fraction digits shown for reserves in a pool overview.
const DISPLAY_PRECISION: u8 = 6;

/// Display summary of a pool snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolOverview {
    pub token_a: Token,
    pub token_b: Token,
    pub reserve_a: String,
    pub reserve_b: String,
    pub total_lp_supply: String,
    /// Price of one whole token A in token B.
    pub price_a_in_b: Decimal,
    /// Price of one whole token B in token A.
    pub price_b_in_a: Decimal,
    /// Both reserves valued in token B at the spot price.
    pub value_in_b: Decimal,
    pub fee_percent: Decimal,
}

/// Builds quotes for the configured pool.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    config: DexConfig,
}

impl QuoteEngine {
    /// Creates a new engine after validating `config`.
    pub fn new(config: DexConfig) -> Result<Self, QuoteError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration quotes are built with.
    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    /// Resolves a symbol or address to one side of the pair.
    pub fn token(&self, symbol_or_address: &str) -> Result<&Token, QuoteError> {
        self.config
            .token(symbol_or_address)
            .ok_or_else(|| QuoteError::UnknownToken(symbol_or_address.to_string()))
    }

    fn direction_from(&self, token_in: &Token) -> Result<SwapDirection, QuoteError> {
        if token_in.is(&self.config.token_a) {
            Ok(SwapDirection::AToB)
        } else if token_in.is(&self.config.token_b) {
            Ok(SwapDirection::BToA)
        } else {
            Err(QuoteError::UnknownToken(token_in.address.clone()))
        }
    }

    fn tokens_for(&self, direction: SwapDirection) -> (&Token, &Token) {
        match direction {
            SwapDirection::AToB => (&self.config.token_a, &self.config.token_b),
            SwapDirection::BToA => (&self.config.token_b, &self.config.token_a),
        }
    }

    fn swap_quote(
        &self,
        reserves: &ReserveState,
        direction: SwapDirection,
        amount_in: TokenAmount,
    ) -> SwapQuote {
        let fee = self.config.fee;
        let (reserve_in, reserve_out) = reserves.reserves_for(direction);
        let amount_out = quote_swap_output(amount_in, reserve_in, reserve_out, fee);
        let (token_in, token_out) = self.tokens_for(direction);

        SwapQuote {
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            direction,
            amount_in,
            amount_out,
            price_impact_percent: quote_price_impact(amount_in, reserve_in, reserve_out, fee),
            fee_amount: swap_fee(amount_in, fee),
            min_amount_out: min_amount_out(amount_out, self.config.slippage),
        }
    }

    /// Quotes selling `amount_in` of `token_in` against the snapshot.
    pub fn quote_swap(
        &self,
        reserves: &ReserveState,
        token_in: &Token,
        amount_in: &str,
    ) -> Result<SwapQuote, QuoteError> {
        let direction = self.direction_from(token_in)?;
        let decimals = self.tokens_for(direction).0.decimals;
        let amount_in = parse_amount(amount_in, decimals)?;
        let quote = self.swap_quote(reserves, direction, amount_in);

        debug!(
            token_in = %quote.token_in,
            amount_in = %quote.amount_in,
            amount_out = %quote.amount_out,
            price_impact = quote.price_impact_percent,
            "Quoted swap"
        );
        Ok(quote)
    }

    /// Like [`Self::quote_swap`], but malformed amount text yields an
    /// all-zero quote so the caller can disable the action.
    pub fn quote_swap_or_zero(
        &self,
        reserves: &ReserveState,
        token_in: &Token,
        amount_in: &str,
    ) -> Result<SwapQuote, QuoteError> {
        match self.quote_swap(reserves, token_in, amount_in) {
            Err(QuoteError::Domain(DomainError::InvalidAmountFormat(text))) => {
                warn!(input = %text, "Unparseable swap amount, quoting zero");
                let direction = self.direction_from(token_in)?;
                Ok(self.swap_quote(reserves, direction, TokenAmount::zero()))
            }
            other => other,
        }
    }

    /// Takes one snapshot from `reader` and quotes against it.
    pub fn quote_swap_from<R: ReserveReader + ?Sized>(
        &self,
        reader: &R,
        token_in: &Token,
        amount_in: &str,
    ) -> Result<SwapQuote, QuoteError> {
        let reserves = reader.reserves()?;
        self.quote_swap(&reserves, token_in, amount_in)
    }

    /// Quotes the input needed to receive `amount_out` of `token_out`.
    pub fn quote_swap_exact_output(
        &self,
        reserves: &ReserveState,
        token_out: &Token,
        amount_out: &str,
    ) -> Result<ExactOutputQuote, QuoteError> {
        let direction = self.direction_from(token_out)?.reversed();
        let decimals = self.tokens_for(direction).1.decimals;
        let requested_out = parse_amount(amount_out, decimals)?;

        let (reserve_in, reserve_out) = reserves.reserves_for(direction);
        let amount_in = if requested_out.is_zero() {
            TokenAmount::zero()
        } else {
            quote_swap_input(requested_out, reserve_in, reserve_out, self.config.fee)?
        };
        let swap = self.swap_quote(reserves, direction, amount_in);

        debug!(
            token_out = %swap.token_out,
            requested_out = %requested_out,
            amount_in = %amount_in,
            "Quoted exact-output swap"
        );
        Ok(ExactOutputQuote {
            requested_out,
            max_amount_in: max_amount_in(amount_in, self.config.slippage),
            swap,
        })
    }

    /// Quotes a deposit, clamping the desired amounts to the pool ratio.
    pub fn quote_add_liquidity(
        &self,
        reserves: &ReserveState,
        desired_a: &str,
        desired_b: &str,
    ) -> Result<LiquidityQuote, QuoteError> {
        let desired_a = parse_amount(desired_a, self.config.token_a.decimals)?;
        let desired_b = parse_amount(desired_b, self.config.token_b.decimals)?;

        let (amount_a, amount_b) =
            optimal_deposit_amounts(desired_a, desired_b, reserves.reserve_a, reserves.reserve_b);
        let lp_tokens_minted = mint_lp_tokens(
            amount_a,
            amount_b,
            reserves.reserve_a,
            reserves.reserve_b,
            reserves.total_lp_supply,
        )?;

        let is_first_deposit = reserves.total_lp_supply.is_zero();
        let share_of_pool_percent = if lp_tokens_minted.is_zero() {
            0.0
        } else if is_first_deposit {
            100.0
        } else {
            let supply_after = reserves.total_lp_supply.0.saturating_add(lp_tokens_minted.0);
            pool_share(lp_tokens_minted, TokenAmount(supply_after))
        };

        let quote = LiquidityQuote {
            token_a: self.config.token_a.clone(),
            token_b: self.config.token_b.clone(),
            desired_a,
            desired_b,
            amount_a,
            amount_b,
            lp_tokens_minted,
            share_of_pool_percent,
            is_first_deposit,
        };
        if quote.was_adjusted() {
            debug!(
                amount_a = %quote.amount_a,
                amount_b = %quote.amount_b,
                "Deposit adjusted to pool ratio"
            );
        }
        Ok(quote)
    }

    /// Quotes burning `lp_amount` LP tokens.
    pub fn quote_remove_liquidity(
        &self,
        reserves: &ReserveState,
        lp_amount: &str,
    ) -> Result<RemovalQuote, QuoteError> {
        let lp_tokens = parse_amount(lp_amount, self.config.lp_decimals)?;
        if lp_tokens > reserves.total_lp_supply {
            return Err(DomainError::InsufficientLiquidity.into());
        }

        let (amount_a, amount_b) = redeem_lp_tokens(
            lp_tokens,
            reserves.reserve_a,
            reserves.reserve_b,
            reserves.total_lp_supply,
        );
        let slippage = self.config.slippage;

        debug!(
            lp_tokens = %lp_tokens,
            amount_a = %amount_a,
            amount_b = %amount_b,
            "Quoted removal"
        );
        Ok(RemovalQuote {
            lp_tokens,
            amount_a,
            amount_b,
            min_amount_a: min_amount_out(amount_a, slippage),
            min_amount_b: min_amount_out(amount_b, slippage),
            share_of_pool_percent: pool_share(lp_tokens, reserves.total_lp_supply),
        })
    }

    /// What `lp_balance` is worth against the snapshot.
    pub fn user_position(&self, reserves: &ReserveState, lp_balance: TokenAmount) -> UserPosition {
        UserPosition::from_reserves(lp_balance, reserves)
    }

    /// Prices, value and formatted reserves of the snapshot.
    pub fn pool_overview(&self, reserves: &ReserveState) -> Result<PoolOverview, QuoteError> {
        let (token_a, token_b) = (&self.config.token_a, &self.config.token_b);
        let price_a_in_b = spot_price(reserves, token_a.decimals, token_b.decimals)?;
        let price_b_in_a = if price_a_in_b.is_zero() {
            Decimal::ZERO
        } else {
            Decimal::ONE.checked_div(price_a_in_b).ok_or_else(|| {
                DomainError::DecimalConversion("inverse price overflow".to_string())
            })?
        };

        Ok(PoolOverview {
            token_a: token_a.clone(),
            token_b: token_b.clone(),
            reserve_a: format_amount(reserves.reserve_a, token_a.decimals, DISPLAY_PRECISION),
            reserve_b: format_amount(reserves.reserve_b, token_b.decimals, DISPLAY_PRECISION),
            total_lp_supply: format_amount(
                reserves.total_lp_supply,
                self.config.lp_decimals,
                DISPLAY_PRECISION,
            ),
            price_a_in_b,
            price_b_in_a,
            value_in_b: pool_value_in_b(reserves, token_a.decimals, token_b.decimals)?,
            fee_percent: self.config.fee.as_percent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::StaticReserves;
    use campswap_domain::call::DexCall;
    use rust_decimal_macros::dec;

    const E18: u128 = 1_000_000_000_000_000_000;
    const SUPPLY: u128 = 1_414_213_562_373_095_048;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(DexConfig::default()).unwrap()
    }

    /// 1,000,000 CAMP against 2,000,000 USDC.
    fn pool() -> ReserveState {
        ReserveState::new(
            TokenAmount::from(1_000_000 * E18),
            TokenAmount::from(2_000_000_000_000u64),
            TokenAmount::from(SUPPLY),
        )
        .unwrap()
    }

    fn camp(engine: &QuoteEngine) -> Token {
        engine.config().token_a.clone()
    }

    fn usdc(engine: &QuoteEngine) -> Token {
        engine.config().token_b.clone()
    }

    #[test]
    fn test_camp_to_usdc_quote() {
        let engine = engine();
        let quote = engine.quote_swap(&pool(), &camp(&engine), "1000").unwrap();

        assert_eq!(quote.direction, SwapDirection::AToB);
        assert_eq!(quote.amount_in, TokenAmount::from(1000 * E18));
        assert_eq!(quote.amount_out, TokenAmount::from(1_992_013_962u64));
        assert_eq!(quote.fee_amount, TokenAmount::from(3 * E18));
        assert_eq!(quote.min_amount_out, TokenAmount::from(1_982_053_892u64));
        assert!((quote.price_impact_percent - 0.1994).abs() < 0.001);

        assert_eq!(
            quote.to_call(),
            Some(DexCall::SwapAForB {
                amount_in: TokenAmount::from(1000 * E18),
                min_amount_out: TokenAmount::from(1_982_053_892u64),
            })
        );
    }

    #[test]
    fn test_usdc_to_camp_uses_reversed_reserves() {
        let engine = engine();
        let quote = engine.quote_swap(&pool(), &usdc(&engine), "2000").unwrap();
        assert_eq!(quote.direction, SwapDirection::BToA);
        assert_eq!(quote.token_out.symbol, "CAMP");
        assert_eq!(quote.amount_in, TokenAmount::from(2_000_000_000u64));
        // Roughly 997 CAMP at a price of 2 USDC.
        assert!(quote.amount_out > TokenAmount::from(990 * E18));
        assert!(quote.amount_out < TokenAmount::from(1000 * E18));
    }

    #[test]
    fn test_token_matching_ignores_case() {
        let engine = engine();
        let mut lower = camp(&engine);
        lower.address = lower.address.to_lowercase();
        let quote = engine.quote_swap(&pool(), &lower, "1").unwrap();
        assert_eq!(quote.direction, SwapDirection::AToB);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let engine = engine();
        let other = Token::new("0xdead", "ETH", 18, "Ether");
        let err = engine.quote_swap(&pool(), &other, "1").unwrap_err();
        assert!(matches!(err, QuoteError::UnknownToken(_)));
        assert!(engine.token("ETH").is_err());
    }

    #[test]
    fn test_empty_pool_quotes_zero() {
        let engine = engine();
        let quote = engine
            .quote_swap(&ReserveState::empty(), &camp(&engine), "5")
            .unwrap();
        assert!(quote.amount_out.is_zero());
        assert_eq!(quote.price_impact_percent, 0.0);
        assert!(quote.to_call().is_none());
    }

    #[test]
    fn test_malformed_amount() {
        let engine = engine();
        let err = engine.quote_swap(&pool(), &camp(&engine), "1.2.3").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Domain(DomainError::InvalidAmountFormat(_))
        ));

        let quote = engine
            .quote_swap_or_zero(&pool(), &camp(&engine), "1.2.3")
            .unwrap();
        assert!(quote.amount_in.is_zero());
        assert!(quote.amount_out.is_zero());
        assert!(!quote.is_executable());
    }

    #[test]
    fn test_quote_from_reader() {
        let engine = engine();
        let reader = StaticReserves::new(pool());
        let quote = engine.quote_swap_from(&reader, &camp(&engine), "1000").unwrap();
        assert_eq!(quote.amount_out, TokenAmount::from(1_992_013_962u64));
    }

    #[test]
    fn test_exact_output_quote() {
        let engine = engine();
        let quote = engine
            .quote_swap_exact_output(&pool(), &usdc(&engine), "1000")
            .unwrap();

        assert_eq!(quote.requested_out, TokenAmount::from(1_000_000_000u64));
        assert_eq!(quote.swap.direction, SwapDirection::AToB);
        assert_eq!(
            quote.swap.amount_in,
            TokenAmount::from(501_755_391_236_239_985_590u128)
        );
        assert_eq!(quote.swap.amount_out, TokenAmount::from(1_000_000_000u64));
        assert_eq!(
            quote.max_amount_in,
            TokenAmount::from(504_264_168_192_421_185_518u128)
        );
    }

    #[test]
    fn test_exact_output_beyond_reserves() {
        let engine = engine();
        let err = engine
            .quote_swap_exact_output(&pool(), &usdc(&engine), "2000000")
            .unwrap_err();
        assert_eq!(err, QuoteError::Domain(DomainError::InsufficientLiquidity));
    }

    #[test]
    fn test_add_liquidity_adjusts_to_ratio() {
        let engine = engine();
        let quote = engine.quote_add_liquidity(&pool(), "100", "300").unwrap();

        assert_eq!(quote.amount_a, TokenAmount::from(100 * E18));
        assert_eq!(quote.amount_b, TokenAmount::from(200_000_000u64));
        assert!(quote.was_adjusted());
        assert!(!quote.is_first_deposit);
        assert_eq!(quote.lp_tokens_minted, TokenAmount::from(141_421_356_237_309u64));
        assert!((quote.share_of_pool_percent - 0.01).abs() < 1e-4);
    }

    #[test]
    fn test_first_deposit() {
        let engine = engine();
        let quote = engine
            .quote_add_liquidity(&ReserveState::empty(), "1", "2")
            .unwrap();

        assert!(quote.is_first_deposit);
        assert!(!quote.was_adjusted());
        assert_eq!(quote.lp_tokens_minted, TokenAmount::from(1_414_213_562_373u64));
        assert_eq!(quote.share_of_pool_percent, 100.0);
        assert!(quote.to_call().is_some());
    }

    #[test]
    fn test_first_deposit_without_mint_has_no_share() {
        let engine = engine();
        let quote = engine
            .quote_add_liquidity(&ReserveState::empty(), "0", "5")
            .unwrap();

        assert!(quote.is_first_deposit);
        assert!(quote.lp_tokens_minted.is_zero());
        assert_eq!(quote.share_of_pool_percent, 0.0);
        assert!(quote.to_call().is_none());
    }

    #[test]
    fn test_remove_liquidity() {
        let engine = engine();
        let quote = engine.quote_remove_liquidity(&pool(), "0.1").unwrap();

        assert_eq!(quote.lp_tokens, TokenAmount::from(E18 / 10));
        assert_eq!(
            quote.amount_a,
            TokenAmount::from(70_710_678_118_654_752_480_168u128)
        );
        assert_eq!(quote.amount_b, TokenAmount::from(141_421_356_237u64));
        assert_eq!(
            quote.min_amount_b,
            min_amount_out(quote.amount_b, engine.config().slippage)
        );
        assert!((quote.share_of_pool_percent - 7.0711).abs() < 1e-3);
        assert_eq!(
            quote.to_call(),
            Some(DexCall::RemoveLiquidity {
                lp_amount: TokenAmount::from(E18 / 10)
            })
        );
    }

    #[test]
    fn test_remove_more_than_supply() {
        let engine = engine();
        let err = engine.quote_remove_liquidity(&pool(), "2").unwrap_err();
        assert_eq!(err, QuoteError::Domain(DomainError::InsufficientLiquidity));
    }

    #[test]
    fn test_user_position() {
        let engine = engine();
        let position = engine.user_position(&pool(), TokenAmount::from(SUPPLY / 2));
        assert!((position.share_of_pool_percent - 50.0).abs() < 1e-9);
        assert_eq!(position.underlying_amount_b, TokenAmount::from(1_000_000_000_000u64));
    }

    #[test]
    fn test_pool_overview() {
        let engine = engine();
        let overview = engine.pool_overview(&pool()).unwrap();
        assert_eq!(overview.price_a_in_b, dec!(2));
        assert_eq!(overview.price_b_in_a, dec!(0.5));
        assert_eq!(overview.value_in_b, dec!(4000000));
        assert_eq!(overview.reserve_a, "1000000");
        assert_eq!(overview.total_lp_supply, "1.414213");
        assert_eq!(overview.fee_percent, dec!(0.3));

        let empty = engine.pool_overview(&ReserveState::empty()).unwrap();
        assert_eq!(empty.price_a_in_b, Decimal::ZERO);
        assert_eq!(empty.price_b_in_a, Decimal::ZERO);
    }
}
