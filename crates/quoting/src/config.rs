//! Pool configuration.
//!
//! A `DexConfig` is built once at startup (defaults, environment or a JSON
//! file) and handed to the quote engine. Nothing reads the environment
//! after that.

use crate::error::QuoteError;
use campswap_domain::fees::FeeRate;
use campswap_domain::math::slippage::SlippageTolerance;
use campswap_domain::token::Token;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const ENV_DEX_ADDRESS: &str = "CAMPSWAP_DEX_ADDRESS";
pub const ENV_TOKEN_A_ADDRESS: &str = "CAMPSWAP_TOKEN_A_ADDRESS";
pub const ENV_TOKEN_B_ADDRESS: &str = "CAMPSWAP_TOKEN_B_ADDRESS";
pub const ENV_FEE_PERCENT: &str = "CAMPSWAP_FEE_PERCENT";
pub const ENV_SLIPPAGE_PERCENT: &str = "CAMPSWAP_SLIPPAGE_PERCENT";
pub const ENV_REFRESH_SECS: &str = "CAMPSWAP_REFRESH_SECS";

const DEFAULT_DEX_ADDRESS: &str = "0x493185ee6e21b69a6782960E0f35aEEfF2a2F8a2";
const DEFAULT_CAMP_ADDRESS: &str = "0x39b5aC632F550b0f3cD39180c0912e29DBc68De3";
const DEFAULT_USDC_ADDRESS: &str = "0x3DA1769802400490E47C8D20fee171D81c89d208";

/// LP tokens minted by the pool contract carry 18 decimals.
pub const LP_TOKEN_DECIMALS: u8 = 18;

fn default_lp_decimals() -> u8 {
    LP_TOKEN_DECIMALS
}

/// Configuration of a two-token pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexConfig {
    /// Pool contract address.
    pub dex_address: String,
    /// Token A of the pair (CAMP).
    pub token_a: Token,
    /// Token B of the pair (USDC).
    pub token_b: Token,
    /// LP token decimals, used to parse LP amounts typed by users.
    #[serde(default = "default_lp_decimals")]
    pub lp_decimals: u8,
    /// Trading fee charged by the pool.
    #[serde(default)]
    pub fee: FeeRate,
    /// Slippage tolerance applied to transaction bounds.
    #[serde(default)]
    pub slippage: SlippageTolerance,
    /// How often a UI should refresh the reserve snapshot.
    pub refresh_interval_secs: u64,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            dex_address: DEFAULT_DEX_ADDRESS.to_string(),
            token_a: Token::new(DEFAULT_CAMP_ADDRESS, "CAMP", 18, "Campus Coin"),
            token_b: Token::new(DEFAULT_USDC_ADDRESS, "USDC", 6, "Mock USDC"),
            lp_decimals: LP_TOKEN_DECIMALS,
            fee: FeeRate::default(),
            slippage: SlippageTolerance::default(),
            refresh_interval_secs: 15,
        }
    }
}

impl DexConfig {
    /// Builds the configuration from `CAMPSWAP_*` environment variables,
    /// falling back to the deployed CAMP/USDC pool for anything unset.
    pub fn from_env() -> Result<Self, QuoteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuoteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(address) = value(ENV_DEX_ADDRESS) {
            config.dex_address = address;
        }
        if let Some(address) = value(ENV_TOKEN_A_ADDRESS) {
            config.token_a.address = address;
        }
        if let Some(address) = value(ENV_TOKEN_B_ADDRESS) {
            config.token_b.address = address;
        }
        if let Some(fee) = value(ENV_FEE_PERCENT) {
            config.fee = FeeRate::from_percent(parse_percent(ENV_FEE_PERCENT, &fee)?)?;
        }
        if let Some(slippage) = value(ENV_SLIPPAGE_PERCENT) {
            config.slippage =
                SlippageTolerance::from_percent(parse_percent(ENV_SLIPPAGE_PERCENT, &slippage)?)?;
        }
        if let Some(secs) = value(ENV_REFRESH_SECS) {
            config.refresh_interval_secs = secs.trim().parse().map_err(|_| {
                QuoteError::InvalidConfig(format!("{ENV_REFRESH_SECS} is not a number: {secs}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| QuoteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Checks the parameters the quote math relies on.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.fee.permille() >= FeeRate::DENOMINATOR {
            return Err(QuoteError::InvalidConfig(format!(
                "fee must be below 100%, got {}%",
                self.fee.as_percent()
            )));
        }
        if self.slippage.bps() > SlippageTolerance::DENOMINATOR {
            return Err(QuoteError::InvalidConfig(format!(
                "slippage tolerance must not exceed 100%, got {}%",
                self.slippage.as_percent()
            )));
        }
        if self.token_a.is(&self.token_b) {
            return Err(QuoteError::InvalidConfig(format!(
                "token A and token B share the address {}",
                self.token_a.address
            )));
        }
        Ok(())
    }

    /// Looks up one side of the pair by symbol or address, ignoring case.
    pub fn token(&self, symbol_or_address: &str) -> Option<&Token> {
        [&self.token_a, &self.token_b].into_iter().find(|token| {
            token.symbol.eq_ignore_ascii_case(symbol_or_address)
                || token.address.eq_ignore_ascii_case(symbol_or_address)
        })
    }
}

fn parse_percent(key: &str, value: &str) -> Result<Decimal, QuoteError> {
    Decimal::from_str(value.trim())
        .map_err(|_| QuoteError::InvalidConfig(format!("{key} is not a percentage: {value}")))
}
