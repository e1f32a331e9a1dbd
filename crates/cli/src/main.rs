//! Command Line Interface for the CampSwap quoting engine.
use anyhow::{Context, Result};
use campswap_domain::call::DexCall;
use campswap_domain::math::fixed_point::{format_amount, parse_amount};
use campswap_domain::metrics::fees::calculate_apr;
use campswap_domain::pool::ReserveState;
use campswap_domain::token::{Token, TokenAmount};
use campswap_quoting::{DexConfig, QuoteEngine, ReserveReader, StaticReserves};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use prettytable::{Table, row};
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fraction digits printed for token amounts.
const PRECISION: u8 = 6;

#[derive(Parser)]
#[command(name = "campswap")]
#[command(about = "Quote swaps and liquidity changes on a CAMP/USDC pool", long_about = None)]
struct Cli {
    /// JSON configuration file; defaults to CAMPSWAP_* environment variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raw token A reserve, in smallest units
    #[arg(long, global = true, default_value = "0")]
    reserve_a: String,

    /// Raw token B reserve, in smallest units
    #[arg(long, global = true, default_value = "0")]
    reserve_b: String,

    /// Raw total LP supply, in smallest units
    #[arg(long, global = true, default_value = "0")]
    supply: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote selling an exact amount
    Swap {
        /// Token sold, by symbol or address
        #[arg(long)]
        from: String,

        /// Amount sold, e.g. 1000 or 0.5
        amount: String,
    },
    /// Quote buying an exact amount
    SwapExactOut {
        /// Token bought, by symbol or address
        #[arg(long)]
        to: String,

        /// Amount bought
        amount: String,
    },
    /// Quote a deposit of both tokens
    AddLiquidity {
        /// Desired token A amount
        amount_a: String,

        /// Desired token B amount
        amount_b: String,
    },
    /// Quote burning LP tokens
    RemoveLiquidity {
        /// LP tokens to burn
        lp_amount: String,
    },
    /// Show what an LP balance is worth
    Position {
        /// LP token balance
        lp_balance: String,
    },
    /// Show pool prices and reserves
    Pool {
        /// Daily volume in token B, to estimate the fee APR
        #[arg(long)]
        daily_volume: Option<Decimal>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DexConfig::from_json_file(path)?,
        None => DexConfig::from_env()?,
    };
    info!(dex = %config.dex_address, fee = %config.fee.as_percent(), "Loaded configuration");

    let reader = StaticReserves::from_raw(
        raw_amount(&cli.reserve_a).context("--reserve-a")?,
        raw_amount(&cli.reserve_b).context("--reserve-b")?,
        raw_amount(&cli.supply).context("--supply")?,
    )?;
    let reserves = reader.reserves()?;
    let engine = QuoteEngine::new(config)?;
    let token_a = engine.config().token_a.clone();
    let token_b = engine.config().token_b.clone();

    match &cli.command {
        Commands::Swap { from, amount } => {
            let token_in = engine.token(from)?.clone();
            let quote = engine.quote_swap_from(&reader, &token_in, amount)?;
            if cli.json {
                return print_json(&quote);
            }

            let mut table = Table::new();
            table.add_row(row!["You pay", show(quote.amount_in, &quote.token_in)]);
            table.add_row(row!["You receive", show(quote.amount_out, &quote.token_out)]);
            table.add_row(row!["Minimum received", show(quote.min_amount_out, &quote.token_out)]);
            table.add_row(row!["Fee", show(quote.fee_amount, &quote.token_in)]);
            table.add_row(row!["Price impact", percent(quote.price_impact_percent)]);
            table.printstd();
            print_call(quote.to_call());
        }
        Commands::SwapExactOut { to, amount } => {
            let token_out = engine.token(to)?.clone();
            let quote = engine.quote_swap_exact_output(&reserves, &token_out, amount)?;
            if cli.json {
                return print_json(&quote);
            }

            let swap = &quote.swap;
            let mut table = Table::new();
            table.add_row(row!["You receive", show(swap.amount_out, &swap.token_out)]);
            table.add_row(row!["You pay", show(swap.amount_in, &swap.token_in)]);
            table.add_row(row!["Maximum paid", show(quote.max_amount_in, &swap.token_in)]);
            table.add_row(row!["Fee", show(swap.fee_amount, &swap.token_in)]);
            table.add_row(row!["Price impact", percent(swap.price_impact_percent)]);
            table.printstd();
            print_call(swap.to_call());
        }
        Commands::AddLiquidity { amount_a, amount_b } => {
            let quote = engine.quote_add_liquidity(&reserves, amount_a, amount_b)?;
            if cli.json {
                return print_json(&quote);
            }

            if quote.was_adjusted() {
                println!("Amounts adjusted to the pool ratio.");
            }
            let lp_decimals = engine.config().lp_decimals;
            let mut table = Table::new();
            table.add_row(row!["Deposit", show(quote.amount_a, &token_a)]);
            table.add_row(row!["Deposit", show(quote.amount_b, &token_b)]);
            let minted = format_amount(quote.lp_tokens_minted, lp_decimals, PRECISION);
            table.add_row(row!["LP tokens", minted]);
            table.add_row(row!["Pool share", percent(quote.share_of_pool_percent)]);
            table.add_row(row!["First deposit", quote.is_first_deposit]);
            table.printstd();
            print_call(quote.to_call());
        }
        Commands::RemoveLiquidity { lp_amount } => {
            let quote = engine.quote_remove_liquidity(&reserves, lp_amount)?;
            if cli.json {
                return print_json(&quote);
            }

            let mut table = Table::new();
            table.add_row(row!["Receive", show(quote.amount_a, &token_a)]);
            table.add_row(row!["Receive", show(quote.amount_b, &token_b)]);
            table.add_row(row!["Minimum", show(quote.min_amount_a, &token_a)]);
            table.add_row(row!["Minimum", show(quote.min_amount_b, &token_b)]);
            table.add_row(row!["Pool share", percent(quote.share_of_pool_percent)]);
            table.printstd();
            print_call(quote.to_call());
        }
        Commands::Position { lp_balance } => {
            let balance = parse_amount(lp_balance, engine.config().lp_decimals)?;
            let position = engine.user_position(&reserves, balance);
            if cli.json {
                return print_json(&position);
            }

            let mut table = Table::new();
            table.add_row(row!["Pool share", percent(position.share_of_pool_percent)]);
            table.add_row(row!["Underlying", show(position.underlying_amount_a, &token_a)]);
            table.add_row(row!["Underlying", show(position.underlying_amount_b, &token_b)]);
            table.printstd();
        }
        Commands::Pool { daily_volume } => {
            let overview = engine.pool_overview(&reserves)?;
            if cli.json {
                return print_json(&overview);
            }
            print_overview(&reserves, &overview);
            if let Some(volume) = daily_volume {
                let apr = calculate_apr(overview.value_in_b, *volume, engine.config().fee);
                println!("Estimated fee APR: {}%", apr.round_dp(2));
            }
        }
    }

    Ok(())
}

fn raw_amount(value: &str) -> Result<TokenAmount> {
    U256::from_dec_str(value.trim())
        .map(TokenAmount)
        .map_err(|e| anyhow::anyhow!("not a raw integer amount: {value} ({e:?})"))
}

fn show(amount: TokenAmount, token: &Token) -> String {
    format!("{} {}", format_amount(amount, token.decimals, PRECISION), token.symbol)
}

fn percent(value: f64) -> String {
    format!("{value:.4}%")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_call(call: Option<DexCall>) {
    match call {
        Some(call) => {
            let args: Vec<String> = call.args().iter().map(ToString::to_string).collect();
            println!("Call: {}({})", call.function_name(), args.join(", "));
        }
        None => println!("Nothing to submit."),
    }
}

fn print_overview(reserves: &ReserveState, overview: &campswap_quoting::PoolOverview) {
    if !reserves.is_seeded() {
        println!("Pool has no liquidity yet.");
        return;
    }
    let (a, b) = (&overview.token_a.symbol, &overview.token_b.symbol);
    let mut table = Table::new();
    table.add_row(row![format!("{a} reserve"), overview.reserve_a]);
    table.add_row(row![format!("{b} reserve"), overview.reserve_b]);
    table.add_row(row!["LP supply", overview.total_lp_supply]);
    let price_a = overview.price_a_in_b.round_dp(PRECISION.into());
    let price_b = overview.price_b_in_a.round_dp(PRECISION.into());
    table.add_row(row![format!("1 {a}"), format!("{price_a} {b}")]);
    table.add_row(row![format!("1 {b}"), format!("{price_b} {a}")]);
    table.add_row(row!["Pool value", format!("{} {b}", overview.value_in_b.round_dp(2))]);
    table.add_row(row!["Fee", format!("{}%", overview.fee_percent)]);
    table.printstd();
}
