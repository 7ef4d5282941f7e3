use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use raydium_swap_parser::{
    parse_sqrt_x96, price_to_sqrt_x96, sqrt_x96_to_price, ParseConfig, SwapParser,
};

#[derive(Parser)]
#[command(name = "swaps", about = "Raydium swap extraction and sqrtPriceX96 conversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a block JSON file and print swap records as JSON lines.
    Block {
        /// Path to a block payload (slot, blockTime, transactions).
        file: PathBuf,
        /// Also print the per-transaction transfer lists.
        #[arg(long)]
        transfers: bool,
    },
    /// Convert a decimal price to its sqrtPriceX96 encoding.
    Encode {
        /// Price as token1 per token0, decimals-adjusted.
        price: f64,
    },
    /// Convert a sqrtPriceX96 value back to a decimal price.
    Decode {
        /// sqrtPriceX96 as a decimal string.
        sqrt_price_x96: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Block { file, transfers } => run_block(&file, transfers),
        Command::Encode { price } => {
            let sqrt = price_to_sqrt_x96(price)?;
            println!("{sqrt}");
            Ok(())
        }
        Command::Decode { sqrt_price_x96 } => {
            let sqrt = parse_sqrt_x96(&sqrt_price_x96)?;
            let quote = sqrt_x96_to_price(sqrt)?;
            println!("price: {}", quote.price);
            println!("inverted: {}", quote.inverted_price);
            Ok(())
        }
    }
}

fn run_block(file: &PathBuf, print_transfers: bool) -> Result<()> {
    let payload = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let parser = SwapParser::with_config(ParseConfig::default());
    let block: raydium_swap_parser::SolanaBlock =
        serde_json::from_slice(&payload).context("failed to decode block JSON")?;

    if print_transfers {
        for tx in &block.transactions {
            if tx.is_failed() {
                continue;
            }
            let parsed = match parser.parse_transaction(tx) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(signature = %tx.signature, %err, "skipping transaction");
                    continue;
                }
            };
            println!("{}", serde_json::to_string(&parsed)?);
        }
    }

    let result = parser.parse_block(&block);
    for record in &result.swaps {
        println!("{}", serde_json::to_string(record)?);
    }
    tracing::info!(slot = result.slot, swaps = result.swaps.len(), "done");
    Ok(())
}
