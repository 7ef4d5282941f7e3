//! Core library entry point exposing the swap parser and public data types.

pub mod config;
pub mod core;
pub mod price;
pub mod types;

pub use crate::config::ParseConfig;
pub use crate::core::error::ParserError;
pub use crate::core::swap_matcher::match_swap;
pub use crate::core::swap_parser::SwapParser;
pub use crate::core::transfer_extractor::extract_transfers;
pub use crate::price::{parse_sqrt_x96, price_to_sqrt_x96, sqrt_x96_to_price, PriceQuote};
pub use crate::types::{
    BlockSwaps, SolanaBlock, SolanaTransaction, Swap, SwapMatch, SwapRecord, TokenAmount,
    TokenBalance, TokenTransfer, TransactionMeta, TransactionSwaps, TransferDirection,
};
