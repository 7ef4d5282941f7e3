pub mod raydium_programs {
    pub const LIQUIDITY_POOL_V4: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";
    pub const LIQUIDITY_POOL_V3: &str = "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1";
    pub const AMM: &str = "9HzJyW1qZsEiSfMUf6L2jo3CcTKAyBmSyKdwQeYisHrC";

    pub const ALL: &[&str] = &[LIQUIDITY_POOL_V4, LIQUIDITY_POOL_V3, AMM];
}

/// Native SOL sentinel mint (wrapped SOL). The fee payer's native leg is
/// reported under this mint since token-balance fields never capture it.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

pub const LAMPORTS_PER_SOL: f64 = 1e9;

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TOKEN_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC");
    map.insert("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", "USDT");
    map.insert(SOL_MINT, "SOL");
    map.insert("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", "BONK");
    map.insert("7i5KKsX2weiTkry7jA4ZwSuXGhs5eJBEjY8vVxR4pfRx", "GMT");
    map.insert("AFbX8oGjGpmVFywbVouvhQSRmiW2aR1mohfahi4Y2AdB", "GST");
    map.insert("mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So", "mSOL");
    map.insert("4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", "RAY");
    map
});

pub fn default_token_symbols() -> &'static HashMap<&'static str, &'static str> {
    &TOKEN_SYMBOLS
}
