use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::constants::{default_token_symbols, raydium_programs};

/// Configuration injected into the parser. Program ids and the symbol
/// table are plain data, not module state, so callers can swap them out
/// per invocation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParseConfig {
    /// DEX program accounts whose transfer legs belong to the exchange
    /// rather than the trader.
    #[serde(default = "ParseConfig::default_program_ids")]
    pub program_ids: Vec<String>,
    /// Mint address to display-symbol table. Unknown mints fall back to a
    /// truncated address.
    #[serde(default = "ParseConfig::default_token_symbols")]
    pub token_symbols: HashMap<String, String>,
    /// Balance deltas with absolute value at or below this threshold are
    /// treated as no change. One policy for token and native legs alike.
    #[serde(default = "ParseConfig::default_dust_epsilon")]
    pub dust_epsilon: f64,
    /// Emit the fee-adjusted native SOL leg of the fee payer.
    #[serde(default = "ParseConfig::default_include_sol_transfers")]
    pub include_sol_transfers: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            program_ids: Self::default_program_ids(),
            token_symbols: Self::default_token_symbols(),
            dust_epsilon: Self::default_dust_epsilon(),
            include_sol_transfers: Self::default_include_sol_transfers(),
        }
    }
}

impl ParseConfig {
    fn default_program_ids() -> Vec<String> {
        raydium_programs::ALL.iter().map(|id| id.to_string()).collect()
    }

    fn default_token_symbols() -> HashMap<String, String> {
        default_token_symbols()
            .iter()
            .map(|(mint, symbol)| (mint.to_string(), symbol.to_string()))
            .collect()
    }

    const fn default_dust_epsilon() -> f64 {
        1e-6
    }

    const fn default_include_sol_transfers() -> bool {
        true
    }

    pub fn is_program_address(&self, address: &str) -> bool {
        self.program_ids.iter().any(|id| id == address)
    }
}
