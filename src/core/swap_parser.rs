use crate::config::ParseConfig;
use crate::core::error::ParserError;
use crate::core::swap_matcher::match_swap;
use crate::core::transfer_extractor::extract_transfers;
use crate::types::{
    BlockSwaps, SolanaBlock, SolanaTransaction, Swap, SwapRecord, TransactionSwaps,
};

/// Stateless orchestrator tying the transfer extractor and swap matcher
/// together. Safe to share across threads and call once per transaction.
pub struct SwapParser {
    config: ParseConfig,
}

impl Default for SwapParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapParser {
    pub fn new() -> Self {
        Self::with_config(ParseConfig::default())
    }

    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Extract transfers and match the swap for one transaction.
    pub fn parse_transaction(
        &self,
        tx: &SolanaTransaction,
    ) -> Result<TransactionSwaps, ParserError> {
        let transfers = extract_transfers(tx, &self.config)?;
        let swap = match_swap(&transfers, &self.config.program_ids);
        Ok(TransactionSwaps {
            signature: tx.signature.clone(),
            transfers,
            swap,
        })
    }

    /// Flatten a matched swap plus transaction metadata into the ingestion
    /// row shape. `in_token_*` is the trader's input, i.e. the program's
    /// out-leg.
    pub fn swap_record(&self, swap: &Swap, tx: &SolanaTransaction) -> SwapRecord {
        SwapRecord {
            transaction_signature: tx.signature.clone(),
            block_number: tx.slot,
            block_time: tx.block_time,
            owner_address: swap.trader.clone(),
            in_token_mint: swap.token_in.mint.clone(),
            in_token_amount: swap.token_in.amount,
            out_token_mint: swap.token_out.mint.clone(),
            out_token_amount: swap.token_out.amount,
        }
    }

    /// Parse every transaction in a block that touches a configured
    /// program, collecting the matched swaps. A malformed transaction is
    /// logged and skipped so one bad record never aborts the batch.
    pub fn parse_block(&self, block: &SolanaBlock) -> BlockSwaps {
        let mut swaps = Vec::new();

        for tx in &block.transactions {
            if tx.is_failed() || !self.involves_program(tx) {
                continue;
            }

            let parsed = match self.parse_transaction(tx) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(signature = %tx.signature, %err, "skipping transaction");
                    continue;
                }
            };

            if let Some(swap) = parsed.swap.swap() {
                swaps.push(self.swap_record(swap, tx));
            }
        }

        tracing::debug!(slot = block.slot, swaps = swaps.len(), "parsed block");
        BlockSwaps {
            slot: block.slot,
            block_time: block.block_time,
            swaps,
        }
    }

    /// Raw JSON entry point for callers holding an undecoded block payload.
    pub fn parse_block_slice(&self, bytes: &[u8]) -> Result<BlockSwaps, ParserError> {
        let block: SolanaBlock = serde_json::from_slice(bytes)
            .map_err(|err| ParserError::InvalidBlock(err.to_string()))?;
        Ok(self.parse_block(&block))
    }

    fn involves_program(&self, tx: &SolanaTransaction) -> bool {
        tx.account_keys
            .iter()
            .any(|key| self.config.is_program_address(key))
    }
}
