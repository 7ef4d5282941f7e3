use serde::{Deserialize, Serialize};

/// Representation of a raw token amount and its UI value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub amount: String,
    #[serde(default)]
    pub ui_amount: Option<f64>,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(amount: impl Into<String>, decimals: u8, ui_amount: Option<f64>) -> Self {
        Self {
            amount: amount.into(),
            ui_amount,
            decimals,
        }
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        Self {
            amount: "0".to_string(),
            ui_amount: Some(0.0),
            decimals: 9,
        }
    }
}

/// Snapshot of one account's balance of one mint, from transaction meta.
/// Keyed by `(accountIndex, mint)`; unique within a pre or post set.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub account_index: usize,
    pub mint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(rename = "uiTokenAmount")]
    pub ui_token_amount: TokenAmount,
}

impl TokenBalance {
    pub fn ui_amount(&self) -> f64 {
        self.ui_token_amount.ui_amount.unwrap_or(0.0)
    }
}

/// Transaction meta mirroring the Solana RPC payload. Everything is
/// defaulted so partial payloads still deserialize.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub pre_balances: Vec<u64>,
    #[serde(default)]
    pub post_balances: Vec<u64>,
    #[serde(default)]
    pub pre_token_balances: Vec<TokenBalance>,
    #[serde(default)]
    pub post_token_balances: Vec<TokenBalance>,
}

/// Simplified transaction representation consumed by the parser.
/// The first account key is the fee payer / initiator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolanaTransaction {
    pub slot: u64,
    pub signature: String,
    #[serde(default)]
    pub block_time: u64,
    #[serde(default)]
    pub account_keys: Vec<String>,
    #[serde(default)]
    pub meta: TransactionMeta,
}

impl SolanaTransaction {
    pub fn is_failed(&self) -> bool {
        self.meta.err.is_some()
    }

    pub fn fee_payer(&self) -> Option<&str> {
        self.account_keys.first().map(String::as_str)
    }
}

/// Block representation for batch parsing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolanaBlock {
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<u64>,
    #[serde(default)]
    pub transactions: Vec<SolanaTransaction>,
}

/// Direction of a transfer from the owning account's perspective.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    In,
    Out,
}

/// A derived, immutable balance-change fact. `amount` is the absolute
/// value of the delta; the sign is carried by `direction`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub address: String,
    pub amount: f64,
    pub token: String,
    pub mint: String,
    #[serde(rename = "type")]
    pub direction: TransferDirection,
}

impl TokenTransfer {
    pub fn is_inbound(&self) -> bool {
        self.direction == TransferDirection::In
    }

    pub fn is_outbound(&self) -> bool {
        self.direction == TransferDirection::Out
    }
}

/// Pairing of exactly one program-side in-transfer and one program-side
/// out-transfer, attributed to the non-program account.
///
/// Direction is the trader's: `token_in` is what the trader spent (the
/// program's out-leg), `token_out` is what the trader received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    pub token_in: TokenTransfer,
    pub token_out: TokenTransfer,
    pub trader: String,
}

/// Outcome of swap matching. `NoSwap` and `Ambiguous` are valid results,
/// not errors: the transaction just isn't a simple single-hop swap.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SwapMatch {
    Matched(Swap),
    Ambiguous { ins: usize, outs: usize },
    NoSwap,
}

impl SwapMatch {
    pub fn swap(&self) -> Option<&Swap> {
        match self {
            SwapMatch::Matched(swap) => Some(swap),
            _ => None,
        }
    }

    pub fn into_swap(self) -> Option<Swap> {
        match self {
            SwapMatch::Matched(swap) => Some(swap),
            _ => None,
        }
    }
}

/// Per-transaction parse result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSwaps {
    pub signature: String,
    pub transfers: Vec<TokenTransfer>,
    pub swap: SwapMatch,
}

/// Flattened swap row matching the ingestion table columns. Uniqueness
/// (insert-if-absent on the signature) is the consumer's concern.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SwapRecord {
    pub transaction_signature: String,
    pub block_number: u64,
    pub block_time: u64,
    pub owner_address: String,
    pub in_token_mint: String,
    pub in_token_amount: f64,
    pub out_token_mint: String,
    pub out_token_amount: f64,
}

/// Block-level parse result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockSwaps {
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<u64>,
    pub swaps: Vec<SwapRecord>,
}
