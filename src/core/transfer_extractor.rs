use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::config::ParseConfig;
use crate::core::constants::{LAMPORTS_PER_SOL, SOL_MINT};
use crate::core::error::ParserError;
use crate::types::{SolanaTransaction, TokenBalance, TokenTransfer, TransferDirection};

/// Compute the net per-(account, mint) balance deltas of a transaction and
/// classify each as an inbound or outbound transfer.
///
/// Failed transactions (`meta.err` set) yield an empty list. Deltas within
/// `config.dust_epsilon` of zero are suppressed. Output order is
/// deterministic: pre-balance entries first, then newly created token
/// accounts, then the optional native SOL leg of the fee payer.
pub fn extract_transfers(
    tx: &SolanaTransaction,
    config: &ParseConfig,
) -> Result<Vec<TokenTransfer>, ParserError> {
    if tx.is_failed() {
        tracing::debug!(signature = %tx.signature, "skipping failed transaction");
        return Ok(Vec::new());
    }

    let pre_balances = &tx.meta.pre_token_balances;
    let post_balances = &tx.meta.post_token_balances;

    let mut post_map: FxHashMap<(usize, &str), &TokenBalance> =
        FxHashMap::with_capacity_and_hasher(post_balances.len(), Default::default());
    for balance in post_balances {
        post_map.insert((balance.account_index, balance.mint.as_str()), balance);
    }

    let mut transfers = Vec::new();
    let mut processed: FxHashSet<(usize, &str)> =
        FxHashSet::with_capacity_and_hasher(pre_balances.len(), Default::default());

    for pre in pre_balances {
        let key = (pre.account_index, pre.mint.as_str());
        processed.insert(key);

        // A missing post entry means the token account was closed.
        let post_amount = post_map.get(&key).map(|post| post.ui_amount()).unwrap_or(0.0);
        let delta = post_amount - pre.ui_amount();
        if delta.abs() <= config.dust_epsilon {
            continue;
        }

        transfers.push(balance_transfer(pre, delta, config)?);
    }

    // Entries only present post-transaction are newly created accounts;
    // their whole balance arrived in this transaction.
    for post in post_balances {
        let key = (post.account_index, post.mint.as_str());
        if processed.contains(&key) {
            continue;
        }
        let amount = post.ui_amount();
        if amount <= config.dust_epsilon {
            continue;
        }
        transfers.push(balance_transfer(post, amount, config)?);
    }

    if config.include_sol_transfers {
        if let Some(transfer) = native_sol_transfer(tx, config) {
            transfers.push(transfer);
        }
    }

    tracing::debug!(
        signature = %tx.signature,
        transfers = transfers.len(),
        "extracted transfers"
    );
    Ok(transfers)
}

fn balance_transfer(
    balance: &TokenBalance,
    delta: f64,
    config: &ParseConfig,
) -> Result<TokenTransfer, ParserError> {
    let address = balance
        .owner
        .clone()
        .ok_or_else(|| ParserError::MissingOwner {
            account_index: balance.account_index,
            mint: balance.mint.clone(),
        })?;

    Ok(TokenTransfer {
        address,
        amount: delta.abs(),
        token: symbol_for(&balance.mint, config),
        mint: balance.mint.clone(),
        direction: if delta > 0.0 {
            TransferDirection::In
        } else {
            TransferDirection::Out
        },
    })
}

/// Fee-adjusted native balance delta of the fee payer. Token-balance
/// fields never capture wrapped/unwrapped SOL movement, so it is derived
/// from the lamport arrays instead.
fn native_sol_transfer(tx: &SolanaTransaction, config: &ParseConfig) -> Option<TokenTransfer> {
    let pre = *tx.meta.pre_balances.first()?;
    let post = *tx.meta.post_balances.first()?;
    let fee_payer = tx.fee_payer()?;

    let delta_lamports = post as i128 + tx.meta.fee as i128 - pre as i128;
    let delta = delta_lamports as f64 / LAMPORTS_PER_SOL;
    if delta.abs() <= config.dust_epsilon {
        return None;
    }

    Some(TokenTransfer {
        address: fee_payer.to_string(),
        amount: delta.abs(),
        token: "SOL".to_string(),
        mint: SOL_MINT.to_string(),
        direction: if delta > 0.0 {
            TransferDirection::In
        } else {
            TransferDirection::Out
        },
    })
}

fn symbol_for(mint: &str, config: &ParseConfig) -> String {
    if let Some(symbol) = config.token_symbols.get(mint) {
        return symbol.clone();
    }
    let prefix: String = mint.chars().take(8).collect();
    format!("{prefix}...")
}
