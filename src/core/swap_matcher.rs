use crate::types::{Swap, SwapMatch, TokenTransfer};

/// Pair the program-side legs of a transaction's transfers into a single
/// logical swap.
///
/// Direction is inverted relative to the DEX program's own perspective:
/// the program's out-transfer is what it sent *to* the trader, so it
/// becomes the trader's `token_in`, and vice versa. Transactions with more
/// than one program-side leg per direction (multi-hop routes) are reported
/// as `Ambiguous` rather than paired arbitrarily.
pub fn match_swap(transfers: &[TokenTransfer], program_ids: &[String]) -> SwapMatch {
    let is_program = |address: &str| program_ids.iter().any(|id| id == address);

    let mut program_in: Option<&TokenTransfer> = None;
    let mut program_out: Option<&TokenTransfer> = None;
    let mut ins = 0usize;
    let mut outs = 0usize;

    for transfer in transfers {
        if !is_program(&transfer.address) {
            continue;
        }
        if transfer.is_inbound() {
            ins += 1;
            program_in.get_or_insert(transfer);
        } else {
            outs += 1;
            program_out.get_or_insert(transfer);
        }
    }

    if ins > 1 || outs > 1 {
        tracing::debug!(ins, outs, "ambiguous swap: multiple program legs per direction");
        return SwapMatch::Ambiguous { ins, outs };
    }

    let (program_in, program_out) = match (program_in, program_out) {
        (Some(i), Some(o)) => (i, o),
        _ => return SwapMatch::NoSwap,
    };

    let trader = match transfers.iter().find(|t| !is_program(&t.address)) {
        Some(transfer) => transfer.address.clone(),
        None => return SwapMatch::NoSwap,
    };

    SwapMatch::Matched(Swap {
        token_in: program_out.clone(),
        token_out: program_in.clone(),
        trader,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransferDirection;

    const DEX: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";

    fn transfer(
        address: &str,
        amount: f64,
        token: &str,
        direction: TransferDirection,
    ) -> TokenTransfer {
        TokenTransfer {
            address: address.to_string(),
            amount,
            token: token.to_string(),
            mint: format!("{token}-mint"),
            direction,
        }
    }

    fn program_ids() -> Vec<String> {
        vec![DEX.to_string()]
    }

    #[test]
    fn single_hop_swap_is_matched() {
        let transfers = vec![
            transfer(DEX, 5.0, "USDC", TransferDirection::Out),
            transfer(DEX, 2.0, "SOL", TransferDirection::In),
            transfer("trader1", 5.0, "USDC", TransferDirection::In),
        ];

        let matched = match_swap(&transfers, &program_ids());
        let swap = matched.swap().expect("expected a matched swap");

        assert_eq!(swap.trader, "trader1");
        // Trader spent what the program sent out, received what flowed in.
        assert_eq!(swap.token_in.token, "USDC");
        assert_eq!(swap.token_in.direction, TransferDirection::Out);
        assert!((swap.token_in.amount - 5.0).abs() < 1e-9);
        assert_eq!(swap.token_out.token, "SOL");
        assert_eq!(swap.token_out.direction, TransferDirection::In);
        assert!((swap.token_out.amount - 2.0).abs() < 1e-9);
    }

    #[test]
    fn no_program_legs_means_no_swap() {
        let transfers = vec![
            transfer("alice", 1.0, "USDC", TransferDirection::Out),
            transfer("bob", 1.0, "USDC", TransferDirection::In),
        ];
        assert_eq!(match_swap(&transfers, &program_ids()), SwapMatch::NoSwap);
    }

    #[test]
    fn one_sided_program_leg_means_no_swap() {
        let transfers = vec![
            transfer(DEX, 5.0, "USDC", TransferDirection::Out),
            transfer("trader1", 5.0, "USDC", TransferDirection::In),
        ];
        assert_eq!(match_swap(&transfers, &program_ids()), SwapMatch::NoSwap);
    }

    #[test]
    fn missing_trader_means_no_swap() {
        let transfers = vec![
            transfer(DEX, 5.0, "USDC", TransferDirection::Out),
            transfer(DEX, 2.0, "SOL", TransferDirection::In),
        ];
        assert_eq!(match_swap(&transfers, &program_ids()), SwapMatch::NoSwap);
    }

    #[test]
    fn multi_hop_is_ambiguous() {
        let transfers = vec![
            transfer(DEX, 5.0, "USDC", TransferDirection::Out),
            transfer(DEX, 2.0, "SOL", TransferDirection::In),
            transfer(DEX, 3.0, "RAY", TransferDirection::Out),
            transfer("trader1", 5.0, "USDC", TransferDirection::In),
        ];
        assert_eq!(
            match_swap(&transfers, &program_ids()),
            SwapMatch::Ambiguous { ins: 1, outs: 2 }
        );
    }

    #[test]
    fn empty_transfers_means_no_swap() {
        assert_eq!(match_swap(&[], &program_ids()), SwapMatch::NoSwap);
    }
}
