//! Wallet token aggregation
//!
//! Folds a newest-first sample of ERC-20 transfer records into net holdings
//! per token contract. The sample is bounded (50 records), so the balances
//! are a display approximation of recent activity, not an on-chain ledger
//! statement - groups that net to zero or negative are simply not shown.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::amounts;
use crate::apis::etherscan::types::TransferRecord;
use crate::logger::{self, LogTag};
use crate::validate::{addresses_equal, normalize_address};

/// At most this many records from the transfer history contribute
pub const MAX_TRANSFER_SAMPLE: usize = 50;

/// At most this many holdings survive to display
pub const MAX_HOLDINGS: usize = 10;

/// Net position in one token contract, derived from the transfer sample
///
/// Constructed fresh per wallet lookup and discarded on the next one.
#[derive(Debug, Clone)]
pub struct TokenHolding {
    /// Contract address in the casing of the first record seen
    pub contract_address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    /// Signed raw balance: received minus sent, in base units
    pub balance_raw: i128,
    /// Contributing records, newest first
    pub records: Vec<TransferRecord>,
}

impl TokenHolding {
    /// Balance formatted to 6 decimal places, exact arithmetic throughout
    pub fn balance_display(&self) -> String {
        amounts::format_amount(self.balance_raw, self.decimals)
    }
}

/// Aggregate transfer records into displayable holdings
///
/// - direction: `to == wallet` (case-insensitive) is a credit, anything
///   else a debit
/// - grouped by lower-cased contract address, first-appearance order
///   preserved (input is newest-first, so first appearance = most recent)
/// - groups netting to zero or below are dropped, then the list is
///   truncated to [`MAX_HOLDINGS`]
///
/// Pure function of its input; calling it twice on the same records yields
/// the same holdings.
pub fn aggregate_holdings(wallet: &str, records: &[TransferRecord]) -> Vec<TokenHolding> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, TokenHolding> = HashMap::new();

    for record in records.iter().take(MAX_TRANSFER_SAMPLE) {
        let raw = match amounts::parse_raw(&record.value) {
            Ok(v) => v,
            Err(e) => {
                logger::warning(
                    LogTag::Wallet,
                    &format!("Skipping transfer {}: {}", record.hash, e),
                );
                continue;
            }
        };

        let is_receive = addresses_equal(&record.to, wallet);
        let signed = if is_receive { raw } else { -raw };

        let key = normalize_address(&record.contract_address);
        match groups.entry(key) {
            Entry::Occupied(mut entry) => {
                let holding = entry.get_mut();
                holding.balance_raw = holding.balance_raw.saturating_add(signed);
                holding.records.push(record.clone());
            }
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(TokenHolding {
                    contract_address: record.contract_address.clone(),
                    name: record.token_name.clone(),
                    symbol: record.token_symbol.clone(),
                    decimals: record.decimals(),
                    balance_raw: signed,
                    records: vec![record.clone()],
                });
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|holding| holding.balance_raw > 0)
        .take(MAX_HOLDINGS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
    const OTHER: &str = "0x28c6c06298d514db089934071355e5743bf21d60";

    fn record(contract: &str, from: &str, to: &str, value: &str, decimals: &str) -> TransferRecord {
        TransferRecord {
            block_number: "19876543".to_string(),
            time_stamp: "1715000000".to_string(),
            hash: format!("0xhash{}{}", contract.len(), value),
            from: from.to_string(),
            contract_address: contract.to_string(),
            to: to.to_string(),
            value: value.to_string(),
            token_name: "Test Token".to_string(),
            token_symbol: "TST".to_string(),
            token_decimal: decimals.to_string(),
        }
    }

    fn contract(i: usize) -> String {
        format!("0x{:040x}", i + 1)
    }

    #[test]
    fn test_balance_sign_correctness() {
        // Receive 10.00, send 5.00 -> net 5.00
        let records = vec![
            record(&contract(0), OTHER, WALLET, "1000", "2"),
            record(&contract(0), WALLET, OTHER, "500", "2"),
        ];

        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance_raw, 500);
        assert_eq!(holdings[0].balance_display(), "5.000000");
        assert_eq!(holdings[0].records.len(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![
            record(&contract(0), OTHER, WALLET, "1000", "2"),
            record(&contract(1), OTHER, WALLET, "7", "0"),
            record(&contract(0), WALLET, OTHER, "250", "2"),
        ];

        let first = aggregate_holdings(WALLET, &records);
        let second = aggregate_holdings(WALLET, &records);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.contract_address, b.contract_address);
            assert_eq!(a.balance_raw, b.balance_raw);
        }
    }

    #[test]
    fn test_direction_matches_queried_address_case_insensitively() {
        let records = vec![record(
            &contract(0),
            OTHER,
            &WALLET.to_uppercase().replace("0X", "0x"),
            "100",
            "2",
        )];
        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance_raw, 100);
    }

    #[test]
    fn test_grouping_key_is_case_insensitive() {
        let c = contract(10);
        let records = vec![
            record(&c.to_uppercase().replacen("0X", "0x", 1), OTHER, WALLET, "60", "2"),
            record(&c, OTHER, WALLET, "40", "2"),
        ];
        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance_raw, 100);
    }

    #[test]
    fn test_zero_and_negative_balances_filtered() {
        let records = vec![
            // Nets to exactly zero
            record(&contract(0), OTHER, WALLET, "100", "2"),
            record(&contract(0), WALLET, OTHER, "100", "2"),
            // Nets negative (sample missed the original receive)
            record(&contract(1), WALLET, OTHER, "300", "2"),
            // Stays positive
            record(&contract(2), OTHER, WALLET, "42", "2"),
        ];

        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(
            normalize_address(&holdings[0].contract_address),
            contract(2)
        );
    }

    #[test]
    fn test_truncates_to_ten_by_first_appearance() {
        // 15 distinct contracts, all positive, newest first
        let records: Vec<TransferRecord> = (0..15)
            .map(|i| record(&contract(i), OTHER, WALLET, "1000", "2"))
            .collect();

        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), MAX_HOLDINGS);
        // Selection follows record order of first appearance
        for (i, holding) in holdings.iter().enumerate() {
            assert_eq!(normalize_address(&holding.contract_address), contract(i));
        }
    }

    #[test]
    fn test_sample_bounded_to_fifty_records() {
        // 51 receives of 1 unit each to distinct-but-same contract
        let records: Vec<TransferRecord> = (0..51)
            .map(|_| record(&contract(0), OTHER, WALLET, "1", "0"))
            .collect();

        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].balance_raw, 50);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let holdings = aggregate_holdings(WALLET, &[]);
        assert!(holdings.is_empty());
    }

    #[test]
    fn test_unparseable_value_skipped_not_fatal() {
        let records = vec![
            record(&contract(0), OTHER, WALLET, "not-a-number", "2"),
            record(&contract(1), OTHER, WALLET, "100", "2"),
        ];
        let holdings = aggregate_holdings(WALLET, &records);
        assert_eq!(holdings.len(), 1);
        assert_eq!(
            normalize_address(&holdings[0].contract_address),
            contract(1)
        );
    }
}
