//! Wallet lookup flow
//!
//! Issues the holdings fetch and the recent-transactions fetch
//! concurrently and joins them as a unit: if either fails, the whole
//! lookup fails and no partial result escapes. Lookups are serialized by
//! construction - the CLI runs one lookup per invocation and awaits it to
//! completion, so a stale response can never overwrite a newer one.

use crate::apis::etherscan::EtherscanClient;
use crate::errors::TrackerError;
use crate::holdings::{aggregate_holdings, TokenHolding, MAX_TRANSFER_SAMPLE};
use crate::logger::{self, LogTag};
use crate::transactions::{build_recent, TransactionDisplay, MAX_RECENT_TRANSACTIONS};
use crate::validate::{is_valid_eth_address, truncate_address};

/// Result of one wallet lookup
///
/// Replaced wholesale on the next lookup; an empty report is the
/// "no recent activity" state, not an error.
#[derive(Debug, Clone)]
pub struct WalletReport {
    pub address: String,
    pub holdings: Vec<TokenHolding>,
    pub transactions: Vec<TransactionDisplay>,
}

impl WalletReport {
    /// Whether the transfer sample contained anything at all
    pub fn has_activity(&self) -> bool {
        !self.holdings.is_empty() || !self.transactions.is_empty()
    }
}

/// Look up a wallet's recent ERC-20 activity
///
/// Validation happens before any network call. The two fetches run
/// concurrently and either failure fails the lookup.
pub async fn lookup_wallet(
    client: &EtherscanClient,
    address: &str,
) -> Result<WalletReport, TrackerError> {
    if !is_valid_eth_address(address) {
        return Err(TrackerError::invalid_input(
            "Please enter a valid Ethereum address",
        ));
    }

    logger::info(
        LogTag::Wallet,
        &format!("Looking up wallet {}", truncate_address(address)),
    );

    let (sample, recent) = tokio::try_join!(
        client.token_transfers(address, 1, MAX_TRANSFER_SAMPLE as u32),
        client.token_transfers(address, 1, MAX_RECENT_TRANSACTIONS as u32),
    )
    .map_err(TrackerError::from)?;

    let holdings = aggregate_holdings(address, &sample);
    let transactions = build_recent(address, &recent);

    logger::info(
        LogTag::Wallet,
        &format!(
            "Lookup complete: {} holdings, {} recent transfers",
            holdings.len(),
            transactions.len()
        ),
    );

    Ok(WalletReport {
        address: address.to_string(),
        holdings,
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_address_rejected_before_any_call() {
        let client = EtherscanClient::new("YourApiKeyToken").unwrap();

        for bad in ["", "0xZZ", "742d35Cc6634C0532925a3b8D000000000000000"] {
            let err = lookup_wallet(&client, bad).await.unwrap_err();
            assert!(matches!(err, TrackerError::InvalidInput { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_empty_report_is_no_activity_not_error() {
        let report = WalletReport {
            address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string(),
            holdings: Vec::new(),
            transactions: Vec::new(),
        };
        assert!(!report.has_activity());
    }
}
