//! Recent-transaction display formatting
//!
//! Pure transformation of transfer records into display rows; no fetching
//! happens here.

use chrono::{Local, TimeZone};

use crate::amounts;
use crate::apis::etherscan::explorer_tx_url;
use crate::apis::etherscan::types::TransferRecord;
use crate::validate::truncate_address;

/// At most this many recent transfers are displayed
pub const MAX_RECENT_TRANSACTIONS: usize = 10;

/// Transfer direction relative to the queried wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Receive,
    Send,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Receive => "receive",
            Direction::Send => "send",
        }
    }
}

/// One display-ready transaction row
#[derive(Debug, Clone)]
pub struct TransactionDisplay {
    pub hash: String,
    pub direction: Direction,
    /// Truncated counterparty: sender when receiving, recipient when sending
    pub counterparty: String,
    /// Amount formatted to 6 decimal places
    pub amount: String,
    pub token_symbol: String,
    /// Localized timestamp string
    pub timestamp: String,
    pub block_number: String,
    /// Deep link to the public explorer's transaction page
    pub explorer_url: String,
}

/// Build display rows for the most recent transfers involving a wallet
///
/// `to == wallet` (case-insensitive) classifies as a receive, anything else
/// as a send. Takes at most [`MAX_RECENT_TRANSACTIONS`] records.
pub fn build_recent(wallet: &str, records: &[TransferRecord]) -> Vec<TransactionDisplay> {
    records
        .iter()
        .take(MAX_RECENT_TRANSACTIONS)
        .map(|record| {
            let direction = if record.to.eq_ignore_ascii_case(wallet) {
                Direction::Receive
            } else {
                Direction::Send
            };

            let counterparty = match direction {
                Direction::Receive => truncate_address(&record.from),
                Direction::Send => truncate_address(&record.to),
            };

            let amount = match amounts::parse_raw(&record.value) {
                Ok(raw) => amounts::format_amount(raw, record.decimals()),
                Err(_) => record.value.clone(),
            };

            TransactionDisplay {
                hash: record.hash.clone(),
                direction,
                counterparty,
                amount,
                token_symbol: record.token_symbol.clone(),
                timestamp: format_timestamp(record.timestamp()),
                block_number: record.block_number.clone(),
                explorer_url: explorer_tx_url(&record.hash),
            }
        })
        .collect()
}

/// Render a Unix timestamp in the user's local timezone
fn format_timestamp(unix_secs: i64) -> String {
    match Local.timestamp_opt(unix_secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => unix_secs.to_string(),
    }
}
