/// Wire types for the Etherscan JSON API
///
/// Field names mirror the wire format exactly (camelCase, everything a
/// string - Etherscan serializes numbers as decimal strings).
use serde::{Deserialize, Serialize};

// ===== Response Envelope =====

/// Response envelope shared by every Etherscan endpoint
///
/// `status` is `"1"` on success and `"0"` otherwise; `result` is an array
/// on success and usually an explanatory string on failure, so it stays a
/// raw value until the endpoint-specific parse.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == "1"
    }

    /// Whether a non-success envelope means "nothing matched" rather than a
    /// real failure
    ///
    /// Etherscan reports an empty transfer history as `status: "0"` with
    /// message "No transactions found" and an empty result array.
    pub fn indicates_empty(&self) -> bool {
        self.message.starts_with("No transactions found")
            || self
                .result
                .as_array()
                .map(|a| a.is_empty())
                .unwrap_or(false)
    }

    /// Failure text for error reporting (message, falling back to a string
    /// result body)
    pub fn failure_text(&self) -> String {
        if !self.message.is_empty() && self.message != "NOTOK" {
            return self.message.clone();
        }
        if let Some(s) = self.result.as_str() {
            return s.to_string();
        }
        self.message.clone()
    }
}

// ===== Token Transfer Records =====

/// One raw ERC-20 transfer event from `module=account&action=tokentx`
///
/// Immutable once fetched; never mutated by the aggregation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub block_number: String,
    pub time_stamp: String,
    pub hash: String,
    pub from: String,
    pub contract_address: String,
    pub to: String,
    /// Raw integer amount as a decimal string (kept as text to avoid
    /// precision loss on the wire)
    pub value: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default)]
    pub token_decimal: String,
}

impl TransferRecord {
    /// Declared decimals of the transferred token (18 when absent/garbled,
    /// the ERC-20 default)
    pub fn decimals(&self) -> u32 {
        self.token_decimal.parse().unwrap_or(18)
    }

    /// Unix timestamp of the containing block
    pub fn timestamp(&self) -> i64 {
        self.time_stamp.parse().unwrap_or(0)
    }
}

// ===== Token Info =====

/// Token metadata row from `module=token&action=tokeninfo`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenInfo {
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub symbol: String,
    /// Decimals, named "divisor" on this endpoint
    #[serde(default)]
    pub divisor: String,
    #[serde(default)]
    pub total_supply: String,
    #[serde(default)]
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSFER_FIXTURE: &str = r#"{
        "blockNumber": "19876543",
        "timeStamp": "1715000000",
        "hash": "0xabc123def4567890abc123def4567890abc123def4567890abc123def4567890",
        "from": "0x28c6c06298d514db089934071355e5743bf21d60",
        "contractAddress": "0x6b175474e89094c44da98b954eedeac495271d0f",
        "to": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
        "value": "2500000000000000000000",
        "tokenName": "Dai Stablecoin",
        "tokenSymbol": "DAI",
        "tokenDecimal": "18",
        "gas": "207128",
        "gasUsed": "52298",
        "confirmations": "120"
    }"#;

    #[test]
    fn test_transfer_record_from_wire() {
        let record: TransferRecord = serde_json::from_str(TRANSFER_FIXTURE).unwrap();
        assert_eq!(record.token_symbol, "DAI");
        assert_eq!(record.decimals(), 18);
        assert_eq!(record.timestamp(), 1715000000);
        assert_eq!(record.value, "2500000000000000000000");
        // Unknown wire fields (gas etc.) are ignored
    }

    #[test]
    fn test_missing_decimal_defaults_to_18() {
        let record = TransferRecord {
            block_number: "1".into(),
            time_stamp: "0".into(),
            hash: "0x0".into(),
            from: "0xa".into(),
            contract_address: "0xc".into(),
            to: "0xb".into(),
            value: "1".into(),
            token_name: String::new(),
            token_symbol: String::new(),
            token_decimal: String::new(),
        };
        assert_eq!(record.decimals(), 18);
    }

    #[test]
    fn test_envelope_success() {
        let env: Envelope =
            serde_json::from_str(r#"{"status":"1","message":"OK","result":[]}"#).unwrap();
        assert!(env.is_success());
    }

    #[test]
    fn test_envelope_no_transactions_is_empty_not_failure() {
        let env: Envelope = serde_json::from_str(
            r#"{"status":"0","message":"No transactions found","result":[]}"#,
        )
        .unwrap();
        assert!(!env.is_success());
        assert!(env.indicates_empty());
    }

    #[test]
    fn test_envelope_rate_limit_is_failure() {
        let env: Envelope = serde_json::from_str(
            r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#,
        )
        .unwrap();
        assert!(!env.is_success());
        assert!(!env.indicates_empty());
        assert_eq!(env.failure_text(), "Max rate limit reached");
    }

    #[test]
    fn test_token_info_from_wire() {
        let info: RawTokenInfo = serde_json::from_str(
            r#"{
                "contractAddress": "0x6b175474e89094c44da98b954eedeac495271d0f",
                "tokenName": "Dai Stablecoin",
                "symbol": "DAI",
                "divisor": "18",
                "tokenType": "ERC20",
                "totalSupply": "3652271260008453867595323619"
            }"#,
        )
        .unwrap();
        assert_eq!(info.token_name, "Dai Stablecoin");
        assert_eq!(info.divisor, "18");
        assert_eq!(info.total_supply, "3652271260008453867595323619");
    }
}
