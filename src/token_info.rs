//! Token lookup flow
//!
//! One authoritative metadata fetch, then one best-effort holder probe.
//! The probe degrades to [`HolderCount::Unavailable`] instead of failing
//! the lookup; the metadata fetch is the lookup.

use crate::amounts;
use crate::apis::etherscan::types::RawTokenInfo;
use crate::apis::etherscan::{explorer_token_url, EtherscanClient};
use crate::apis::types::ApiError;
use crate::errors::TrackerError;
use crate::logger::{self, LogTag};
use crate::validate::is_valid_eth_address;

/// Holder count as the free explorer API can report it
///
/// The free tier cannot return an exact figure, so the value is a typed
/// state rather than a number smuggled through a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderCount {
    /// The holder endpoint acknowledged the token; only a coarse bucket is
    /// knowable on the free tier
    Approximate,
    /// The probe failed or was inconclusive
    Unavailable,
}

impl HolderCount {
    /// Display text for the holder field
    pub fn display(&self) -> &'static str {
        match self {
            HolderCount::Approximate => "10,000+",
            HolderCount::Unavailable => "N/A",
        }
    }
}

/// Display-ready metadata for one token contract
///
/// Constructed fresh per lookup; nothing is cached.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    /// Locale-formatted total supply ("N/A" when the API omits it)
    pub total_supply_display: String,
    pub holders: HolderCount,
    /// Deep link to the public explorer's token page
    pub explorer_url: String,
}

/// Look up a token contract's metadata
///
/// A failure envelope or an empty result set from the metadata endpoint is
/// a `TokenNotFound` error. The subsequent holder probe never fails the
/// lookup.
pub async fn lookup_token(
    client: &EtherscanClient,
    contract: &str,
) -> Result<TokenMetadata, TrackerError> {
    if !is_valid_eth_address(contract) {
        return Err(TrackerError::invalid_input(
            "Please enter a valid Ethereum contract address",
        ));
    }

    logger::info(LogTag::Token, &format!("Looking up token {}", contract));

    let rows = match client.token_info(contract).await {
        Ok(rows) => rows,
        // The envelope said no: this contract is not a known token
        Err(ApiError::Api(message)) => {
            logger::debug(LogTag::Token, &format!("tokeninfo rejected: {}", message));
            return Err(TrackerError::token_not_found(contract));
        }
        Err(other) => return Err(other.into()),
    };

    let info = first_info_row(rows, contract)?;

    let holders = match client.holder_probe(contract).await {
        Ok(true) => HolderCount::Approximate,
        Ok(false) => HolderCount::Unavailable,
        Err(e) => {
            logger::debug(LogTag::Token, &format!("Holder probe failed: {}", e));
            HolderCount::Unavailable
        }
    };

    Ok(metadata_from_info(contract, info, holders))
}

/// An empty result set from a successful call still means the contract is
/// not a known token
fn first_info_row(
    rows: Vec<RawTokenInfo>,
    contract: &str,
) -> Result<RawTokenInfo, TrackerError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| TrackerError::token_not_found(contract))
}

/// Shape a wire row into display metadata (pure; separated for testing)
fn metadata_from_info(contract: &str, info: RawTokenInfo, holders: HolderCount) -> TokenMetadata {
    let decimals: u32 = info.divisor.parse().unwrap_or(18);

    let name = if info.token_name.is_empty() {
        "Unknown Token".to_string()
    } else {
        info.token_name
    };

    let symbol = if info.symbol.is_empty() {
        "UNKNOWN".to_string()
    } else {
        info.symbol
    };

    let total_supply_display = if info.total_supply.is_empty() {
        "N/A".to_string()
    } else {
        amounts::format_supply(&info.total_supply, decimals)
    };

    TokenMetadata {
        address: contract.to_string(),
        name,
        symbol,
        decimals,
        total_supply_display,
        holders,
        explorer_url: explorer_token_url(contract),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    fn dai_info() -> RawTokenInfo {
        serde_json::from_str(
            r#"{
                "contractAddress": "0x6b175474e89094c44da98b954eedeac495271d0f",
                "tokenName": "Dai Stablecoin",
                "symbol": "DAI",
                "divisor": "18",
                "tokenType": "ERC20",
                "totalSupply": "3652271260008453867595323619"
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_contract_rejected_before_any_call() {
        let client = EtherscanClient::new("YourApiKeyToken").unwrap();
        let err = lookup_token(&client, "0xZZ").await.unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_result_set_is_token_not_found() {
        let err = first_info_row(Vec::new(), DAI).unwrap_err();
        assert!(matches!(err, TrackerError::TokenNotFound { .. }));
        assert!(err.to_string().contains("Token not found"));
    }

    #[test]
    fn test_metadata_shaping() {
        let meta = metadata_from_info(DAI, dai_info(), HolderCount::Approximate);
        assert_eq!(meta.name, "Dai Stablecoin");
        assert_eq!(meta.symbol, "DAI");
        assert_eq!(meta.decimals, 18);
        assert_eq!(meta.total_supply_display, "3,652,271,260.008");
        assert_eq!(meta.holders.display(), "10,000+");
        assert_eq!(
            meta.explorer_url,
            format!("https://etherscan.io/token/{}", DAI)
        );
    }

    #[test]
    fn test_missing_fields_degrade_to_placeholders() {
        let info: RawTokenInfo = serde_json::from_str("{}").unwrap();
        let meta = metadata_from_info(DAI, info, HolderCount::Unavailable);
        assert_eq!(meta.name, "Unknown Token");
        assert_eq!(meta.symbol, "UNKNOWN");
        assert_eq!(meta.decimals, 18);
        assert_eq!(meta.total_supply_display, "N/A");
        assert_eq!(meta.holders.display(), "N/A");
    }
}
