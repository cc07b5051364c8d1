/// Etherscan API client
///
/// API Documentation: https://docs.etherscan.io
///
/// Endpoints implemented:
/// 1. ?module=token&action=tokeninfo - token metadata by contract address
/// 2. ?module=token&action=tokenholderlist - holder-count probe (free tier
///    cannot return an exact count; only probe success is meaningful)
/// 3. ?module=account&action=tokentx - paginated ERC-20 transfer history

pub mod types;

use self::types::{Envelope, RawTokenInfo, TransferRecord};
use crate::apis::client::{HttpClient, RateLimiter};
use crate::apis::types::ApiError;
use crate::logger::{self, LogTag};

pub const ETHERSCAN_API_BASE_URL: &str = "https://api.etherscan.io/api";

/// Public explorer host used for outbound deep links
pub const EXPLORER_HOST: &str = "https://etherscan.io";

/// Free tier allows 5 calls/second
pub const RATE_LIMIT_PER_MINUTE: usize = 300;

pub const TIMEOUT_SECS: u64 = 15;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

/// Etherscan API client
///
/// Holds the effective API key for its lifetime; the key is resolved once
/// from the key store and threaded in at construction, so request behavior
/// is a pure function of (input, key).
pub struct EtherscanClient {
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    base_url: String,
    api_key: String,
}

impl EtherscanClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(TIMEOUT_SECS)?,
            rate_limiter: RateLimiter::new(RATE_LIMIT_PER_MINUTE),
            base_url: ETHERSCAN_API_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Issue one GET against the API and parse the response envelope
    async fn get_envelope(&self, query: &[(&str, &str)]) -> Result<Envelope, ApiError> {
        let _permit = self
            .rate_limiter
            .acquire()
            .await
            .map_err(ApiError::Network)?;

        let response = self
            .http_client
            .client()
            .get(&self.base_url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Envelope>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetch token metadata for a contract address
    ///
    /// A non-success envelope carries the API's own message; an empty result
    /// row set on success is returned as-is (the caller decides it means
    /// "token not found").
    pub async fn token_info(&self, contract: &str) -> Result<Vec<RawTokenInfo>, ApiError> {
        logger::debug(LogTag::Api, &format!("tokeninfo {}", contract));

        let envelope = self
            .get_envelope(&[
                ("module", "token"),
                ("action", "tokeninfo"),
                ("contractaddress", contract),
            ])
            .await?;

        if !envelope.is_success() {
            return Err(ApiError::Api(envelope.failure_text()));
        }

        serde_json::from_value(envelope.result)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Probe the token-holder list endpoint
    ///
    /// The free API cannot return an exact holder count; a successful probe
    /// (one row requested) only tells us the endpoint knows the token.
    /// Returns whether the probe succeeded.
    pub async fn holder_probe(&self, contract: &str) -> Result<bool, ApiError> {
        logger::debug(LogTag::Api, &format!("tokenholderlist probe {}", contract));

        let envelope = self
            .get_envelope(&[
                ("module", "token"),
                ("action", "tokenholderlist"),
                ("contractaddress", contract),
                ("page", "1"),
                ("offset", "1"),
            ])
            .await?;

        Ok(envelope.is_success())
    }

    /// Fetch ERC-20 transfer records involving an address, newest first
    ///
    /// An empty history is an empty vec, not an error - Etherscan signals it
    /// as `status: "0"` with "No transactions found". Any other non-success
    /// envelope is a logical failure carrying the API's message.
    pub async fn token_transfers(
        &self,
        address: &str,
        page: u32,
        offset: u32,
    ) -> Result<Vec<TransferRecord>, ApiError> {
        logger::debug(
            LogTag::Api,
            &format!("tokentx {} page={} offset={}", address, page, offset),
        );

        let page_str = page.to_string();
        let offset_str = offset.to_string();
        let envelope = self
            .get_envelope(&[
                ("module", "account"),
                ("action", "tokentx"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", "999999999"),
                ("sort", "desc"),
                ("page", page_str.as_str()),
                ("offset", offset_str.as_str()),
            ])
            .await?;

        if !envelope.is_success() {
            if envelope.indicates_empty() {
                return Ok(Vec::new());
            }
            return Err(ApiError::Api(envelope.failure_text()));
        }

        serde_json::from_value(envelope.result)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

// ============================================================================
// EXPLORER DEEP LINKS
// ============================================================================

/// Public explorer page for a transaction hash
pub fn explorer_tx_url(hash: &str) -> String {
    format!("{}/tx/{}", EXPLORER_HOST, hash)
}

/// Public explorer page for a token contract
pub fn explorer_token_url(contract: &str) -> String {
    format!("{}/token/{}", EXPLORER_HOST, contract)
}
