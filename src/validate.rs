//! Ethereum address validation and display helpers
//!
//! Validation is purely lexical: `0x` followed by exactly 40 hex digits,
//! case-insensitive. No EIP-55 checksum verification is performed - a
//! mixed-case address with a wrong checksum still passes, matching the
//! explorer API's own tolerance.

use once_cell::sync::Lazy;
use regex::Regex;

static ETH_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid"));

/// Check whether a string is a well-formed Ethereum address
///
/// Pure predicate, no side effects. Used for both wallet and contract
/// addresses (the two are lexically identical).
pub fn is_valid_eth_address(address: &str) -> bool {
    ETH_ADDRESS_RE.is_match(address)
}

/// Lower-cased address form used as a grouping and comparison key
///
/// Ethereum addresses are case-insensitive for identity purposes; mixed
/// casing only carries checksum information, which we do not evaluate.
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

/// Case-insensitive address equality
pub fn addresses_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Truncate an address for display (first 6 chars ... last 4)
pub fn truncate_address(address: &str) -> String {
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        assert!(is_valid_eth_address(
            "0x0000000000000000000000000000000000000000"
        ));
        assert!(is_valid_eth_address(
            "0x6B175474E89094C44Da98b954EedeAC495271d0F"
        ));
        // Case-insensitive: all-caps hex is fine
        assert!(is_valid_eth_address(
            "0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045"
        ));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_eth_address(""));
        assert!(!is_valid_eth_address("0xZZ"));
        // Missing prefix
        assert!(!is_valid_eth_address(
            "742d35Cc6634C0532925a3b8D000000000000000"
        ));
        // 39 hex digits
        assert!(!is_valid_eth_address(
            "0x742d35Cc6634C0532925a3b8D00000000000000"
        ));
        // 41 hex digits
        assert!(!is_valid_eth_address(
            "0x742d35Cc6634C0532925a3b8D0000000000000000"
        ));
        // Non-hex character inside
        assert!(!is_valid_eth_address(
            "0x742d35Cc6634C0532925a3b8g000000000000000"
        ));
        // Whitespace is not tolerated
        assert!(!is_valid_eth_address(
            " 0x742d35Cc6634C0532925a3b8D000000000000000"
        ));
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(
            normalize_address("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        );
    }

    #[test]
    fn test_addresses_equal_ignores_case() {
        assert!(addresses_equal(
            "0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        ));
        assert!(!addresses_equal(
            "0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "0x0000000000000000000000000000000000000000"
        ));
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            "0x6B17...1d0F"
        );
        assert_eq!(truncate_address("0xshort"), "0xshort");
    }
}
