use crate::config_struct;
use crate::logger::{self, LogTag};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Shared free-tier Etherscan key used when the user has not configured one
///
/// This is Etherscan's documented placeholder token: requests carrying it
/// are served from the public free tier and share its rate limit with every
/// other anonymous caller.
pub const DEFAULT_EXPLORER_API_KEY: &str = "YourApiKeyToken";

config_struct! {
    /// Persisted API key store
    ///
    /// Serialized as a single JSON object `{explorerKey, enhancedProviderKey,
    /// priceProviderKey}`. All fields are optional and default to empty.
    /// Keys are stored in plaintext; the file is only as protected as the
    /// user account that owns it.
    #[serde(rename_all = "camelCase")]
    pub struct ApiKeys {
        /// Etherscan-style explorer API key (raises rate limits)
        explorer_key: String = String::new(),
        /// Enhanced node-provider key (stored for future use, not exercised)
        enhanced_provider_key: String = String::new(),
        /// Price API key (stored for future use, not exercised)
        price_provider_key: String = String::new(),
    }
}

impl ApiKeys {
    /// Load the key store from disk
    ///
    /// An absent or malformed file yields the all-empty default rather than
    /// an error: a corrupt store must never block a lookup, it just drops
    /// the caller back onto the shared free tier.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str::<Self>(&contents) {
            Ok(keys) => keys,
            Err(e) => {
                logger::warning(
                    LogTag::Config,
                    &format!(
                        "Key store '{}' is malformed ({}), using defaults",
                        path.display(),
                        e
                    ),
                );
                Self::default()
            }
        }
    }

    /// Persist the full key store to disk
    ///
    /// All-or-nothing per call: the entire object is written, never a
    /// partial update.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize key store")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write key store '{}'", path.display()))?;

        Ok(())
    }

    /// The key every explorer request should carry
    ///
    /// The user's key takes precedence; otherwise the shared free-tier
    /// fallback is used.
    pub fn effective_explorer_key(&self) -> &str {
        if self.explorer_key.is_empty() {
            DEFAULT_EXPLORER_API_KEY
        } else {
            &self.explorer_key
        }
    }

    /// Whether the user has configured their own explorer key
    pub fn has_custom_explorer_key(&self) -> bool {
        !self.explorer_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_empty() {
        let dir = tempfile::tempdir().unwrap();
        let keys = ApiKeys::load(&dir.path().join("does_not_exist.json"));
        assert_eq!(keys, ApiKeys::default());
        assert!(keys.explorer_key.is_empty());
    }

    #[test]
    fn test_malformed_file_defaults_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_keys.json");
        fs::write(&path, "{not json at all").unwrap();

        let keys = ApiKeys::load(&path);
        assert_eq!(keys, ApiKeys::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_keys.json");

        let keys = ApiKeys {
            explorer_key: "ABC123".to_string(),
            enhanced_provider_key: "def456".to_string(),
            price_provider_key: String::new(),
        };
        keys.save(&path).unwrap();

        let loaded = ApiKeys::load(&path);
        assert_eq!(loaded, keys);
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let json = serde_json::to_string(&ApiKeys::default()).unwrap();
        assert!(json.contains("explorerKey"));
        assert!(json.contains("enhancedProviderKey"));
        assert!(json.contains("priceProviderKey"));
    }

    #[test]
    fn test_partial_object_fills_missing_fields() {
        let keys: ApiKeys = serde_json::from_str(r#"{"explorerKey":"K"}"#).unwrap();
        assert_eq!(keys.explorer_key, "K");
        assert!(keys.enhanced_provider_key.is_empty());
    }

    #[test]
    fn test_effective_key_precedence() {
        let mut keys = ApiKeys::default();
        assert_eq!(keys.effective_explorer_key(), DEFAULT_EXPLORER_API_KEY);
        assert!(!keys.has_custom_explorer_key());

        keys.explorer_key = "MYKEY".to_string();
        assert_eq!(keys.effective_explorer_key(), "MYKEY");
        assert!(keys.has_custom_explorer_key());
    }
}
