//! Configuration for TokenTrack
//!
//! The only persisted configuration is the API key store: a single JSON
//! object holding the user's optional explorer / enhanced-provider /
//! price-provider keys. It is loaded once at startup and threaded
//! explicitly into whatever needs it - there is no ambient global config.

pub mod keys;
pub mod macros;

pub use keys::{ApiKeys, DEFAULT_EXPLORER_API_KEY};
