//! HTTP API clients
//!
//! One submodule per upstream service, sharing the base client and rate
//! limiter in `client`. The only service the flows exercise is the
//! Etherscan-style explorer API.

pub mod client;
pub mod etherscan;
pub mod types;
