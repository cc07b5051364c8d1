pub mod amounts; // Exact decimal scaling for raw token amounts
pub mod apis;
pub mod arguments;
pub mod config;
pub mod display;
pub mod errors; // Structured error handling
pub mod holdings; // Transfer aggregation into net balances
pub mod logger;
pub mod paths;
pub mod token_info;
pub mod transactions;
pub mod validate;
pub mod wallet; // Wallet lookup flow
