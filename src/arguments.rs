/// Command-line interface for TokenTrack
///
/// All argument parsing lives here. The logging flags are also scanned
/// directly from argv by `logger::init_from_args()`; they are declared on
/// the parser so they show up in `--help` and are accepted anywhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tokentrack",
    version,
    about = "Track ERC-20 tokens, balances, and transactions on Ethereum"
)]
pub struct Cli {
    /// Path to the API key store (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub keys_file: Option<PathBuf>,

    /// Enable VERBOSE logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress everything below WARNING
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable DEBUG logging for every subsystem
    #[arg(long, global = true)]
    pub debug_all: bool,

    /// Enable DEBUG logging for API requests
    #[arg(long, global = true)]
    pub debug_api: bool,

    /// Enable DEBUG logging for the wallet flow
    #[arg(long, global = true)]
    pub debug_wallet: bool,

    /// Enable DEBUG logging for the token flow
    #[arg(long, global = true)]
    pub debug_token: bool,

    /// Enable DEBUG logging for configuration handling
    #[arg(long, global = true)]
    pub debug_config: bool,

    /// Enable DEBUG logging for startup and dispatch
    #[arg(long, global = true)]
    pub debug_system: bool,

    /// Enable DEBUG logging for result rendering
    #[arg(long, global = true)]
    pub debug_display: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a wallet's ERC-20 holdings and recent transfers
    #[command(after_help = "Example: tokentrack wallet 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")]
    Wallet {
        /// Wallet address (0x + 40 hex digits)
        address: String,
    },

    /// Look up an ERC-20 token contract's metadata
    #[command(after_help = "Example: tokentrack token 0x6B175474E89094C44Da98b954EedeAC495271d0F  (DAI)")]
    Token {
        /// Contract address (0x + 40 hex digits)
        address: String,
    },

    /// Manage stored API keys
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeysAction {
    /// Update and persist the key store (unspecified keys keep their value)
    Set {
        /// Etherscan-style explorer API key (raises rate limits)
        #[arg(long, value_name = "KEY")]
        explorer: Option<String>,

        /// Enhanced node-provider key (stored for future use)
        #[arg(long, value_name = "KEY")]
        enhanced_provider: Option<String>,

        /// Price API key (stored for future use)
        #[arg(long, value_name = "KEY")]
        price_provider: Option<String>,
    },

    /// Show which keys are configured (values masked)
    Show,
}
