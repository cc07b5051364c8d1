use clap::Parser;

use tokentrack::apis::etherscan::EtherscanClient;
use tokentrack::arguments::{Cli, Command, KeysAction};
use tokentrack::config::ApiKeys;
use tokentrack::errors::TrackerError;
use tokentrack::logger::{self, LogTag};
use tokentrack::{display, paths, token_info, wallet};

/// Main entry point for TokenTrack
///
/// Startup order matters: directories are created before the logger
/// initializes (the logger opens its file lazily on first write), then the
/// key store is loaded once and threaded into whichever flow runs.
#[tokio::main]
async fn main() {
    if let Err(e) = paths::ensure_all_directories() {
        eprintln!("Failed to create required directories: {}", e);
        std::process::exit(1);
    }

    logger::init();

    let cli = Cli::parse();

    let keys_path = cli
        .keys_file
        .clone()
        .unwrap_or_else(paths::get_api_keys_path);
    let keys = ApiKeys::load(&keys_path);

    let code = match cli.command {
        Command::Wallet { address } => run_wallet_lookup(&keys, &address).await,
        Command::Token { address } => run_token_lookup(&keys, &address).await,
        Command::Keys { action } => run_keys(keys, &keys_path, action),
    };

    std::process::exit(code);
}

fn build_client(keys: &ApiKeys) -> Result<EtherscanClient, String> {
    EtherscanClient::new(keys.effective_explorer_key())
}

// =============================================================================
// FLOW DISPATCH
// =============================================================================

async fn run_wallet_lookup(keys: &ApiKeys, address: &str) -> i32 {
    let client = match build_client(keys) {
        Ok(client) => client,
        Err(e) => {
            logger::error(LogTag::System, &e);
            return 1;
        }
    };

    match wallet::lookup_wallet(&client, address).await {
        Ok(report) => {
            display::print_wallet_report(&report);
            display::print_footer(keys);
            0
        }
        Err(e @ TrackerError::InvalidInput { .. }) => {
            logger::error(LogTag::Wallet, &e.to_string());
            1
        }
        Err(e) => {
            logger::error(LogTag::Wallet, &format!("Error fetching wallet data: {}", e));
            1
        }
    }
}

async fn run_token_lookup(keys: &ApiKeys, address: &str) -> i32 {
    let client = match build_client(keys) {
        Ok(client) => client,
        Err(e) => {
            logger::error(LogTag::System, &e);
            return 1;
        }
    };

    match token_info::lookup_token(&client, address).await {
        Ok(metadata) => {
            display::print_token_metadata(&metadata);
            display::print_footer(keys);
            0
        }
        Err(e @ TrackerError::InvalidInput { .. }) => {
            logger::error(LogTag::Token, &e.to_string());
            1
        }
        Err(e) => {
            logger::error(LogTag::Token, &format!("Error fetching token data: {}", e));
            1
        }
    }
}

fn run_keys(keys: ApiKeys, keys_path: &std::path::Path, action: KeysAction) -> i32 {
    match action {
        KeysAction::Show => {
            display::print_keys(&keys);
            0
        }
        KeysAction::Set {
            explorer,
            enhanced_provider,
            price_provider,
        } => {
            // Start from the loaded store so unspecified keys survive; the
            // save itself persists the full object in one write
            let mut updated = keys;
            if let Some(key) = explorer {
                updated.explorer_key = key;
            }
            if let Some(key) = enhanced_provider {
                updated.enhanced_provider_key = key;
            }
            if let Some(key) = price_provider {
                updated.price_provider_key = key;
            }

            match updated.save(keys_path) {
                Ok(()) => {
                    logger::info(
                        LogTag::Config,
                        &format!("Settings saved to {}", keys_path.display()),
                    );
                    display::print_keys(&updated);
                    0
                }
                Err(e) => {
                    logger::error(LogTag::Config, &format!("Failed to save settings: {:#}", e));
                    1
                }
            }
        }
    }
}
