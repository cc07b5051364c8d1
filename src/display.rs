//! Console rendering for lookup results
//!
//! All presentation lives here: the holdings table, the recent-transaction
//! list, the token metadata panel, and the key-store views. Nothing in this
//! module fetches or mutates anything.

use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::config::ApiKeys;
use crate::holdings::TokenHolding;
use crate::token_info::TokenMetadata;
use crate::transactions::{Direction, TransactionDisplay};
use crate::validate::truncate_address;
use crate::wallet::WalletReport;

/// Inner width of the box-drawn panels
const PANEL_WIDTH: usize = 63;

// =============================================================================
// WALLET REPORT
// =============================================================================

/// Render a full wallet lookup result
pub fn print_wallet_report(report: &WalletReport) {
    println!();

    if !report.has_activity() {
        println!(
            "{}",
            "No ERC-20 tokens found for this address or address has no recent token activity"
                .yellow()
        );
        return;
    }

    if !report.holdings.is_empty() {
        print_holdings_table(&report.holdings);
    }

    if !report.transactions.is_empty() {
        println!();
        print_recent_transactions(&report.transactions);
    }
}

/// Holdings table: one row per token, balances at 6 decimal places
fn print_holdings_table(holdings: &[TokenHolding]) {
    println!("{}", "TOKEN HOLDINGS".bold());
    println!(
        "{}",
        "Recent ERC-20 tokens based on transaction history".dimmed()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["#", "Symbol", "Name", "Contract", "Balance"]);

    for (i, holding) in holdings.iter().enumerate() {
        table.add_row([
            (i + 1).to_string(),
            holding.symbol.clone(),
            fit(&holding.name, 24),
            truncate_address(&holding.contract_address),
            holding.balance_display(),
        ]);
    }

    println!("{table}");
}

/// Recent transfers as a directional list
fn print_recent_transactions(rows: &[TransactionDisplay]) {
    println!("{}", "RECENT ERC-20 TRANSACTIONS".bold());

    for tx in rows {
        let (marker, verb, counterparty_label) = match tx.direction {
            Direction::Receive => ("+".green().bold(), "Received", "From"),
            Direction::Send => ("-".red().bold(), "Sent", "To"),
        };

        println!(
            " {} {} {} {}",
            marker,
            verb,
            tx.amount.bold(),
            tx.token_symbol
        );
        println!(
            "     {}: {}   Block #{}",
            counterparty_label,
            tx.counterparty.cyan(),
            tx.block_number
        );
        println!(
            "     {}   {}",
            tx.timestamp.dimmed(),
            tx.explorer_url.dimmed().underline()
        );
    }
}

// =============================================================================
// TOKEN METADATA PANEL
// =============================================================================

/// Render token metadata as a box-drawn panel
pub fn print_token_metadata(meta: &TokenMetadata) {
    println!();
    println!("┌─ Token Information {}┐", "─".repeat(PANEL_WIDTH - 20));
    panel_line("Token Name:", &meta.name);
    panel_line("Symbol:", &meta.symbol);
    panel_line("Decimals:", &meta.decimals.to_string());
    panel_line("Total Supply:", &meta.total_supply_display);
    panel_line("Approximate Holders:", meta.holders.display());
    panel_line("Network:", "Ethereum Mainnet");
    panel_line("Contract:", &meta.address);
    println!("└{}┘", "─".repeat(PANEL_WIDTH));
    println!(" {}", meta.explorer_url.dimmed().underline());
}

fn panel_line(label: &str, value: &str) {
    println!(
        "│ {:<20} {:<width$} │",
        label,
        fit(value, PANEL_WIDTH - 23),
        width = PANEL_WIDTH - 23
    );
}

// =============================================================================
// KEY STORE VIEWS
// =============================================================================

/// Show which keys are configured, values masked
pub fn print_keys(keys: &ApiKeys) {
    println!("{}", "API KEY CONFIGURATION".bold());
    println!("  Explorer key:           {}", mask_key(&keys.explorer_key));
    println!(
        "  Enhanced provider key:  {}",
        mask_key(&keys.enhanced_provider_key)
    );
    println!(
        "  Price provider key:     {}",
        mask_key(&keys.price_provider_key)
    );
    println!();
    println!(
        "{}",
        "Without an explorer key, requests share the public free-tier rate limit.".dimmed()
    );
}

/// Mask a stored key for display: all but the last 4 characters hidden
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    if key.len() <= 4 {
        return "••••".to_string();
    }
    format!("••••{}", &key[key.len() - 4..])
}

// =============================================================================
// SHARED FOOTER
// =============================================================================

/// Data-source footer with the key-tier indicator
pub fn print_footer(keys: &ApiKeys) {
    println!();
    println!(
        "{}",
        "Powered by Etherscan API • Live Ethereum data".dimmed()
    );
    if keys.has_custom_explorer_key() {
        println!("{}", "Custom API key".green().dimmed());
    } else {
        println!(
            "{}",
            "Free tier (shared rate limit) - add your key with `tokentrack keys set`".yellow()
        );
    }
}

/// Truncate a string to a display width, ellipsized
fn fit(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("ab"), "••••");
        assert_eq!(mask_key("ABCDEFGH1234"), "••••1234");
    }

    #[test]
    fn test_fit_truncates_long_values() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("a-very-long-token-name", 8), "a-very-…");
    }
}
