//! Exact decimal scaling for raw token amounts
//!
//! Raw ERC-20 amounts arrive as integer strings scaled by `10^decimals`.
//! Everything here works on integers and digit strings - floats never touch
//! the balance path, so high-decimal tokens and large values scale without
//! precision loss. Display strings are produced only at the final
//! formatting step.

use num_format::{Locale, ToFormattedString};

/// Raw amounts are accumulated as i128: plenty of headroom for a 50-record
/// sample of 18-decimal transfers
pub fn parse_raw(value: &str) -> Result<i128, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty raw amount".to_string());
    }
    trimmed
        .parse::<i128>()
        .map_err(|e| format!("unparseable raw amount '{}': {}", value, e))
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

/// Scale an unsigned digit string down by `10^decimals`, exactly
///
/// Pure digit manipulation: pad, insert the decimal point, trim trailing
/// zeros. Handles values of any size.
fn scale_digits(digits: &str, decimals: u32) -> String {
    let mut s = digits.trim_start_matches('0').to_string();
    if s.is_empty() {
        s.push('0');
    }

    let d = decimals as usize;
    if s.len() <= d {
        s = format!("0.{}{}", "0".repeat(d - s.len()), s);
    } else if d > 0 {
        let split = s.len() - d;
        s.insert(split, '.');
    }

    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Exact decimal string for a signed raw amount
pub fn scale_exact(raw: i128, decimals: u32) -> String {
    let scaled = scale_digits(&raw.unsigned_abs().to_string(), decimals);
    if raw < 0 && scaled != "0" {
        format!("-{}", scaled)
    } else {
        scaled
    }
}

/// Convert a raw amount into millionths of a token, rounding half-up
///
/// This is the 6-fractional-digit display resolution; the rounding happens
/// in integer space.
fn to_micro_units(raw: i128, decimals: u32) -> i128 {
    if decimals <= 6 {
        // pow10(<=6) cannot overflow
        raw.saturating_mul(pow10(6 - decimals).unwrap_or(1))
    } else {
        match pow10(decimals - 6) {
            Some(divisor) => {
                let q = raw / divisor;
                let r = raw % divisor;
                if r.unsigned_abs() >= (divisor as u128).div_ceil(2) {
                    q + raw.signum()
                } else {
                    q
                }
            }
            // Divisor beyond i128 range: any representable raw value rounds to zero
            None => 0,
        }
    }
}

/// Format a signed raw amount with exactly 6 fractional digits
pub fn format_amount(raw: i128, decimals: u32) -> String {
    let units = to_micro_units(raw, decimals);
    let sign = if units < 0 { "-" } else { "" };
    let abs = units.unsigned_abs();
    format!("{}{}.{:06}", sign, abs / 1_000_000, abs % 1_000_000)
}

/// Locale-formatted rendering of an unsigned raw supply string
///
/// Grouped integer part, fraction trimmed to at most 3 digits. Inputs that
/// are not plain digit strings are passed through unchanged.
pub fn format_supply(raw: &str, decimals: u32) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }

    let scaled = scale_digits(cleaned, decimals);
    let (int_part, frac_part) = scaled.split_once('.').unwrap_or((scaled.as_str(), ""));

    let grouped = match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        // Beyond u128: leave ungrouped rather than lose digits
        Err(_) => int_part.to_string(),
    };

    let frac: String = frac_part.chars().take(3).collect();
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}
