//! # Formatting Utilities for the Trade Screen
//!
//! Thin wrappers over [`shared::utils`] that attach token codes.

use shared::dto::account::AccountSummary;
use shared::utils::{reduce_balance, reduce_token};

/// Format a balance with its ticker, e.g. `"12.5 ZEL"`.
///
/// ```rust
/// use dex_web::utils::format::format_balance;
///
/// assert_eq!(format_balance(12.5, "ZEL", 6), "12.5 ZEL");
/// assert_eq!(format_balance(0.123456789, "FLUX", 4), "0.1234 FLUX");
/// ```
pub fn format_balance(value: f64, code: &str, precision: u32) -> String {
    format!("{} {}", reduce_balance(value, precision), code)
}

/// Build the header summary from a raw balance and account id.
pub fn account_summary(balance: f64, code: &str, account: &str, precision: u32) -> AccountSummary {
    AccountSummary::new(format_balance(balance, code, precision), reduce_token(account))
}
