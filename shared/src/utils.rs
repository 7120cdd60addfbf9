//! # Shared Utility Functions
//!
//! Display formatting used by the trade screens before values reach a component.
//!
//! ## Balance Formatting
//!
//! - [`reduce_balance`] - Truncate a balance to a fixed number of decimals
//!
//! ## Account Formatting
//!
//! - [`format_address`] - Format an address with ellipsis (first N and last M characters)
//! - [`reduce_token`] - `format_address` with 5/5 characters, applied only to ids longer than 10
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, reduce_balance};
//!
//! let address = "t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234";
//! assert_eq!(format_address(address, 4, 4), "t1Xy...1234");
//! assert_eq!(reduce_balance(3.14159265, 4), "3.1415");
//! ```

/// Default number of decimals kept by [`reduce_balance`].
pub const DEFAULT_BALANCE_PRECISION: u32 = 6;

/// Ids at or below this length are shown unchanged by [`reduce_token`].
const REDUCE_TOKEN_MAX_LEN: usize = 10;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len` characters it is
/// returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234";
/// assert_eq!(format_address(addr, 4, 4), "t1Xy...1234");
/// assert_eq!(format_address(addr, 6, 2), "t1XyZ9...34");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an account or token id for the header row.
///
/// Ids longer than 10 characters keep their first and last 5 characters.
///
/// ```rust
/// use shared::utils::reduce_token;
///
/// assert_eq!(reduce_token("t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234"), "t1XyZ...Z1234");
/// assert_eq!(reduce_token("ZEL"), "ZEL");
/// ```
pub fn reduce_token(token: &str) -> String {
    if token.chars().count() > REDUCE_TOKEN_MAX_LEN {
        format_address(token, 5, 5)
    } else {
        token.to_string()
    }
}

/// Format a balance for display.
///
/// Whole numbers print without a fractional part. Anything else is truncated
/// (never rounded) to `precision` decimals with trailing zeros removed.
/// Non-finite input prints as `"0"`.
///
/// ```rust
/// use shared::utils::reduce_balance;
///
/// assert_eq!(reduce_balance(250.0, 6), "250");
/// assert_eq!(reduce_balance(12.5, 6), "12.5");
/// assert_eq!(reduce_balance(0.123456789, 6), "0.123456");
/// ```
pub fn reduce_balance(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let factor = 10f64.powi(precision as i32);
    let truncated = (value * factor).trunc() / factor;
    if truncated == 0.0 {
        return "0".to_string();
    }

    let formatted = format!("{:.prec$}", truncated, prec = precision as usize);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234";
        assert_eq!(format_address(addr, 4, 4), "t1Xy...1234");
        assert_eq!(format_address(addr, 2, 2), "t1...34");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdefgh", 4, 4), "abcdefgh");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ééééééééééé", 2, 2), "éé...éé");
    }

    #[test]
    fn test_reduce_token_boundary() {
        assert_eq!(reduce_token("0123456789"), "0123456789");
        assert_eq!(reduce_token("0123456789a"), "01234...6789a");
    }

    #[test]
    fn test_reduce_balance_whole_numbers() {
        assert_eq!(reduce_balance(0.0, 6), "0");
        assert_eq!(reduce_balance(1000.0, 6), "1000");
        assert_eq!(reduce_balance(-3.0, 6), "-3");
    }

    #[test]
    fn test_reduce_balance_truncates() {
        assert_eq!(reduce_balance(1.9999999, 6), "1.999999");
        assert_eq!(reduce_balance(0.1, DEFAULT_BALANCE_PRECISION), "0.1");
        assert_eq!(reduce_balance(2.50, 2), "2.5");
        assert_eq!(reduce_balance(0.0000001, 6), "0");
    }

    #[test]
    fn test_reduce_balance_non_finite() {
        assert_eq!(reduce_balance(f64::NAN, 6), "0");
        assert_eq!(reduce_balance(f64::INFINITY, 6), "0");
    }
}
