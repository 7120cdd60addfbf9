//! # Shared Display Types Library
//!
//! Types and helpers shared by every frontend of the DEX.
//!
//! ## Structure
//!
//! - **[`dto`]**: Display models passed from screens into components
//!   - **[`dto::account::AccountSummary`]**: Pre-formatted balance and account strings
//! - **[`utils`]**: String formatting helpers
//!   - **[`utils::reduce_balance`]**: Truncate a balance for display
//!   - **[`utils::reduce_token`]**: Shorten an account or token id with an ellipsis
//!   - **[`utils::format_address`]**: Format addresses with configurable prefix/suffix
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::account::AccountSummary;
//! use shared::utils::{reduce_balance, reduce_token};
//!
//! let summary = AccountSummary::new(
//!     format!("{} ZEL", reduce_balance(12.5, 6)),
//!     reduce_token("t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234"),
//! );
//! assert_eq!(summary.balance, "12.5 ZEL");
//! assert_eq!(summary.account, "t1XyZ...Z1234");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
