//! # Display Models
//!
//! Plain data handed from screens to components. Everything here is already
//! formatted for display; components never reformat it.
//!
//! ## Serialization Format
//!
//! All models derive `Serialize`/`Deserialize` with default snake_case field
//! names so they can be cached or fixture-loaded as JSON.
//!
//! ```text
//! {
//!   "balance": "12.5 ZEL",
//!   "account": "t1Abc...xYz12"
//! }
//! ```

pub mod account;

pub use account::*;
