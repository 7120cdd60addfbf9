//! Modal dialogs

pub mod redeem_guide;

pub use redeem_guide::RedeemGuide;
