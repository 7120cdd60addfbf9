//! Application constants

/// `localStorage` key holding the JSON configuration override.
pub const CONFIG_STORAGE_KEY: &str = "dex-web.config";

/// A currency offered by the token selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenListing {
    pub code: &'static str,
    /// Badge colour behind the token's initial
    pub color: &'static str,
}

pub const TOKENS: &[TokenListing] = &[
    TokenListing { code: "ZEL", color: "#2b61d1" },
    TokenListing { code: "FLUX", color: "#1f9cf0" },
    TokenListing { code: "BTC", color: "#f7931a" },
    TokenListing { code: "ETH", color: "#627eea" },
];

// Placeholder account shown until the wallet backend is wired in
pub const DEMO_BALANCE: f64 = 12.5;
pub const DEMO_ACCOUNT: &str = "t1XyZ9aBcDeFgHiJkLmNoPqRsTuVwXyZ1234";

/// Currency the account balance is denominated in.
pub const NATIVE_TOKEN: &str = "ZEL";
