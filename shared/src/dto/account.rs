//! Account summary shown in the header row.

use serde::{Deserialize, Serialize};

/// Balance and account strings, formatted by the caller.
///
/// No numeric invariants are enforced: the strings are rendered exactly as
/// given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub balance: String,
    pub account: String,
}

impl AccountSummary {
    pub fn new(balance: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            balance: balance.into(),
            account: account.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_summary_json() {
        let summary = AccountSummary::new("12.5 ZEL", "t1Abc...");
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"balance":"12.5 ZEL","account":"t1Abc..."}"#);

        let parsed: AccountSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_account_summary_default_is_empty() {
        let summary = AccountSummary::default();
        assert!(summary.balance.is_empty());
        assert!(summary.account.is_empty());
    }
}
