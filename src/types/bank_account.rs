//! Bank account input types
//!
//! This module defines the aggregate a seller submits for one payout method,
//! plus the small value types the engine hands back alongside it.

use serde::Serialize;
use std::fmt;

/// Number of trailing account-number characters kept for display
pub const LAST_FOUR_LEN: usize = 4;

/// Lower-case ISO 4217 alpha currency code (e.g. `usd`, `eur`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// Wrap a lower-case currency code
    pub const fn new(code: &'static str) -> Self {
        CurrencyCode(code)
    }

    /// The currency code as a string slice
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One seller's submitted payout details for a country
///
/// Raw fields are kept exactly as received (after the caller's trimming).
/// An empty string is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankAccount {
    /// ISO 3166-1 alpha-2 country code governing validation
    pub country: String,

    /// Bank identifier (BIC, sort code, routing number, ...)
    pub bank_code: Option<String>,

    /// Branch identifier, used by a minority of countries
    pub branch_code: Option<String>,

    /// Full account number or IBAN
    ///
    /// Only present at submission time. Once tokenized externally, just the
    /// last four characters are retained.
    pub account_number: Option<String>,

    /// Display fragment stored separately from the account number
    pub last_four: Option<String>,
}

impl BankAccount {
    /// Create a bank account for a country with no fields filled in
    pub fn new(country: impl Into<String>) -> Self {
        BankAccount {
            country: country.into(),
            ..Default::default()
        }
    }

    /// Set the bank code
    pub fn with_bank_code(mut self, bank_code: impl Into<String>) -> Self {
        self.bank_code = Some(bank_code.into());
        self
    }

    /// Set the branch code
    pub fn with_branch_code(mut self, branch_code: impl Into<String>) -> Self {
        self.branch_code = Some(branch_code.into());
        self
    }

    /// Set the account number
    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    /// Set the stored last-four fragment
    pub fn with_last_four(mut self, last_four: impl Into<String>) -> Self {
        self.last_four = Some(last_four.into());
        self
    }

    /// The last four characters used for masking
    ///
    /// Prefers the stored fragment; otherwise derives it from the account
    /// number. Account numbers shorter than four characters are returned
    /// whole.
    pub fn account_number_last_four(&self) -> String {
        if let Some(last_four) = present(self.last_four.as_deref()) {
            return last_four.to_string();
        }

        self.account_number
            .as_deref()
            .map(last_four_of)
            .unwrap_or_default()
    }
}

/// A bank account read from batch input, tagged with its 1-based data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub row: u64,
    pub account: BankAccount,
}

/// Trailing [`LAST_FOUR_LEN`] characters of a value (whole value if shorter)
pub fn last_four_of(value: &str) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(LAST_FOUR_LEN)).collect()
}

/// Normalize an optional raw field: empty strings count as absent
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::long("DE89370400440532013000", "3000")]
    #[case::exactly_four("1234", "1234")]
    #[case::shorter("12", "12")]
    #[case::empty("", "")]
    #[case::multibyte("AB€€€€", "€€€€")]
    fn test_last_four_of(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(last_four_of(value), expected);
    }

    #[test]
    fn test_last_four_prefers_stored_fragment() {
        let account = BankAccount::new("US")
            .with_account_number("000123456789")
            .with_last_four("9999");
        assert_eq!(account.account_number_last_four(), "9999");
    }

    #[test]
    fn test_last_four_derived_from_account_number() {
        let account = BankAccount::new("US").with_account_number("000123456789");
        assert_eq!(account.account_number_last_four(), "6789");
    }

    #[test]
    fn test_last_four_ignores_empty_fragment() {
        let account = BankAccount::new("US")
            .with_account_number("000123456789")
            .with_last_four("");
        assert_eq!(account.account_number_last_four(), "6789");
    }

    #[test]
    fn test_last_four_without_any_number() {
        assert_eq!(BankAccount::new("US").account_number_last_four(), "");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("x"), Some("x"))]
    fn test_present(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(present(value), expected);
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::new("eur").to_string(), "eur");
        assert_eq!(CurrencyCode::new("usd").as_str(), "usd");
    }
}
