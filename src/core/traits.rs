//! The contract every country rule satisfies
//!
//! Callers go through [`BankAccountRules`] rather than a concrete type so a
//! country with genuinely unusual logic can be plugged in without touching the
//! others.

use crate::types::{CurrencyCode, Field, FieldErrorReason};

/// Per-country validation, derivation and masking rules
///
/// Implementations must be pure: the same inputs always give the same
/// outputs, and nothing is mutated. `Send + Sync` lets one registry serve
/// every thread.
pub trait BankAccountRules: Send + Sync {
    /// ISO 3166-1 alpha-2 country code
    fn country_code(&self) -> &str;

    /// Bank account type tag (the country code or a legacy alias)
    fn bank_account_type(&self) -> &str;

    /// Settlement currency for payouts
    fn currency(&self) -> CurrencyCode;

    /// Check one raw field against its grammar, reporting why it fails
    fn check_field(&self, field: Field, value: Option<&str>) -> Result<(), FieldErrorReason>;

    /// Bank code matches the country's grammar exactly
    fn is_valid_bank_code(&self, code: Option<&str>) -> bool {
        self.check_field(Field::BankCode, code).is_ok()
    }

    /// Branch code matches the country's grammar; always true when unused
    fn is_valid_branch_code(&self, code: Option<&str>) -> bool {
        self.check_field(Field::BranchCode, code).is_ok()
    }

    /// Account number matches the country's grammar
    fn is_valid_account_number(&self, number: Option<&str>) -> bool {
        self.check_field(Field::AccountNumber, number).is_ok()
    }

    /// Canonical routing identifier, absent for countries without one
    fn routing_number(&self, bank_code: Option<&str>, branch_code: Option<&str>)
        -> Option<String>;

    /// Masked display string ending in `last_four`
    fn account_number_visual(&self, last_four: &str) -> String;
}
