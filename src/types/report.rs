//! Combined engine output for one bank account

use super::bank_account::CurrencyCode;
use super::verdict::Verdict;
use serde::Serialize;

/// Everything the engine derives for a submitted bank account
///
/// Routing number and visual are computed even when the verdict is invalid,
/// so previews can be rendered before the seller fixes their input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountReport {
    /// Country code of the governing rule
    pub country: String,

    /// Grammar conformance of the three raw fields
    pub verdict: Verdict,

    /// Derived routing identifier, absent for countries that route by account number
    pub routing_number: Option<String>,

    /// Masked display string
    pub account_number_visual: String,

    /// Settlement currency for payouts
    pub currency: CurrencyCode,
}

impl AccountReport {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// A report tagged with the input row it was produced from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub row: u64,
    pub report: AccountReport,
}
