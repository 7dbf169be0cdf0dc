//! Field validation
//!
//! Runs all three field checks of a country rule independently, so a caller
//! sees every failing field in a single pass.

use super::traits::BankAccountRules;
use crate::types::{Field, FieldError, Verdict};

/// Validate raw fields against a rule
///
/// Never fails: format mismatches are reported in the returned [`Verdict`].
pub fn validate_fields(
    rules: &dyn BankAccountRules,
    bank_code: Option<&str>,
    branch_code: Option<&str>,
    account_number: Option<&str>,
) -> Verdict {
    let errors = [
        (Field::BankCode, bank_code),
        (Field::BranchCode, branch_code),
        (Field::AccountNumber, account_number),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        rules
            .check_field(field, value)
            .err()
            .map(|reason| FieldError::new(field, reason))
    })
    .collect();

    Verdict::from_errors(errors)
}
