//! Validation verdict types
//!
//! A [`Verdict`] is produced fresh for every validation call and never
//! persisted. It carries every failing field, not just the first one.

use serde::Serialize;
use std::fmt;

/// Fields of a submitted bank account that carry a grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BankCode,
    BranchCode,
    AccountNumber,
}

impl Field {
    /// Snake-case field name as used in form errors and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BankCode => "bank_code",
            Field::BranchCode => "branch_code",
            Field::AccountNumber => "account_number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed its grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorReason {
    /// A required field was absent or empty
    Missing,

    /// The value does not match the field's length, character class or pattern
    Malformed,
}

impl FieldErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorReason::Missing => "missing",
            FieldErrorReason::Malformed => "malformed",
        }
    }
}

impl fmt::Display for FieldErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub reason: FieldErrorReason,
}

impl FieldError {
    pub fn new(field: Field, reason: FieldErrorReason) -> Self {
        FieldError { field, reason }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.reason)
    }
}

/// Result of validating one bank account
///
/// Errors are kept in field order: bank code, branch code, account number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    errors: Vec<FieldError>,
}

impl Verdict {
    /// A verdict with no failures
    pub fn valid() -> Self {
        Verdict::default()
    }

    /// Build a verdict from collected failures
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Verdict { errors }
    }

    /// True only if every field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in field order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The failure reason for a specific field, if it failed
    pub fn reason_for(&self, field: Field) -> Option<FieldErrorReason> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.reason)
    }
}

impl fmt::Display for Verdict {
    /// `;`-joined `field:reason` pairs, empty when valid
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
