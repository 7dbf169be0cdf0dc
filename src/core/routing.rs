//! Routing number derivation
//!
//! Each country carries one [`RoutingStrategy`], fixed in its descriptor.
//! Derivation always works on the raw stored values: nothing is padded,
//! truncated or reformatted, so validation and derivation agree on the same
//! input.

use crate::types::bank_account::present;
use std::fmt;

/// The code fields a routing strategy may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeField {
    BankCode,
    BranchCode,
}

impl CodeField {
    fn pick<'a>(&self, bank_code: Option<&'a str>, branch_code: Option<&'a str>) -> Option<&'a str> {
        match self {
            CodeField::BankCode => present(bank_code),
            CodeField::BranchCode => present(branch_code),
        }
    }
}

/// How a country derives its canonical routing identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingStrategy {
    /// No routing concept; the account number identifies the bank
    None,
    /// A single raw field verbatim
    Echo(CodeField),
    /// Two fields joined with no separator
    Concatenated { first: CodeField, second: CodeField },
    /// Two fields joined with `-`
    Hyphenated { first: CodeField, second: CodeField },
    /// One server-wide constant
    Fixed(&'static str),
}

impl RoutingStrategy {
    /// Derive the routing number, or `None` if the strategy has none or a
    /// needed field is absent
    pub fn derive(&self, bank_code: Option<&str>, branch_code: Option<&str>) -> Option<String> {
        match self {
            RoutingStrategy::None => None,
            RoutingStrategy::Echo(field) => field.pick(bank_code, branch_code).map(str::to_string),
            RoutingStrategy::Concatenated { first, second } => {
                let first = first.pick(bank_code, branch_code)?;
                let second = second.pick(bank_code, branch_code)?;
                Some(format!("{first}{second}"))
            }
            RoutingStrategy::Hyphenated { first, second } => {
                let first = first.pick(bank_code, branch_code)?;
                let second = second.pick(bank_code, branch_code)?;
                Some(format!("{first}-{second}"))
            }
            RoutingStrategy::Fixed(literal) => Some((*literal).to_string()),
        }
    }
}

impl fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingStrategy::None => f.write_str("none"),
            RoutingStrategy::Echo(_) => f.write_str("echo"),
            RoutingStrategy::Concatenated { .. } => f.write_str("concatenated"),
            RoutingStrategy::Hyphenated { .. } => f.write_str("hyphenated"),
            RoutingStrategy::Fixed(_) => f.write_str("fixed"),
        }
    }
}
