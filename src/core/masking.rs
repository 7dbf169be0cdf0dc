//! Account number masking
//!
//! Masking is pure formatting. It never re-validates its input, so it works
//! for previews of partially entered or invalid account numbers.

use std::fmt;

/// Literal run of asterisks standing in for the hidden digits
pub const MASK: &str = "******";

/// Whether the masked visual starts with the country code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPolicy {
    /// `"<CC>******<last4>"`
    Prefixed,
    /// `"******<last4>"`
    Bare,
}

impl MaskPolicy {
    pub fn apply(&self, country: &str, last_four: &str) -> String {
        match self {
            MaskPolicy::Prefixed => format!("{country}{MASK}{last_four}"),
            MaskPolicy::Bare => format!("{MASK}{last_four}"),
        }
    }
}

impl fmt::Display for MaskPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskPolicy::Prefixed => f.write_str("prefixed"),
            MaskPolicy::Bare => f.write_str("bare"),
        }
    }
}
