//! Format grammars for bank account fields
//!
//! A [`FieldGrammar`] is a const-constructible description of the accepted
//! shapes for one field in one country. Country descriptors are declared with
//! these at compile time; the registry turns each into a [`CompiledGrammar`]
//! (compiling any regex once) when it is built.
//!
//! Matching is case-sensitive. Values are never trimmed, padded, or
//! upper-cased here; the embedding layer is responsible for trimming.

use crate::types::bank_account::present;
use crate::types::{EngineError, Field, FieldErrorReason};
use regex::Regex;

/// Character class for length-bounded grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digits only
    Digit,
    /// ASCII digits and upper-case letters (BIC-style codes)
    UpperAlphanumeric,
    /// ASCII digits and letters of either case
    Alphanumeric,
}

impl CharClass {
    pub fn admits(&self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::UpperAlphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
            CharClass::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

/// Whether an absent value is acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Accepted shape of a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The country has no such field; any input (or none) is ignored
    Unused,
    /// No enforced structure beyond being non-empty
    AnyNonEmpty,
    /// Inclusive length bounds over a character class
    Length {
        class: CharClass,
        min: usize,
        max: usize,
    },
    /// Anchored regular expression
    Pattern(&'static str),
}

/// Declarative grammar for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGrammar {
    pub shape: Shape,
    pub presence: Presence,
}

impl FieldGrammar {
    const fn required(shape: Shape) -> Self {
        FieldGrammar {
            shape,
            presence: Presence::Required,
        }
    }

    /// Field not used by the country
    pub const fn unused() -> Self {
        FieldGrammar {
            shape: Shape::Unused,
            presence: Presence::Optional,
        }
    }

    /// Any non-empty value
    pub const fn any_non_empty() -> Self {
        Self::required(Shape::AnyNonEmpty)
    }

    /// `min..=max` ASCII digits
    pub const fn digits(min: usize, max: usize) -> Self {
        Self::required(Shape::Length {
            class: CharClass::Digit,
            min,
            max,
        })
    }

    /// `min..=max` upper-case letters or digits
    pub const fn upper_alphanumeric(min: usize, max: usize) -> Self {
        Self::required(Shape::Length {
            class: CharClass::UpperAlphanumeric,
            min,
            max,
        })
    }

    /// `min..=max` letters or digits, either case
    pub const fn alphanumeric(min: usize, max: usize) -> Self {
        Self::required(Shape::Length {
            class: CharClass::Alphanumeric,
            min,
            max,
        })
    }

    /// An anchored regular expression
    pub const fn pattern(regex: &'static str) -> Self {
        Self::required(Shape::Pattern(regex))
    }

    /// Accept an absent value
    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Compile the grammar, building its regex if it has one
    pub fn compile(&self, country: &str, field: Field) -> Result<CompiledGrammar, EngineError> {
        let regex = match self.shape {
            Shape::Pattern(pattern) => Some(Regex::new(pattern).map_err(|e| {
                EngineError::invalid_pattern(country, field.as_str(), &e.to_string())
            })?),
            _ => None,
        };

        Ok(CompiledGrammar {
            grammar: *self,
            regex,
        })
    }
}

/// A grammar ready for matching
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    grammar: FieldGrammar,
    regex: Option<Regex>,
}

impl CompiledGrammar {
    /// The declarative grammar this was compiled from
    pub fn grammar(&self) -> &FieldGrammar {
        &self.grammar
    }

    /// False when the country has no such field
    pub fn is_used(&self) -> bool {
        self.grammar.shape != Shape::Unused
    }

    /// Check a raw value against the grammar
    ///
    /// Empty strings are treated as absent. Absent values pass when the
    /// grammar is optional or unused.
    pub fn check(&self, value: Option<&str>) -> Result<(), FieldErrorReason> {
        if !self.is_used() {
            return Ok(());
        }

        let value = match present(value) {
            Some(value) => value,
            None if self.grammar.presence == Presence::Optional => return Ok(()),
            None => return Err(FieldErrorReason::Missing),
        };

        if !self.matches_shape(value) {
            return Err(FieldErrorReason::Malformed);
        }

        Ok(())
    }

    /// Convenience wrapper over [`check`](Self::check)
    pub fn accepts(&self, value: Option<&str>) -> bool {
        self.check(value).is_ok()
    }

    fn matches_shape(&self, value: &str) -> bool {
        match self.grammar.shape {
            Shape::Unused | Shape::AnyNonEmpty => true,
            Shape::Length { class, min, max } => {
                let len = value.chars().count();
                (min..=max).contains(&len) && value.chars().all(|c| class.admits(c))
            }
            Shape::Pattern(_) => self
                .regex
                .as_ref()
                .is_some_and(|regex| regex.is_match(value)),
        }
    }
}
