//! Rule registry
//!
//! Maps country codes to compiled [`CountryRule`]s. The process-wide
//! registry is built on first use and never mutated afterwards; lookups are a
//! single hash probe and need no locking.

use super::countries::COUNTRIES;
use super::country_rule::{CountryDescriptor, CountryRule};
use crate::types::EngineError;
use std::collections::HashMap;
use std::sync::LazyLock;

static GLOBAL_REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(|| {
    RuleRegistry::from_descriptors(COUNTRIES).expect("Invalid built-in country descriptor")
});

/// Read-only table of country rules
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: HashMap<&'static str, CountryRule>,
}

impl RuleRegistry {
    /// The shared registry of every built-in country
    pub fn global() -> &'static RuleRegistry {
        &GLOBAL_REGISTRY
    }

    /// Compile a registry from descriptors
    ///
    /// A later descriptor for an already registered country replaces the
    /// earlier one; the built-in table is tested to contain no duplicates.
    pub fn from_descriptors(descriptors: &[CountryDescriptor]) -> Result<Self, EngineError> {
        let rules = descriptors
            .iter()
            .map(|descriptor| Ok((descriptor.country, descriptor.compile()?)))
            .collect::<Result<HashMap<_, _>, EngineError>>()?;

        Ok(RuleRegistry { rules })
    }

    /// Look up a country's rule
    ///
    /// Codes are matched exactly (upper-case ISO 3166-1 alpha-2).
    pub fn get(&self, country: &str) -> Result<&CountryRule, EngineError> {
        self.rules
            .get(country)
            .ok_or_else(|| EngineError::unsupported_country(country))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.rules.contains_key(country)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Supported country codes in sorted order
    pub fn country_codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.rules.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Rules sorted by country code
    pub fn rules(&self) -> Vec<&CountryRule> {
        let mut rules: Vec<_> = self.rules.values().collect();
        rules.sort_by_key(|rule| rule.descriptor().country);
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::{FieldGrammar, Shape};
    use crate::core::traits::BankAccountRules;
    use crate::types::Field;
    use rstest::rstest;

    #[test]
    fn test_global_registry_has_every_descriptor() {
        let registry = RuleRegistry::global();
        assert_eq!(registry.len(), COUNTRIES.len());
        assert!(!registry.is_empty());
        for descriptor in COUNTRIES {
            assert!(registry.contains(descriptor.country));
        }
    }

    #[test]
    fn test_every_rule_reports_its_own_key() {
        let registry = RuleRegistry::global();
        for code in registry.country_codes() {
            let rule = registry.get(code).unwrap();
            assert_eq!(rule.country_code(), code);
            assert!(!rule.bank_account_type().is_empty());
            assert!(!rule.currency().as_str().is_empty());
        }
    }

    #[rstest]
    #[case::unknown("XX")]
    #[case::lower_case("us")]
    #[case::empty("")]
    #[case::alpha3("USA")]
    fn test_unsupported_country(#[case] country: &str) {
        let error = RuleRegistry::global().get(country).unwrap_err();
        assert_eq!(error, EngineError::unsupported_country(country));
    }

    #[test]
    fn test_invalid_descriptor_fails_to_build() {
        let descriptors = [CountryDescriptor::new("XX", "xxx", FieldGrammar::pattern("^(XX$"))];
        let result = RuleRegistry::from_descriptors(&descriptors);
        assert!(matches!(result, Err(EngineError::InvalidPattern { .. })));
    }

    #[test]
    fn test_country_codes_sorted() {
        let codes = RuleRegistry::global().country_codes();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes.first(), Some(&"AD"));
    }

    #[test]
    fn test_length_grammars_accept_every_in_class_value_of_their_bounds() {
        let mut failures = Vec::new();

        for rule in RuleRegistry::global().rules() {
            for field in [Field::BankCode, Field::BranchCode, Field::AccountNumber] {
                let compiled = rule.grammar(field);
                let Shape::Length { min, max, .. } = compiled.grammar().shape else {
                    continue;
                };

                // A digit belongs to every character class
                let value = |len: usize| "1".repeat(len);
                let country = rule.country_code();

                for len in [min, max] {
                    if !compiled.accepts(Some(&value(len))) {
                        failures.push(format!("{country} {field} rejects {}", value(len)));
                    }
                }
                if min > 1 && compiled.accepts(Some(&value(min - 1))) {
                    failures.push(format!("{country} {field} accepts {}", value(min - 1)));
                }
                if compiled.accepts(Some(&value(max + 1))) {
                    failures.push(format!("{country} {field} accepts {}", value(max + 1)));
                }
            }
        }

        assert!(failures.is_empty(), "{failures:?}");
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
    }
}
