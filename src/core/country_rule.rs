//! Country rule variants
//!
//! A [`CountryDescriptor`] is the static, declarative definition of one
//! country. The registry compiles each descriptor into a [`CountryRule`],
//! which implements [`BankAccountRules`].

use super::grammar::{CompiledGrammar, FieldGrammar};
use super::masking::MaskPolicy;
use super::routing::RoutingStrategy;
use super::traits::BankAccountRules;
use crate::types::{CurrencyCode, EngineError, Field, FieldErrorReason};

/// Declarative definition of one supported country
#[derive(Debug, Clone, Copy)]
pub struct CountryDescriptor {
    pub country: &'static str,
    pub currency: CurrencyCode,
    pub bank_account_type: &'static str,
    pub bank_code: FieldGrammar,
    pub branch_code: FieldGrammar,
    pub account_number: FieldGrammar,
    pub routing: RoutingStrategy,
    pub mask: MaskPolicy,
}

impl CountryDescriptor {
    /// A country whose type tag is its own code, with no bank or branch code,
    /// no routing number and a prefixed mask. Adjust with the `with_*` builders.
    pub const fn new(
        country: &'static str,
        currency: &'static str,
        account_number: FieldGrammar,
    ) -> Self {
        CountryDescriptor {
            country,
            currency: CurrencyCode::new(currency),
            bank_account_type: country,
            bank_code: FieldGrammar::unused(),
            branch_code: FieldGrammar::unused(),
            account_number,
            routing: RoutingStrategy::None,
            mask: MaskPolicy::Prefixed,
        }
    }

    pub const fn with_type(mut self, bank_account_type: &'static str) -> Self {
        self.bank_account_type = bank_account_type;
        self
    }

    pub const fn with_bank_code(mut self, grammar: FieldGrammar) -> Self {
        self.bank_code = grammar;
        self
    }

    pub const fn with_branch_code(mut self, grammar: FieldGrammar) -> Self {
        self.branch_code = grammar;
        self
    }

    pub const fn with_routing(mut self, routing: RoutingStrategy) -> Self {
        self.routing = routing;
        self
    }

    pub const fn with_mask(mut self, mask: MaskPolicy) -> Self {
        self.mask = mask;
        self
    }

    /// Compile every grammar of the descriptor
    pub fn compile(&self) -> Result<CountryRule, EngineError> {
        Ok(CountryRule {
            descriptor: *self,
            bank_code: self.bank_code.compile(self.country, Field::BankCode)?,
            branch_code: self.branch_code.compile(self.country, Field::BranchCode)?,
            account_number: self
                .account_number
                .compile(self.country, Field::AccountNumber)?,
        })
    }
}

/// A compiled, ready-to-use country rule
#[derive(Debug, Clone)]
pub struct CountryRule {
    descriptor: CountryDescriptor,
    bank_code: CompiledGrammar,
    branch_code: CompiledGrammar,
    account_number: CompiledGrammar,
}

impl CountryRule {
    pub fn descriptor(&self) -> &CountryDescriptor {
        &self.descriptor
    }

    pub fn grammar(&self, field: Field) -> &CompiledGrammar {
        match field {
            Field::BankCode => &self.bank_code,
            Field::BranchCode => &self.branch_code,
            Field::AccountNumber => &self.account_number,
        }
    }

    pub fn routing_strategy(&self) -> RoutingStrategy {
        self.descriptor.routing
    }

    pub fn mask_policy(&self) -> MaskPolicy {
        self.descriptor.mask
    }
}

impl BankAccountRules for CountryRule {
    fn country_code(&self) -> &str {
        self.descriptor.country
    }

    fn bank_account_type(&self) -> &str {
        self.descriptor.bank_account_type
    }

    fn currency(&self) -> CurrencyCode {
        self.descriptor.currency
    }

    fn check_field(&self, field: Field, value: Option<&str>) -> Result<(), FieldErrorReason> {
        self.grammar(field).check(value)
    }

    fn routing_number(
        &self,
        bank_code: Option<&str>,
        branch_code: Option<&str>,
    ) -> Option<String> {
        self.descriptor.routing.derive(bank_code, branch_code)
    }

    fn account_number_visual(&self, last_four: &str) -> String {
        self.descriptor.mask.apply(self.descriptor.country, last_four)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routing::CodeField;

    fn sample() -> CountryRule {
        CountryDescriptor::new("AZ", "azn", FieldGrammar::pattern(r"^AZ\d{2}[A-Z]{4}[0-9A-Z]{20}$"))
            .with_bank_code(FieldGrammar::digits(6, 6))
            .with_branch_code(FieldGrammar::digits(6, 6))
            .with_routing(RoutingStrategy::Hyphenated {
                first: CodeField::BankCode,
                second: CodeField::BranchCode,
            })
            .compile()
            .unwrap()
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = CountryDescriptor::new("CR", "crc", FieldGrammar::any_non_empty());
        assert_eq!(descriptor.bank_account_type, "CR");
        assert_eq!(descriptor.routing, RoutingStrategy::None);
        assert_eq!(descriptor.mask, MaskPolicy::Prefixed);
        assert_eq!(descriptor.bank_code, FieldGrammar::unused());
        assert_eq!(descriptor.branch_code, FieldGrammar::unused());
    }

    #[test]
    fn test_rule_contract() {
        let rule = sample();
        assert_eq!(rule.country_code(), "AZ");
        assert_eq!(rule.bank_account_type(), "AZ");
        assert_eq!(rule.currency().as_str(), "azn");
        assert!(rule.is_valid_bank_code(Some("123456")));
        assert!(!rule.is_valid_bank_code(Some("12345")));
        assert!(rule.is_valid_branch_code(Some("123456")));
        assert!(rule.is_valid_account_number(Some("AZ21NABZ00000000137010001944")));
        assert_eq!(
            rule.routing_number(Some("123456"), Some("123456")).as_deref(),
            Some("123456-123456")
        );
        assert_eq!(rule.account_number_visual("1944"), "AZ******1944");
    }

    #[test]
    fn test_check_field_reasons() {
        let rule = sample();
        assert_eq!(
            rule.check_field(Field::BranchCode, None),
            Err(FieldErrorReason::Missing)
        );
        assert_eq!(
            rule.check_field(Field::AccountNumber, Some("az21nabz00000000137010001944")),
            Err(FieldErrorReason::Malformed)
        );
    }
}
