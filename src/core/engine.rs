//! Bank account engine
//!
//! The entry point for embedding code. Every operation resolves the
//! country's rule through the registry first; an unknown country is the only
//! way an operation can fail.
//!
//! # Operations
//!
//! - [`validate`](BankAccountEngine::validate): grammar conformance of the raw fields
//! - [`routing_number`](BankAccountEngine::routing_number): canonical routing identifier
//! - [`account_number_visual`](BankAccountEngine::account_number_visual): masked display string
//! - [`currency`](BankAccountEngine::currency): settlement currency
//! - [`evaluate`](BankAccountEngine::evaluate): all of the above for one [`BankAccount`]

use super::registry::RuleRegistry;
use super::traits::BankAccountRules;
use super::validator::validate_fields;
use crate::types::{AccountReport, BankAccount, CurrencyCode, EngineError, Verdict};

/// Stateless facade over a rule registry
///
/// Cheap to copy; holds only a reference to its registry.
#[derive(Debug, Clone, Copy)]
pub struct BankAccountEngine<'r> {
    registry: &'r RuleRegistry,
}

impl Default for BankAccountEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl BankAccountEngine<'static> {
    /// Engine over the built-in country registry
    pub fn new() -> Self {
        BankAccountEngine {
            registry: RuleRegistry::global(),
        }
    }
}

impl<'r> BankAccountEngine<'r> {
    /// Engine over a custom registry
    pub fn with_registry(registry: &'r RuleRegistry) -> Self {
        BankAccountEngine { registry }
    }

    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }

    /// Resolve the rule for a country
    pub fn rules(&self, country: &str) -> Result<&'r dyn BankAccountRules, EngineError> {
        let rule = self.registry.get(country)?;
        Ok(rule as &dyn BankAccountRules)
    }

    /// Check raw fields against the country's grammars
    pub fn validate(
        &self,
        country: &str,
        bank_code: Option<&str>,
        branch_code: Option<&str>,
        account_number: Option<&str>,
    ) -> Result<Verdict, EngineError> {
        let rules = self.rules(country)?;
        Ok(validate_fields(rules, bank_code, branch_code, account_number))
    }

    /// Derive the country's routing number from raw codes
    pub fn routing_number(
        &self,
        country: &str,
        bank_code: Option<&str>,
        branch_code: Option<&str>,
    ) -> Result<Option<String>, EngineError> {
        Ok(self.rules(country)?.routing_number(bank_code, branch_code))
    }

    /// Mask a last-four fragment with the country's policy
    pub fn account_number_visual(
        &self,
        country: &str,
        last_four: &str,
    ) -> Result<String, EngineError> {
        Ok(self.rules(country)?.account_number_visual(last_four))
    }

    /// Settlement currency for payouts to the country
    pub fn currency(&self, country: &str) -> Result<CurrencyCode, EngineError> {
        Ok(self.rules(country)?.currency())
    }

    /// Bank account type tag for the country
    pub fn bank_account_type(&self, country: &str) -> Result<&'r str, EngineError> {
        Ok(self.rules(country)?.bank_account_type())
    }

    /// Run every operation for one submitted account
    ///
    /// Derivation and masking are computed even when validation fails.
    pub fn evaluate(&self, account: &BankAccount) -> Result<AccountReport, EngineError> {
        let rules = self.rules(&account.country)?;
        let bank_code = account.bank_code.as_deref();
        let branch_code = account.branch_code.as_deref();

        Ok(AccountReport {
            country: account.country.clone(),
            verdict: validate_fields(
                rules,
                bank_code,
                branch_code,
                account.account_number.as_deref(),
            ),
            routing_number: rules.routing_number(bank_code, branch_code),
            account_number_visual: rules
                .account_number_visual(&account.account_number_last_four()),
            currency: rules.currency(),
        })
    }
}
