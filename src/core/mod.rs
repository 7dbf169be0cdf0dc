//! Core business logic module
//!
//! This module contains the per-country validation and derivation engine:
//! - `grammar` - Declarative field grammars and their compiled form
//! - `routing` - Routing number derivation strategies
//! - `masking` - Account number masking policies
//! - `traits` - The contract every country rule satisfies
//! - `country_rule` - Country descriptors and compiled rules
//! - `countries` - The built-in country table
//! - `registry` - Country code to rule lookup
//! - `validator` - Field validation producing verdicts
//! - `engine` - Facade used by embedding code
//! - `async` - Concurrent batch evaluation

pub mod r#async;
pub mod countries;
pub mod country_rule;
pub mod engine;
pub mod grammar;
pub mod masking;
pub mod registry;
pub mod routing;
pub mod traits;
pub mod validator;

pub use country_rule::{CountryDescriptor, CountryRule};
pub use engine::BankAccountEngine;
pub use r#async::BatchProcessor;
pub use registry::RuleRegistry;
pub use traits::BankAccountRules;
