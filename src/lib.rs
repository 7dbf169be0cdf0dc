//! Payout Bank Accounts Library
//! # Overview
//!
//! Per-country validation of the bank accounts sellers register to receive
//! payouts. Every supported country is one declarative rule: a grammar for
//! each of bank code, branch code and account number, a routing number
//! strategy, a masking policy, a payout currency and a bank account type.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (BankAccount, Verdict, AccountReport, EngineError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Rule evaluation:
//!   - [`core::countries`] - The supported country table
//!   - [`core::registry`] - Compiled rules keyed by country code
//!   - [`core::engine`] - Validation, routing derivation and masking entry points
//!   - [`core::r#async`] - Country-partitioned batch evaluation
//! - [`io`] - CSV input and report output
//! - [`strategy`] - Sync and async batch pipelines
//!
//! # Example
//!
//! ```
//! use payout_bank_accounts::BankAccountEngine;
//!
//! let engine = BankAccountEngine::new();
//! let verdict = engine.validate("AZ", Some("123456"), Some("123456"), Some("AZ21NABZ00000000137010001944")).unwrap();
//! assert!(verdict.is_valid());
//! assert_eq!(
//!     engine.routing_number("AZ", Some("123456"), Some("123456")).unwrap().as_deref(),
//!     Some("123456-123456")
//! );
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{BankAccountEngine, BankAccountRules, CountryDescriptor, CountryRule, RuleRegistry};
pub use io::{write_countries_csv, write_reports_csv};
pub use types::{
    AccountRecord, AccountReport, BankAccount, CurrencyCode, EngineError, Field, FieldError,
    FieldErrorReason, RowReport, Verdict,
};
