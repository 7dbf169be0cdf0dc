//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `bank_account`: The submitted bank account aggregate and currency codes
//! - `verdict`: Validation verdicts and field-level failures
//! - `report`: Combined per-account output of the engine
//! - `error`: Error types for the engine

pub mod bank_account;
pub mod error;
pub mod report;
pub mod verdict;

pub use bank_account::{AccountRecord, BankAccount, CurrencyCode};
pub use error::EngineError;
pub use report::{AccountReport, RowReport};
pub use verdict::{Field, FieldError, FieldErrorReason, Verdict};
