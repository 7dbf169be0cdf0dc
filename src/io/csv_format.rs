//! CSV format handling for bank account records and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Report and country listing serialization
//!
//! All functions are pure (no I/O beyond the supplied writer) for easy testing.

use crate::core::{BankAccountRules, RuleRegistry};
use crate::types::{AccountRecord, BankAccount, EngineError, RowReport};
use serde::Deserialize;
use std::io::Write;

/// Header of the report output
pub const REPORT_HEADER: [&str; 7] = [
    "row",
    "country",
    "valid",
    "routing_number",
    "account_number_visual",
    "currency",
    "errors",
];

/// Header of the country listing output
pub const COUNTRY_HEADER: [&str; 5] = [
    "country",
    "currency",
    "bank_account_type",
    "routing",
    "masking",
];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// country, bank_code, branch_code, account_number.
/// Empty or missing code columns deserialize to `None`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub country: String,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub branch_code: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

/// Convert a CsvRecord into an AccountRecord for the given data row
///
/// The country code is taken as-is; an unknown code is reported later by the
/// engine rather than here. Only an empty country is rejected.
pub fn convert_csv_record(row: u64, csv_record: CsvRecord) -> Result<AccountRecord, String> {
    if csv_record.country.trim().is_empty() {
        return Err(format!("Row {} has no country", row));
    }

    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    Ok(AccountRecord {
        row,
        account: BankAccount {
            country: csv_record.country,
            bank_code: non_empty(csv_record.bank_code),
            branch_code: non_empty(csv_record.branch_code),
            account_number: non_empty(csv_record.account_number),
            last_four: None,
        },
    })
}

/// Write reports in CSV format
///
/// Reports are sorted by row for deterministic output.
pub fn write_reports_csv(reports: &[RowReport], output: &mut dyn Write) -> Result<(), EngineError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(REPORT_HEADER)?;

    let mut sorted: Vec<&RowReport> = reports.iter().collect();
    sorted.sort_by_key(|report| report.row);

    for RowReport { row, report } in sorted {
        writer.write_record([
            row.to_string(),
            report.country.clone(),
            report.is_valid().to_string(),
            report.routing_number.clone().unwrap_or_default(),
            report.account_number_visual.clone(),
            report.currency.to_string(),
            report.verdict.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write one line per registered country, sorted by country code
pub fn write_countries_csv(
    registry: &RuleRegistry,
    output: &mut dyn Write,
) -> Result<(), EngineError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(COUNTRY_HEADER)?;

    for rule in registry.rules() {
        let routing = rule.routing_strategy().to_string();
        let masking = rule.mask_policy().to_string();
        writer.write_record([
            rule.country_code(),
            rule.currency().as_str(),
            rule.bank_account_type(),
            routing.as_str(),
            masking.as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
