//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates validation by coordinating
//! between the SyncReader (for CSV input) and BankAccountEngine (for the
//! country rules).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Rule evaluation to `BankAccountEngine`
//! - CSV output to `csv_format::write_reports_csv` (format handling)
//!
//! Records are streamed one at a time; only the reports are held until the
//! end of the input.

use crate::core::BankAccountEngine;
use crate::io::csv_format::write_reports_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{EngineError, RowReport};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use payout_bank_accounts::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("accounts.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Validate accounts from input file and write reports to output
    ///
    /// 1. Creates a SyncReader to stream account records from the CSV file
    /// 2. Evaluates each record against its country's rules
    /// 3. Writes reports to output using csv_format::write_reports_csv
    ///
    /// Fatal errors (file not found, I/O errors) are returned immediately.
    /// Row-level problems are logged and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), EngineError> {
        let engine = BankAccountEngine::new();
        let reader = SyncReader::new(input_path)?;

        let mut reports = Vec::new();
        for result in reader {
            match result {
                Ok(record) => match engine.evaluate(&record.account) {
                    Ok(report) => {
                        tracing::debug!(row = record.row, country = %report.country, valid = report.is_valid(), "evaluated");
                        reports.push(RowReport {
                            row: record.row,
                            report,
                        });
                    }
                    Err(e) => tracing::warn!(row = record.row, "{}", e),
                },
                Err(e) => tracing::warn!("{}", e),
            }
        }

        tracing::info!(reports = reports.len(), "validation finished");

        write_reports_csv(&reports, output)?;

        Ok(())
    }
}
