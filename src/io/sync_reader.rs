//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over bank account records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<AccountRecord, String>` for each CSV row:
//!
//! ```no_run
//! use payout_bank_accounts::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("accounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Row {}: {}", record.row, record.account.country),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants
//! - Every data row consumes a row number, even when it fails to parse

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AccountRecord, EngineError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    row: u64,
}

impl SyncReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and allows rows with
    /// trailing columns omitted.
    pub fn new(path: &Path) -> Result<Self, EngineError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EngineError::file_not_found(&path.display().to_string()),
            _ => EngineError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader, row: 0 })
    }
}

impl Iterator for SyncReader {
    type Item = Result<AccountRecord, String>;

    /// Get the next bank account record
    ///
    /// Errors carry the file line (data row + 1 for the header).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.row += 1;

        Some(match next {
            Ok(csv_record) => convert_csv_record(self.row, csv_record)
                .map_err(|e| format!("Line {}: {}", self.row + 1, e)),
            Err(e) => Err(format!("Line {}: CSV parse error: {}", self.row + 1, e)),
        })
    }
}
