//! Asynchronous CSV reader with stream interface
//!
//! Provides a streaming interface over bank account records from a CSV file.
//! Supports batch reading for efficient async processing.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio for async runtime and concurrency primitives
//! - Batch reading for efficient processing
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of AccountRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::AccountRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over bank account records.
/// Row numbers keep counting across batches.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    row: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader, row: 0 }
    }

    /// Read a batch of bank account records
    ///
    /// Reads up to `batch_size` rows from the CSV input, converting them to
    /// AccountRecords. Rows that fail to parse are logged and skipped, but
    /// still consume a row number.
    ///
    /// Returns an empty vector when the end of the input is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<AccountRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => {
                    self.row += 1;
                    match convert_csv_record(self.row, csv_record) {
                        Ok(account_record) => batch.push(account_record),
                        Err(e) => tracing::warn!(line = self.row + 1, "{}", e),
                    }
                }
                Some(Err(e)) => {
                    self.row += 1;
                    tracing::warn!(line = self.row + 1, error = %e, "CSV parse error");
                }
                None => break,
            }
        }

        batch
    }
}
