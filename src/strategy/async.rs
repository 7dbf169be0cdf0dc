//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. Accounts are read in batches; each batch is
//! partitioned by country and the partitions are validated in parallel.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (country partitioning + tokio tasks)
//!         ├── BankAccountEngine (shared, read-only rules)
//!         └── TallyBoard (DashMap of per-country counts)
//! ```
//!
//! Country rules are immutable, so partitions never coordinate. Reports are
//! re-sorted by row before output, which keeps the output identical to the
//! synchronous strategy.

use crate::core::r#async::{BatchProcessor, TallyBoard};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_reports_csv;
use crate::strategy::ProcessingStrategy;
use crate::types::{EngineError, RowReport};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how accounts are batched and the number of worker threads
/// for parallel validation within each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of accounts per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing zero values with the defaults
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// # Configuration
///
/// The strategy accepts a BatchConfig with:
/// - `batch_size`: Number of accounts per batch (default: 1000)
/// - `worker_threads`: Number of worker threads (default: CPU cores)
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    async fn run(&self, input_path: &Path) -> Result<(Vec<RowReport>, Arc<TallyBoard>), EngineError> {
        let tally = Arc::new(TallyBoard::new());
        let processor = BatchProcessor::new(Arc::clone(&tally));

        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => EngineError::file_not_found(&input_path.display().to_string()),
                _ => EngineError::from(e),
            })?;

        // csv-async reads futures-io, tokio files need the compat layer
        let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
        let mut reader = AsyncReader::new(compat_file);

        let mut reports = Vec::new();
        loop {
            let batch = reader.read_batch(self.config.batch_size).await;
            if batch.is_empty() {
                break;
            }

            tracing::debug!(records = batch.len(), "processing batch");

            for result in processor.process_batch(batch).await? {
                match result.result {
                    Ok(report) => reports.push(RowReport {
                        row: result.row,
                        report,
                    }),
                    Err(e) => tracing::warn!(row = result.row, country = %result.country, "{}", e),
                }
            }
        }

        Ok((reports, tally))
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Validate accounts from input file and write reports to output
    ///
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Reads accounts in batches from CSV using AsyncReader
    /// 3. Validates each batch, one task per country, before reading the next;
    ///    a failed partition task aborts the run
    /// 4. Logs the per-country tally
    /// 5. Writes reports to output using csv_format::write_reports_csv
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(|e| EngineError::runtime(&format!("Failed to create tokio runtime: {}", e)))?;

        let (reports, tally) = runtime.block_on(self.run(input_path))?;

        for (country, counts) in tally.snapshot() {
            tracing::info!(
                country = %country,
                valid = counts.valid,
                invalid = counts.invalid,
                "country summary"
            );
        }

        write_reports_csv(&reports, output)?;

        Ok(())
    }
}
