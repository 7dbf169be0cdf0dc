//! Batch evaluation with country-based partitioning
//!
//! This module provides the `BatchProcessor` struct, which evaluates a batch
//! of bank accounts concurrently. The batch is partitioned by country and
//! each partition runs on its own tokio task.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── BankAccountEngine<'static>  (stateless, over the global registry)
//!     └── Arc<TallyBoard>             (shared per-country counts)
//! ```
//!
//! # Thread Safety
//!
//! The engine only reads the immutable registry, so partitions need no
//! coordination. The tally board uses DashMap for its counters.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::tally::TallyBoard;
use crate::core::BankAccountEngine;
use crate::types::{AccountRecord, AccountReport, EngineError};

/// Result of evaluating a single record
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Input row of the record
    pub row: u64,

    /// Country code as submitted
    pub country: String,

    /// The report, or the lookup failure for an unsupported country
    pub result: Result<AccountReport, EngineError>,
}

/// Batch processor with country-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    engine: BankAccountEngine<'static>,
    tally: Arc<TallyBoard>,
}

impl BatchProcessor {
    /// Create a new BatchProcessor over the built-in registry
    pub fn new(tally: Arc<TallyBoard>) -> Self {
        Self {
            engine: BankAccountEngine::new(),
            tally,
        }
    }

    /// Partition a batch of records by country code
    ///
    /// Each record appears in exactly one partition and partitions keep the
    /// input order.
    pub fn partition_by_country(
        &self,
        batch: Vec<AccountRecord>,
    ) -> HashMap<String, Vec<AccountRecord>> {
        let mut country_batches: HashMap<String, Vec<AccountRecord>> = HashMap::new();

        for record in batch {
            country_batches
                .entry(record.account.country.clone())
                .or_default()
                .push(record);
        }

        country_batches
    }

    /// Evaluate every record of one partition in order
    pub fn process_country_records(&self, records: Vec<AccountRecord>) -> Vec<ProcessingResult> {
        records
            .into_iter()
            .map(|record| {
                let result = self.engine.evaluate(&record.account);
                if let Ok(report) = &result {
                    self.tally.record(&report.country, report.is_valid());
                }
                ProcessingResult {
                    row: record.row,
                    country: record.account.country,
                    result,
                }
            })
            .collect()
    }

    /// Evaluate a batch, one tokio task per country
    ///
    /// Results come back sorted by input row. If any partition task fails,
    /// the whole batch fails rather than dropping that country's rows.
    pub async fn process_batch(
        &self,
        batch: Vec<AccountRecord>,
    ) -> Result<Vec<ProcessingResult>, EngineError> {
        let country_batches = self.partition_by_country(batch);

        let mut tasks = Vec::with_capacity(country_batches.len());
        for (country, records) in country_batches {
            let processor = self.clone();
            let task = tokio::spawn(async move { processor.process_country_records(records) });
            tasks.push((country, task));
        }

        join_partitions(tasks).await
    }
}

/// Await every partition task and merge their results in row order
///
/// All tasks are awaited even after a failure; the first failure is returned.
async fn join_partitions(
    tasks: Vec<(String, JoinHandle<Vec<ProcessingResult>>)>,
) -> Result<Vec<ProcessingResult>, EngineError> {
    let mut results = Vec::new();
    let mut failure = None;

    for (country, task) in tasks {
        match task.await {
            Ok(country_results) => results.extend(country_results),
            Err(e) => {
                tracing::error!(country = %country, error = %e, "partition task failed");
                failure.get_or_insert_with(|| {
                    EngineError::runtime(&format!("Validation task for {} failed: {}", country, e))
                });
            }
        }
    }

    if let Some(error) = failure {
        return Err(error);
    }

    results.sort_by_key(|result| result.row);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BankAccount;

    fn record(row: u64, account: BankAccount) -> AccountRecord {
        AccountRecord { row, account }
    }

    fn sample_batch() -> Vec<AccountRecord> {
        vec![
            record(1, BankAccount::new("DE").with_account_number("DE89370400440532013000")),
            record(
                2,
                BankAccount::new("US")
                    .with_bank_code("110000000")
                    .with_account_number("000123456789"),
            ),
            record(3, BankAccount::new("DE").with_account_number("DE8937040044053201300")),
            record(4, BankAccount::new("XX").with_account_number("1234")),
        ]
    }

    #[test]
    fn test_partition_by_country() {
        let processor = BatchProcessor::new(Arc::new(TallyBoard::new()));
        let partitioned = processor.partition_by_country(sample_batch());

        assert_eq!(partitioned.len(), 3);
        let rows: Vec<u64> = partitioned["DE"].iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![1, 3]);
        assert_eq!(partitioned["US"].len(), 1);
        assert_eq!(partitioned["XX"].len(), 1);
    }

    #[test]
    fn test_partition_empty_batch() {
        let processor = BatchProcessor::new(Arc::new(TallyBoard::new()));
        assert!(processor.partition_by_country(vec![]).is_empty());
    }

    #[test]
    fn test_processor_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BatchProcessor>();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_process_batch_sorted_by_row() {
        let processor = BatchProcessor::new(Arc::new(TallyBoard::new()));
        let results = processor.process_batch(sample_batch()).await.unwrap();

        let rows: Vec<u64> = results.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);

        assert!(results[0].result.as_ref().unwrap().is_valid());
        assert!(results[1].result.as_ref().unwrap().is_valid());
        assert!(!results[2].result.as_ref().unwrap().is_valid());
        assert_eq!(
            results[3].result,
            Err(EngineError::unsupported_country("XX"))
        );
    }

    #[tokio::test]
    async fn test_process_batch_tallies_supported_countries() {
        let tally = Arc::new(TallyBoard::new());
        let processor = BatchProcessor::new(Arc::clone(&tally));
        processor.process_batch(sample_batch()).await.unwrap();

        assert_eq!(tally.get("DE").valid, 1);
        assert_eq!(tally.get("DE").invalid, 1);
        assert_eq!(tally.get("US").valid, 1);
        assert_eq!(tally.get("XX").total(), 0);
    }

    #[tokio::test]
    async fn test_failed_partition_fails_the_batch() {
        let processor = BatchProcessor::new(Arc::new(TallyBoard::new()));
        let good = vec![record(
            1,
            BankAccount::new("DE").with_account_number("DE89370400440532013000"),
        )];
        let crashed: JoinHandle<Vec<ProcessingResult>> =
            tokio::spawn(async { panic!("partition worker crashed") });
        let tasks = vec![
            (
                "DE".to_string(),
                tokio::spawn(async move { processor.process_country_records(good) }),
            ),
            ("FR".to_string(), crashed),
        ];

        let error = join_partitions(tasks).await.unwrap_err();

        assert!(matches!(error, EngineError::RuntimeError { .. }));
        assert!(error.to_string().contains("FR"), "{error}");
    }

    #[tokio::test]
    async fn test_join_partitions_sorts_rows() {
        let tasks = vec![
            (
                "DE".to_string(),
                tokio::spawn(async {
                    vec![ProcessingResult {
                        row: 3,
                        country: "DE".to_string(),
                        result: Err(EngineError::unsupported_country("DE")),
                    }]
                }),
            ),
            (
                "XX".to_string(),
                tokio::spawn(async {
                    vec![ProcessingResult {
                        row: 1,
                        country: "XX".to_string(),
                        result: Err(EngineError::unsupported_country("XX")),
                    }]
                }),
            ),
        ];

        let rows: Vec<u64> = join_partitions(tasks)
            .await
            .unwrap()
            .iter()
            .map(|r| r.row)
            .collect();
        assert_eq!(rows, vec![1, 3]);
    }
}
