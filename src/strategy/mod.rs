//! Processing strategy module for bank account validation
//!
//! This module defines the Strategy pattern for complete validation pipelines,
//! encompassing both CSV parsing and rule evaluation. This allows different
//! processing implementations (synchronous, asynchronous batch) to be selected
//! at runtime. Both produce byte-identical output for the same input.

use crate::cli::StrategyType;
use crate::types::EngineError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete validation pipelines
///
/// Each strategy reads bank account rows from a CSV file, evaluates them
/// against the country rules and writes one report line per evaluated row.
pub trait ProcessingStrategy: Send + Sync {
    /// Validate accounts from input file and write reports to output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - The async runtime cannot be started
    ///
    /// Malformed rows and rows naming an unsupported country are logged and
    /// skipped; they never fail the run.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), EngineError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case::sync(StrategyType::Sync)]
    #[case::asynchronous(StrategyType::Async)]
    fn test_create_strategy_processes_input(#[case] strategy_type: StrategyType) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"country,bank_code,branch_code,account_number\nNE,,,NE58NE0380100100130305000268\n")
            .unwrap();
        file.flush().unwrap();

        let strategy = create_strategy(strategy_type, Some(BatchConfig::new(10, 2)));
        let mut output = Vec::new();
        strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "row,country,valid,routing_number,account_number_visual,currency,errors\n\
             1,NE,true,BCAONENI,NE******0268,xof,\n"
        );
    }
}
