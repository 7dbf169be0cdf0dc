use crate::strategy::BatchConfig;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Validate payout bank accounts against per-country rules
#[derive(Parser, Debug)]
#[command(name = "payout-bank-accounts")]
#[command(about = "Validate payout bank accounts against per-country rules", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing bank account records
    #[arg(
        value_name = "INPUT",
        required_unless_present = "list_countries",
        help = "Path to the input CSV file"
    )]
    pub input_file: Option<PathBuf>,

    /// Print the supported countries instead of validating
    #[arg(
        long = "list-countries",
        help = "List supported countries with their currency, routing and masking"
    )]
    pub list_countries: bool,

    /// Processing strategy to use for validating accounts
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of accounts per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of accounts per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of worker threads validating partitions (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Log verbosity on stderr
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; zero values are replaced
    /// with the defaults by `BatchConfig::new`, which logs a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads
                    .unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Strategy parsing tests
    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Async)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
        assert_eq!(parsed.input_file, Some(PathBuf::from("input.csv")));
    }

    // Individual config option tests
    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000), None)]
    #[case::worker_threads(&["program", "--worker-threads", "8", "input.csv"], None, Some(8))]
    #[case::no_options(&["program", "input.csv"], None, None)]
    #[case::all_options(
        &["program", "--strategy", "async", "--batch-size", "2000", "--worker-threads", "8", "input.csv"],
        Some(2000),
        Some(8)
    )]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] worker_threads: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.worker_threads, worker_threads);
    }

    // BatchConfig conversion tests
    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_worker_threads(&["program", "--worker-threads", "8", "input.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    #[case::zero_worker_threads(&["program", "--worker-threads", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_worker_threads: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.worker_threads, expected_worker_threads);
    }

    #[rstest]
    #[case::quiet(&["program", "input.csv"], "warn")]
    #[case::info(&["program", "-v", "input.csv"], "info")]
    #[case::debug(&["program", "-vv", "input.csv"], "debug")]
    #[case::trace(&["program", "-vvv", "input.csv"], "trace")]
    #[case::long_flags(&["program", "--verbose", "--verbose", "input.csv"], "debug")]
    #[case::capped(&["program", "-vvvvv", "input.csv"], "trace")]
    fn test_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_filter(), expected);
    }

    #[test]
    fn test_list_countries_needs_no_input() {
        let parsed = CliArgs::try_parse_from(["program", "--list-countries"]).unwrap();
        assert!(parsed.list_countries);
        assert_eq!(parsed.input_file, None);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::non_numeric_batch(&["program", "--batch-size", "many", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
