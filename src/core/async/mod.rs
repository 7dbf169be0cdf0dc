//! Concurrent batch evaluation
//!
//! Country rules are immutable and shared, so evaluation parallelizes with no
//! locking. The only shared mutable state is the per-country tally, kept in a
//! DashMap.
//!
//! - **BatchProcessor**: partitions a batch by country and evaluates each
//!   partition on its own tokio task
//! - **TallyBoard**: concurrent valid/invalid counts per country

pub mod batch_processor;
pub mod tally;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use tally::{CountryTally, TallyBoard};
