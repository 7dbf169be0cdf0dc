//! Concurrent per-country outcome counts
//!
//! Shared by every batch task; each task bumps its own country's entry so
//! contention is limited to tasks validating the same country.

use dashmap::DashMap;

/// Valid/invalid counts for one country
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountryTally {
    pub valid: u64,
    pub invalid: u64,
}

impl CountryTally {
    pub fn total(&self) -> u64 {
        self.valid + self.invalid
    }
}

/// Thread-safe map from country code to [`CountryTally`]
#[derive(Debug, Default)]
pub struct TallyBoard {
    tallies: DashMap<String, CountryTally>,
}

impl TallyBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluated account
    pub fn record(&self, country: &str, valid: bool) {
        let mut tally = self.tallies.entry(country.to_string()).or_default();
        if valid {
            tally.valid += 1;
        } else {
            tally.invalid += 1;
        }
    }

    /// Tally for a country, zero if none were seen
    pub fn get(&self, country: &str) -> CountryTally {
        self.tallies
            .get(country)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    /// Snapshot of every tally, sorted by country code
    pub fn snapshot(&self) -> Vec<(String, CountryTally)> {
        let mut tallies: Vec<_> = self
            .tallies
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        tallies.sort_by(|a, b| a.0.cmp(&b.0));
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_and_get() {
        let board = TallyBoard::new();
        board.record("DE", true);
        board.record("DE", false);
        board.record("DE", true);

        assert_eq!(board.get("DE"), CountryTally { valid: 2, invalid: 1 });
        assert_eq!(board.get("DE").total(), 3);
        assert_eq!(board.get("FR"), CountryTally::default());
    }

    #[test]
    fn test_snapshot_sorted() {
        let board = TallyBoard::new();
        board.record("US", true);
        board.record("AL", false);

        let countries: Vec<_> = board.snapshot().into_iter().map(|(c, _)| c).collect();
        assert_eq!(countries, vec!["AL", "US"]);
    }

    #[test]
    fn test_concurrent_records() {
        let board = Arc::new(TallyBoard::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let board = Arc::clone(&board);
                thread::spawn(move || {
                    for _ in 0..100 {
                        board.record("GB", i % 2 == 0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(board.get("GB"), CountryTally { valid: 400, invalid: 400 });
    }
}
