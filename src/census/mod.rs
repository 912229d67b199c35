//! Census of every formula of one size
//!
//! Enumerates the well-formed formulas with a given number of symbols,
//! keeps those that evaluate to the goal, searches each for a minimal
//! proof and tallies proof lengths, laws and positions over the results.

pub mod enumerator;
pub mod report;

pub use enumerator::{FormulaEnumerator, MIN_SYMBOLS};
pub use report::{CensusEntry, CensusReport, Histogram};

use crate::error::CensusError;
use crate::search::{searcher_for, ParallelConfig, SearchConfig};
use crate::semantics::{classify, Goal};
use std::time::Instant;
use tracing::{debug, info};

/// Census configuration
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Symbols per formula, terminator excluded
    pub symbols: usize,
    pub goal: Goal,
    pub search: SearchConfig,
    /// Used when `search.algorithm` is parallel
    pub parallel: ParallelConfig,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            symbols: 3,
            goal: Goal::Tautology,
            search: SearchConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl CensusConfig {
    pub fn with_symbols(mut self, symbols: usize) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Run the census described by `config`.
pub fn run_census(config: &CensusConfig) -> Result<CensusReport, CensusError> {
    let start_time = Instant::now();
    let enumerator = FormulaEnumerator::new(config.symbols, config.search.slack)?;
    let capacity = config.symbols + 1 + config.search.slack;
    let positions = config.search.position_limit.unwrap_or(capacity).min(capacity);
    let mut report = CensusReport::new(
        config.symbols,
        config.goal,
        config.search.max_length,
        positions,
    );
    let mut searcher = searcher_for(&config.search, &config.parallel);

    info!(
        symbols = config.symbols,
        goal = %config.goal,
        search_space = u64::try_from(enumerator.search_space()).unwrap_or(u64::MAX),
        "starting census"
    );
    for formula in enumerator {
        report.valid_count += 1;
        if !classify(&formula, config.goal).matches(config.goal) {
            continue;
        }
        debug!(index = report.match_count(), %formula, "searching census formula");
        let result = searcher.search(&formula, config.goal, &config.search);
        report.record(&formula, &result.outcome);
    }
    info!(
        valid = report.valid_count,
        matches = report.match_count(),
        holdouts = report.holdout_count(),
        elapsed = ?start_time.elapsed(),
        "census finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Formula;

    #[test]
    fn test_two_symbol_census() {
        let report = run_census(&CensusConfig::default().with_symbols(2)).unwrap();
        assert_eq!(report.valid_count, 3);
        assert_eq!(report.match_count(), 1);
        assert_eq!(report.entries[0].formula.to_string(), "[- F]");
        assert_eq!(
            report.entries[0].proof.as_ref().map(ToString::to_string).as_deref(),
            Some("commutative@0")
        );

        let report = run_census(
            &CensusConfig::default()
                .with_symbols(2)
                .with_goal(Goal::Contradiction),
        )
        .unwrap();
        assert_eq!(report.match_count(), 1);
        assert_eq!(report.entries[0].formula.to_string(), "[- T]");
    }

    #[test]
    fn test_three_symbol_tautologies() {
        let report = run_census(&CensusConfig::default()).unwrap();
        assert_eq!(report.valid_count, 25);
        assert_eq!(report.match_count(), 7);
        assert_eq!(report.proof_lengths.bin(1), &[0, 1, 2, 3, 5, 6]);
        assert_eq!(report.proof_lengths.bin(2), &[4]);
        assert_eq!(report.holdout_count(), 0);

        let longest = report.longest_entry().unwrap();
        let expected: Formula = "+ T x0".parse().unwrap();
        assert_eq!(longest.formula, expected);
        assert_eq!(report.max_proof_length(), 2);
    }

    #[test]
    fn test_census_rejects_one_symbol() {
        assert!(matches!(
            run_census(&CensusConfig::default().with_symbols(1)),
            Err(CensusError::TooFewSymbols { .. })
        ));
    }
}
