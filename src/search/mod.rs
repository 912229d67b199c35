//! Minimal-length proof search
//!
//! A proof is a sequence of `(law, position)` steps that rewrites a formula
//! down to its goal constant. Two drivers share the same candidate order:
//! - Enumerative: every candidate replayed on the calling thread
//! - Parallel: each length's candidates split into chunks across worker threads
//!
//! Both return the shortest proof and, among proofs of that length, the
//! first one in counting order.

pub mod candidate;
pub mod config;
pub mod enumerative;
pub mod parallel;
pub mod replay;
pub mod result;

pub use candidate::{CandidateCounter, ProofSequence, ProofStep, FINAL_STEP_LAWS};
pub use config::{Algorithm, SearchConfig};
pub use enumerative::{search_fixed_length, search_up_to_length, EnumerativeSearch};
pub use parallel::{run_parallel_search, ParallelConfig, ParallelResult, ParallelSearch};
pub use replay::{is_proof_sequence, ReplayOutcome, Replayer};
pub use result::{SearchOutcome, SearchResult, SearchStatistics};

use crate::ir::Formula;
use crate::semantics::Goal;

/// Trait for drivers that search for minimal proofs
pub trait ProofSearch {
    /// Search for the shortest proof that `formula` rewrites to the goal
    /// constant, trying lengths up to `config.max_length`
    fn search(&mut self, formula: &Formula, goal: Goal, config: &SearchConfig) -> SearchResult;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}

/// Build the driver `config.algorithm` names.
pub fn searcher_for(config: &SearchConfig, parallel: &ParallelConfig) -> Box<dyn ProofSearch> {
    match config.algorithm {
        Algorithm::Enumerative => Box::new(EnumerativeSearch::new()),
        Algorithm::Parallel => Box::new(ParallelSearch::new(parallel.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searcher_for_dispatches_on_algorithm() {
        let formula: Formula = "* x0 - x0".parse().unwrap();
        for algorithm in [Algorithm::Enumerative, Algorithm::Parallel] {
            let config = SearchConfig::default()
                .with_algorithm(algorithm)
                .with_max_length(2);
            let mut searcher = searcher_for(&config, &ParallelConfig::default().with_workers(2));
            let result = searcher.search(&formula, Goal::Contradiction, &config);
            assert_eq!(result.proof().map(ToString::to_string).as_deref(), Some("complement@0"));
            assert_eq!(searcher.statistics().algorithm, algorithm);
        }
    }
}
