//! Search result types and statistics

use crate::ir::Formula;
use crate::search::candidate::ProofSequence;
use crate::search::config::Algorithm;
use crate::semantics::Goal;
use std::time::Duration;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Minimal-length proof, lexicographically first in counting order
    Proved(ProofSequence),
    /// Every candidate up to the length limit failed: a holdout
    NotFound,
    /// The timeout expired before the space was exhausted
    TimedOut,
}

impl SearchOutcome {
    pub fn proof(&self) -> Option<&ProofSequence> {
        match self {
            SearchOutcome::Proved(proof) => Some(proof),
            _ => None,
        }
    }

    pub fn is_proved(&self) -> bool {
        matches!(self, SearchOutcome::Proved(_))
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The formula that was searched
    pub formula: Formula,
    pub goal: Goal,
    pub outcome: SearchOutcome,
    /// Longest proof length that was tried
    pub max_length: usize,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn new(
        formula: &Formula,
        goal: Goal,
        outcome: SearchOutcome,
        max_length: usize,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            formula: formula.clone(),
            goal,
            outcome,
            max_length,
            statistics,
        }
    }

    pub fn proof(&self) -> Option<&ProofSequence> {
        self.outcome.proof()
    }

    pub fn proof_length(&self) -> Option<usize> {
        self.proof().map(ProofSequence::len)
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of candidate sequences replayed
    pub candidates_evaluated: u64,
    /// Candidates abandoned at a step that did not apply
    pub candidates_rejected: u64,
    /// Proof lengths fully or partly enumerated
    pub lengths_searched: usize,
    /// Chunks of candidates handed to workers (parallel search)
    pub chunks_dispatched: u64,
    /// Chunks skipped because a lower chunk already succeeded
    pub chunks_skipped: u64,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Fold another worker's counters into these.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.candidates_evaluated += other.candidates_evaluated;
        self.candidates_rejected += other.candidates_rejected;
        self.chunks_dispatched += other.chunks_dispatched;
        self.chunks_skipped += other.chunks_skipped;
        self.lengths_searched = self.lengths_searched.max(other.lengths_searched);
    }

    /// Share of candidates cut short by a step that did not apply (0.0 to 1.0)
    pub fn rejection_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.candidates_rejected as f64 / self.candidates_evaluated as f64
        }
    }

    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Rejected early: {:.2}%\n",
            self.rejection_rate() * 100.0
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        s.push_str(&format!("Lengths searched: {}\n", self.lengths_searched));

        if self.algorithm == Algorithm::Parallel {
            s.push_str(&format!("Chunks dispatched: {}\n", self.chunks_dispatched));
            s.push_str(&format!("Chunks skipped: {}\n", self.chunks_skipped));
        }

        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            SearchOutcome::Proved(proof) => {
                writeln!(f, "Proof of length {} for {}:", proof.len(), self.formula)?;
                writeln!(f, "  {}", proof)?;
                writeln!(f, "  {} = [{}]", proof.codes(), proof.describe())?;
            }
            SearchOutcome::NotFound => {
                writeln!(
                    f,
                    "No proof of length {} or less that {} is a {}.",
                    self.max_length, self.formula, self.goal
                )?;
            }
            SearchOutcome::TimedOut => {
                writeln!(f, "Search timed out for {}.", self.formula)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::Law;
    use crate::search::candidate::ProofStep;

    fn excluded_middle() -> Formula {
        "+ x0 - x0".parse().unwrap()
    }

    #[test]
    fn test_search_result_proved() {
        let proof = ProofSequence::new(vec![ProofStep::new(Law::Complement, 0)]);
        let result = SearchResult::new(
            &excluded_middle(),
            Goal::Tautology,
            SearchOutcome::Proved(proof.clone()),
            5,
            SearchStatistics::default(),
        );

        assert_eq!(result.proof(), Some(&proof));
        assert_eq!(result.proof_length(), Some(1));
        let text = result.to_string();
        assert!(text.contains("Proof of length 1 for [+ x0 - x0]"));
        assert!(text.contains("{{6, 0}} = [complement law at 0]"));
    }

    #[test]
    fn test_search_result_not_found() {
        let result = SearchResult::new(
            &excluded_middle(),
            Goal::Tautology,
            SearchOutcome::NotFound,
            2,
            SearchStatistics::default(),
        );
        assert!(!result.outcome.is_proved());
        assert_eq!(result.proof_length(), None);
        assert!(result.to_string().contains("No proof of length 2 or less"));
    }

    #[test]
    fn test_statistics_merge() {
        let mut total = SearchStatistics::new(Algorithm::Parallel);
        let mut worker = SearchStatistics::default();
        worker.candidates_evaluated = 40;
        worker.candidates_rejected = 30;
        worker.lengths_searched = 2;
        total.merge(&worker);
        total.merge(&worker);

        assert_eq!(total.candidates_evaluated, 80);
        assert_eq!(total.lengths_searched, 2);
        assert!((total.rejection_rate() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_throughput() {
        let mut stats = SearchStatistics::default();
        stats.candidates_evaluated = 10000;
        stats.elapsed_time = Duration::from_secs(10);

        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_zero_division() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.rejection_rate(), 0.0);
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_format_summary() {
        let stats = SearchStatistics::new(Algorithm::Parallel);
        let summary = stats.format_summary();
        assert!(summary.contains("Algorithm: parallel"));
        assert!(summary.contains("Chunks dispatched: 0"));
    }
}
