//! Exhaustive proof search in counting order
//!
//! Lengths are tried from 1 upward, and every candidate of a length is
//! replayed from scratch on a fresh copy of the formula. The first
//! candidate whose final step reaches the goal constant is returned, so
//! the proof is of minimal length and the first such proof in counting
//! order.

use crate::ir::Formula;
use crate::search::candidate::{CandidateCounter, ProofSequence};
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::replay::{ReplayOutcome, Replayer};
use crate::search::result::{SearchOutcome, SearchResult, SearchStatistics};
use crate::search::ProofSearch;
use crate::semantics::Goal;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Candidates replayed between interruption checks
const CHECK_INTERVAL: u64 = 1024;

/// How a scan over one counter ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanOutcome {
    Found(ProofSequence),
    Exhausted,
    Interrupted,
}

/// Replay every candidate `counter` yields until one proves the goal at
/// its final step. `interrupted` is polled every few candidates.
pub(crate) fn scan<F>(
    replayer: &mut Replayer<'_>,
    counter: &mut CandidateCounter,
    stats: &mut SearchStatistics,
    mut interrupted: F,
) -> ScanOutcome
where
    F: FnMut() -> bool,
{
    let mut since_check = 0u64;
    while let Some(steps) = counter.next_candidate() {
        since_check += 1;
        if since_check == CHECK_INTERVAL {
            since_check = 0;
            if interrupted() {
                return ScanOutcome::Interrupted;
            }
        }

        stats.candidates_evaluated += 1;
        match replayer.replay(steps) {
            ReplayOutcome::Proved { steps: n } if n == steps.len() => {
                return ScanOutcome::Found(ProofSequence::new(steps.to_vec()));
            }
            ReplayOutcome::Rejected { .. } => stats.candidates_rejected += 1,
            _ => {}
        }
    }
    ScanOutcome::Exhausted
}

/// Sequential exhaustive search
pub struct EnumerativeSearch {
    statistics: SearchStatistics,
}

impl EnumerativeSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Enumerative),
        }
    }
}

impl Default for EnumerativeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofSearch for EnumerativeSearch {
    fn search(&mut self, formula: &Formula, goal: Goal, config: &SearchConfig) -> SearchResult {
        self.reset();
        let start_time = Instant::now();
        let deadline = config.timeout.map(|t| start_time + t);
        let positions = config.positions_for(formula);
        let mut replayer = Replayer::new(formula, goal);
        let mut outcome = SearchOutcome::NotFound;

        for length in 1..=config.max_length {
            debug!(
                %formula,
                length,
                candidates = u64::try_from(CandidateCounter::candidate_count(length, positions))
                    .unwrap_or(u64::MAX),
                "searching proofs"
            );
            self.statistics.lengths_searched = length;
            let mut counter = CandidateCounter::new(length, positions);
            let scanned = scan(&mut replayer, &mut counter, &mut self.statistics, || {
                deadline.is_some_and(|d| Instant::now() >= d)
            });
            match scanned {
                ScanOutcome::Found(proof) => {
                    outcome = SearchOutcome::Proved(proof);
                    break;
                }
                ScanOutcome::Exhausted => {}
                ScanOutcome::Interrupted => {
                    outcome = SearchOutcome::TimedOut;
                    break;
                }
            }
        }

        self.statistics.elapsed_time = start_time.elapsed();
        match &outcome {
            SearchOutcome::Proved(proof) => {
                info!(%formula, %goal, %proof, "proof found");
            }
            SearchOutcome::NotFound => {
                info!(%formula, %goal, max_length = config.max_length, "holdout");
            }
            SearchOutcome::TimedOut => {
                warn!(%formula, elapsed = ?self.statistics.elapsed_time, "search timed out");
            }
        }

        SearchResult::new(
            formula,
            goal,
            outcome,
            config.max_length,
            self.statistics.clone(),
        )
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Enumerative);
    }
}

/// First proof of exactly `length` steps in counting order.
pub fn search_fixed_length(
    formula: &Formula,
    length: usize,
    goal: Goal,
    position_limit: usize,
) -> Option<ProofSequence> {
    let mut replayer = Replayer::new(formula, goal);
    let mut counter = CandidateCounter::new(length, position_limit);
    let mut stats = SearchStatistics::default();
    match scan(&mut replayer, &mut counter, &mut stats, || false) {
        ScanOutcome::Found(proof) => Some(proof),
        _ => None,
    }
}

/// Minimal proof of at most `max_length` steps, positions bounded by the
/// formula's capacity.
pub fn search_up_to_length(formula: &Formula, goal: Goal, max_length: usize) -> SearchOutcome {
    let config = SearchConfig::default().with_max_length(max_length);
    EnumerativeSearch::new()
        .search(formula, goal, &config)
        .outcome
}
