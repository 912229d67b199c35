//! Parallel search coordinator that manages worker threads.

use crate::ir::Formula;
use crate::search::candidate::CandidateCounter;
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::enumerative::{scan, ScanOutcome};
use crate::search::parallel::channel::{
    create_channels, ChunkOutcome, CoordinatorChannels, WorkerChannels, WorkerMessage,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::replay::Replayer;
use crate::search::result::{SearchOutcome, SearchResult, SearchStatistics};
use crate::search::ProofSearch;
use crate::semantics::Goal;
use crossbeam_channel::RecvTimeoutError;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// The merged result, identical in outcome to a sequential search.
    pub best_result: SearchResult,
    /// Statistics aggregated from all workers.
    pub total_statistics: SearchStatistics,
    /// Per-worker statistics, summed over every length searched.
    pub worker_statistics: Vec<(usize, SearchStatistics)>,
}

/// Search at a single proof length
#[derive(Debug, Clone, Copy)]
struct LengthJob<'a> {
    formula: &'a Formula,
    goal: Goal,
    length: usize,
    positions: usize,
}

/// Run parallel search with the given configuration.
pub fn run_parallel_search(
    formula: &Formula,
    goal: Goal,
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> ParallelResult {
    let start_time = Instant::now();
    let deadline = parallel_config
        .timeout
        .or(search_config.timeout)
        .map(|t| start_time + t);
    let positions = search_config.positions_for(formula);

    let mut worker_stats =
        vec![SearchStatistics::new(Algorithm::Parallel); parallel_config.num_workers.max(1)];
    let mut lengths_searched = 0;
    let mut outcome = SearchOutcome::NotFound;

    for length in 1..=search_config.max_length {
        lengths_searched = length;
        let chunks = CandidateCounter::chunk_count(length);
        let workers = parallel_config.workers_for(chunks);
        debug!(%formula, length, chunks, workers, "searching proofs in parallel");

        let job = LengthJob {
            formula,
            goal,
            length,
            positions,
        };
        match search_length(job, chunks, workers, deadline, &mut worker_stats) {
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

    let mut total_stats = SearchStatistics::new(Algorithm::Parallel);
    for stats in &worker_stats {
        total_stats.merge(stats);
    }
    total_stats.lengths_searched = lengths_searched;
    total_stats.elapsed_time = start_time.elapsed();

    match &outcome {
        SearchOutcome::Proved(proof) => info!(%formula, %goal, %proof, "proof found"),
        SearchOutcome::NotFound => {
            info!(%formula, %goal, max_length = search_config.max_length, "holdout")
        }
        SearchOutcome::TimedOut => {
            warn!(%formula, elapsed = ?total_stats.elapsed_time, "search timed out")
        }
    }

    let best_result = SearchResult::new(
        formula,
        goal,
        outcome,
        search_config.max_length,
        total_stats.clone(),
    );

    ParallelResult {
        best_result,
        total_statistics: total_stats,
        worker_statistics: worker_stats.into_iter().enumerate().collect(),
    }
}

/// Spread the chunks of one length over `workers` threads and merge.
fn search_length(
    job: LengthJob<'_>,
    chunks: usize,
    workers: usize,
    deadline: Option<Instant>,
    worker_stats: &mut [SearchStatistics],
) -> ScanOutcome {
    let (coordinator_channels, worker_channels) = create_channels(workers, chunks);

    std::thread::scope(|scope| {
        for (worker_id, channels) in worker_channels.into_iter().enumerate() {
            scope.spawn(move || run_worker(worker_id, job, channels));
        }
        run_coordinator(coordinator_channels, workers, chunks, deadline, worker_stats)
    })
}

/// Coordinator loop that receives chunk outcomes until every worker is done.
fn run_coordinator(
    channels: CoordinatorChannels,
    workers: usize,
    chunks: usize,
    deadline: Option<Instant>,
    worker_stats: &mut [SearchStatistics],
) -> ScanOutcome {
    let mut outcomes: Vec<Option<ChunkOutcome>> = vec![None; chunks];
    let mut finished_count = 0;

    loop {
        if deadline.is_some_and(|d| Instant::now() >= d) && !channels.shared.should_stop() {
            debug!("deadline reached, stopping workers");
            channels.shared.signal_stop();
        }

        // Receive with timeout to allow periodic deadline checks
        match channels.from_workers.recv_timeout(Duration::from_millis(100)) {
            Ok(WorkerMessage::ChunkDone {
                leading, outcome, ..
            }) => {
                if let Some(slot) = outcomes.get_mut(leading) {
                    *slot = Some(outcome);
                }
            }
            Ok(WorkerMessage::Finished {
                worker_id,
                statistics,
            }) => {
                if let Some(stats) = worker_stats.get_mut(worker_id) {
                    stats.merge(&statistics);
                }
                finished_count += 1;
                if finished_count >= workers {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // All senders dropped, we're done
                break;
            }
        }
    }

    merge_chunks(&outcomes)
}

/// The first chunk in counting order that did not exhaust decides the
/// length: a proof there is the sequential answer, anything else means the
/// search was cut short before reaching it.
fn merge_chunks(outcomes: &[Option<ChunkOutcome>]) -> ScanOutcome {
    for outcome in outcomes {
        match outcome {
            Some(ChunkOutcome::Exhausted) => continue,
            Some(ChunkOutcome::Found(proof)) => return ScanOutcome::Found(proof.clone()),
            _ => return ScanOutcome::Interrupted,
        }
    }
    ScanOutcome::Exhausted
}

/// Worker loop: take chunks off the queue until it is empty.
fn run_worker(worker_id: usize, job: LengthJob<'_>, channels: WorkerChannels) {
    let shared = &channels.shared;
    let mut replayer = Replayer::new(job.formula, job.goal);
    let mut stats = SearchStatistics::new(Algorithm::Parallel);
    stats.lengths_searched = job.length;

    while let Ok(leading) = channels.work.recv() {
        let outcome = if shared.is_superseded(leading) {
            stats.chunks_skipped += 1;
            ChunkOutcome::Abandoned
        } else if shared.should_stop() {
            stats.chunks_skipped += 1;
            ChunkOutcome::Interrupted
        } else {
            stats.chunks_dispatched += 1;
            let mut counter = CandidateCounter::chunk(job.length, job.positions, leading);
            let scanned = scan(&mut replayer, &mut counter, &mut stats, || {
                shared.should_stop() || shared.is_superseded(leading)
            });
            match scanned {
                ScanOutcome::Found(proof) => {
                    shared.try_update(leading);
                    ChunkOutcome::Found(proof)
                }
                ScanOutcome::Exhausted => ChunkOutcome::Exhausted,
                ScanOutcome::Interrupted if shared.is_superseded(leading) => ChunkOutcome::Abandoned,
                ScanOutcome::Interrupted => ChunkOutcome::Interrupted,
            }
        };

        trace!(worker_id, length = job.length, leading, ?outcome, "chunk done");
        let _ = channels.to_coordinator.send(WorkerMessage::ChunkDone {
            worker_id,
            leading,
            outcome,
        });
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        statistics: stats,
    });
}

/// Parallel driver behind the [`ProofSearch`] interface
pub struct ParallelSearch {
    config: ParallelConfig,
    statistics: SearchStatistics,
}

impl ParallelSearch {
    pub fn new(config: ParallelConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::new(Algorithm::Parallel),
        }
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::new(ParallelConfig::default())
    }
}

impl ProofSearch for ParallelSearch {
    fn search(&mut self, formula: &Formula, goal: Goal, config: &SearchConfig) -> SearchResult {
        self.reset();
        let result = run_parallel_search(formula, goal, config, &self.config);
        self.statistics = result.total_statistics;
        result.best_result
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Parallel);
    }
}
