//! Work queue, result channel and shared state for parallel search workers.

use crate::search::candidate::ProofSequence;
use crate::search::result::SearchStatistics;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// How a worker left one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// First proof of the chunk in counting order.
    Found(ProofSequence),
    /// Every candidate of the chunk failed.
    Exhausted,
    /// A lower chunk had already succeeded.
    Abandoned,
    /// The coordinator signalled stop before the chunk was finished.
    Interrupted,
}

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker is done with a chunk.
    ChunkDone {
        worker_id: usize,
        leading: usize,
        outcome: ChunkOutcome,
    },
    /// Work queue is empty; the worker's counters for this length.
    Finished {
        worker_id: usize,
        statistics: SearchStatistics,
    },
}

/// State shared by every worker searching one proof length.
#[derive(Debug)]
pub struct SharedBest {
    /// Lowest chunk that produced a proof (usize::MAX means none yet).
    pub lowest_success: AtomicUsize,
    /// Flag to signal all workers to stop.
    pub should_stop: AtomicBool,
}

impl Default for SharedBest {
    fn default() -> Self {
        Self {
            lowest_success: AtomicUsize::new(usize::MAX),
            should_stop: AtomicBool::new(false),
        }
    }
}

impl SharedBest {
    /// Record a proof in chunk `leading`. Returns true if it is the lowest so far.
    pub fn try_update(&self, leading: usize) -> bool {
        self.lowest_success.fetch_min(leading, Ordering::SeqCst) > leading
    }

    /// True once a chunk below `leading` has produced a proof.
    pub fn is_superseded(&self, leading: usize) -> bool {
        self.lowest_success.load(Ordering::SeqCst) < leading
    }

    /// Lowest successful chunk, if any.
    pub fn current_best(&self) -> Option<usize> {
        match self.lowest_success.load(Ordering::SeqCst) {
            usize::MAX => None,
            leading => Some(leading),
        }
    }

    /// Check if we should stop searching.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Chunks still to be searched, lowest first.
    pub work: Receiver<usize>,
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared state for fast superseded checks.
    pub shared: Arc<SharedBest>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedBest>,
}

/// Create channels for `num_workers` workers sharing `chunk_count` chunks.
///
/// The work queue is filled and closed up front; a worker whose `recv`
/// fails has nothing left to do.
pub fn create_channels(
    num_workers: usize,
    chunk_count: usize,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedBest::default());

    // Unbounded channel from workers to coordinator (workers shouldn't block)
    let (worker_tx, coordinator_rx) = unbounded();

    let (work_tx, work_rx) = bounded(chunk_count.max(1));
    for leading in 0..chunk_count {
        // Capacity covers every chunk, so this never blocks or fails.
        let _ = work_tx.send(leading);
    }
    drop(work_tx);

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            work: work_rx.clone(),
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::Law;
    use crate::search::candidate::ProofStep;

    #[test]
    fn test_shared_best_update() {
        let shared = SharedBest::default();
        assert_eq!(shared.current_best(), None);

        // Initial update should succeed
        assert!(shared.try_update(7));
        assert_eq!(shared.current_best(), Some(7));

        // Lower chunk should succeed
        assert!(shared.try_update(3));
        assert_eq!(shared.current_best(), Some(3));

        // Higher or equal chunk should fail
        assert!(!shared.try_update(5));
        assert!(!shared.try_update(3));
        assert_eq!(shared.current_best(), Some(3));

        assert!(shared.is_superseded(4));
        assert!(!shared.is_superseded(3));
        assert!(!shared.is_superseded(0));
    }

    #[test]
    fn test_shared_stop_signal() {
        let shared = SharedBest::default();

        assert!(!shared.should_stop());
        shared.signal_stop();
        assert!(shared.should_stop());
    }

    #[test]
    fn test_work_queue_hands_out_each_chunk_once() {
        let (_coordinator, workers) = create_channels(3, 11);
        assert_eq!(workers.len(), 3);

        let mut seen = Vec::new();
        for worker in workers.iter().cycle() {
            match worker.work.recv() {
                Ok(leading) => seen.push(leading),
                Err(_) => break,
            }
        }
        assert_eq!(seen, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_worker_to_coordinator() {
        let (coordinator, workers) = create_channels(2, 1);

        let proof = ProofSequence::new(vec![ProofStep::new(Law::Complement, 0)]);
        workers[1]
            .to_coordinator
            .send(WorkerMessage::ChunkDone {
                worker_id: 1,
                leading: 6,
                outcome: ChunkOutcome::Found(proof.clone()),
            })
            .unwrap();

        match coordinator.from_workers.recv().unwrap() {
            WorkerMessage::ChunkDone {
                worker_id,
                leading,
                outcome,
            } => {
                assert_eq!(worker_id, 1);
                assert_eq!(leading, 6);
                assert_eq!(outcome, ChunkOutcome::Found(proof));
            }
            _ => panic!("Unexpected message type"),
        }
    }
}
