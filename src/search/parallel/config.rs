//! Configuration for parallel search execution.

use std::time::Duration;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Overall timeout for the parallel search; falls back to the search
    /// config's timeout when unset.
    pub timeout: Option<Duration>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            timeout: None,
        }
    }
}

impl ParallelConfig {
    /// Set the number of worker threads (at least one).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the overall timeout for parallel search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the overall timeout from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Workers worth spawning for `chunks` chunks of work.
    pub fn workers_for(&self, chunks: usize) -> usize {
        self.num_workers.min(chunks).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParallelConfig::default();
        assert!(config.num_workers >= 1);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ParallelConfig::default()
            .with_workers(4)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.num_workers, 4);
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.clone().with_timeout_option(None).timeout, None);
    }

    #[test]
    fn test_minimum_workers() {
        let config = ParallelConfig::default().with_workers(0);
        assert_eq!(config.num_workers, 1);
    }

    #[test]
    fn test_workers_for_chunks() {
        let config = ParallelConfig::default().with_workers(16);
        assert_eq!(config.workers_for(11), 11);
        assert_eq!(config.workers_for(0), 1);
        assert_eq!(config.with_workers(2).workers_for(10), 2);
    }
}
