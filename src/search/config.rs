//! Configuration types for proof search

use crate::ir::{Formula, DEFAULT_SLACK};
use std::time::Duration;

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Exhaustive enumeration on the calling thread
    #[default]
    Enumerative,
    /// Exhaustive enumeration split across worker threads
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Enumerative => write!(f, "enumerative"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enumerative" | "enum" | "sequential" => Ok(Algorithm::Enumerative),
            "parallel" | "par" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: enumerative, parallel",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search algorithm to use
    pub algorithm: Algorithm,
    /// Longest proof to look for
    pub max_length: usize,
    /// Trailing room for formulas built from text
    pub slack: usize,
    /// Exclusive upper bound on step positions (None = buffer capacity)
    pub position_limit: Option<usize>,
    /// Overall timeout for the search
    pub timeout: Option<Duration>,
    /// Verbose output during search
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_length: 5,
            slack: DEFAULT_SLACK,
            position_limit: None,
            timeout: None,
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_slack(mut self, slack: usize) -> Self {
        self.slack = slack;
        self
    }

    pub fn with_position_limit(mut self, limit: usize) -> Self {
        self.position_limit = Some(limit);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Position bound for a particular formula
    pub fn positions_for(&self, formula: &Formula) -> usize {
        self.position_limit.unwrap_or_else(|| formula.capacity())
    }
}
