//! Parallel proof search across worker threads.
//!
//! Each proof length is searched as a set of chunks, one per value of the
//! counter's most significant digit (the first step's law). Chunks are
//! handed out lowest first over a shared work queue, so the search visits
//! roughly the same prefix of the candidate space as a sequential scan.
//!
//! # Architecture
//!
//! - A **coordinator** fills the work queue, watches the deadline and
//!   merges chunk outcomes
//! - **Workers** each own a private formula copy and binding table and scan
//!   whole chunks
//! - **Shared state** records the lowest chunk that produced a proof; a
//!   worker abandons any chunk above it
//!
//! The lowest successful chunk is the one a sequential scan would reach
//! first, so the merged proof is exactly the sequential one.
//!
//! # Example
//!
//! ```ignore
//! use boolproof::search::parallel::{ParallelConfig, run_parallel_search};
//!
//! let config = ParallelConfig::default()
//!     .with_workers(4)
//!     .with_timeout(Duration::from_secs(60));
//!
//! let result = run_parallel_search(&formula, Goal::Tautology, &search_config, &config);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{run_parallel_search, ParallelResult, ParallelSearch};
