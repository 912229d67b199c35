//! boolproof: minimal-length rewrite proofs for propositional Boolean algebra
//!
//! Formulas are prefix-order symbol buffers (`+ x0 - x0`). Eleven
//! bidirectional laws rewrite them in place; an exhaustive search over
//! `(law, position)` step sequences finds the shortest sequence that
//! reduces a tautology to `T` or a contradiction to `F`.

pub mod census;
pub mod error;
pub mod ir;
pub mod rewrite;
pub mod search;
pub mod semantics;
pub mod validation;

pub use error::{CensusError, FormulaError, FormulaResult, ProofCheckError, StepParseError};
pub use ir::{Formula, Symbol, VarId};
pub use rewrite::{apply_law, Bindings, Law};
pub use search::{
    is_proof_sequence, search_fixed_length, search_up_to_length, ProofSearch, ProofSequence,
    ProofStep, SearchConfig, SearchOutcome,
};
pub use semantics::{classify, Classification, Goal};
pub use validation::verify_proof;
