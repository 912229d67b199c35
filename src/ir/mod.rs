//! Formula representation: symbols, the prefix-order buffer and CNF import

pub mod cnf;
pub mod formula;
pub mod symbol;

// Re-export commonly used types
pub use cnf::{cnf_to_formula, parse_clauses, Clause};
pub use formula::{Formula, DEFAULT_SLACK, MIN_SLACK};
pub use symbol::{Symbol, VarId, FIRST_SYNTHETIC, MAX_VARIABLES};
