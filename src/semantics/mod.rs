//! Syntax checking, evaluation and classification of Boolean formulas

pub mod classify;
pub mod eval;

pub use classify::{classify, Assignment, Classification, Goal};
pub use eval::{check_syntax, count_variables, evaluate, evaluate_with, validate_syntax};
