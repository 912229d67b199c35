//! Error types for formula construction, proof steps and proof checking

use crate::rewrite::Law;
use crate::semantics::{Assignment, Goal};
use thiserror::Error;

/// Result type for formula construction
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Reasons a symbol sequence is rejected as a formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// No symbols before the terminator
    #[error("formula is empty")]
    Empty,

    /// The sequence does not end with the end-of-formula marker
    #[error("formula is missing its end-of-formula marker")]
    MissingTerminator,

    /// An end-of-formula marker appears before the last symbol
    #[error("unexpected end-of-formula marker at position {position}")]
    ExtraTerminator { position: usize },

    /// The arity check did not net to exactly one value
    #[error("malformed prefix syntax: {reason}")]
    Syntax { reason: String },

    /// Original variables are not numbered densely from x0
    #[error("variable numbering has a gap: x{missing} is never used")]
    VariableGap { missing: u32 },

    /// The declared number of original variables does not match the formula
    #[error("declared {declared} variables but the formula uses {found}")]
    VariableCountMismatch { declared: usize, found: usize },

    /// A variable index does not fit in the assignment bitmask
    #[error("variable x{id} exceeds the supported maximum of {max} variables")]
    VariableOutOfRange { id: u32, max: usize },

    /// Synthetic variables only exist inside a proof attempt
    #[error("synthetic variable s{index} cannot appear in an input formula")]
    SyntheticInput { index: u32 },

    /// Text input contained something that is not a symbol
    #[error("unknown token '{token}' at offset {offset}")]
    UnknownToken { token: String, offset: usize },

    /// Buffer slack below what a single expansion may need
    #[error("slack of {slack} is below the minimum of {min}")]
    InsufficientSlack { slack: usize, min: usize },

    /// A CNF conversion was asked for zero clauses
    #[error("a CNF formula must have at least one clause")]
    EmptyCnf,

    /// A CNF literal was zero or larger than the literal count
    #[error("literal {literal} in clause {clause} is zero or out of range")]
    LiteralOutOfRange { clause: usize, literal: i32 },
}

impl FormulaError {
    pub fn syntax(reason: impl Into<String>) -> Self {
        FormulaError::Syntax {
            reason: reason.into(),
        }
    }
}

/// Reasons a `law@position` proof step fails to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepParseError {
    #[error("proof step '{0}' is not of the form law@position")]
    MissingSeparator(String),

    #[error("{0}")]
    UnknownLaw(String),

    #[error("invalid position '{0}' in proof step")]
    InvalidPosition(String),
}

/// Reasons an externally supplied proof is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofCheckError {
    #[error("proof has no steps")]
    Empty,

    #[error("step {step} ({law} at {position}) does not apply")]
    LawMismatch {
        step: usize,
        law: Law,
        position: usize,
    },

    #[error("step {step} left a malformed formula")]
    SyntaxBroken { step: usize },

    #[error("step {step} changed the value of the formula under {assignment}")]
    MeaningChanged { step: usize, assignment: Assignment },

    #[error("the formula reached the {goal} constant after step {step}, before the last step")]
    FinishedEarly { step: usize, goal: Goal },

    #[error("proof ends at {formula} instead of the {goal} constant")]
    Incomplete { formula: String, goal: Goal },
}

/// Reasons a census cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensusError {
    #[error("census formulas need at least {min} symbols, got {symbols}")]
    TooFewSymbols { symbols: usize, min: usize },

    #[error("census formulas need at most {max} symbols, got {symbols}")]
    TooManySymbols { symbols: usize, max: usize },

    #[error(transparent)]
    Formula(#[from] FormulaError),
}
