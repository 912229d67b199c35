//! Bidirectional rewrite laws of Boolean algebra over prefix formulas
//!
//! Every law is tried at a start position `s`. The reducing pattern is
//! matched first; only when it does not match is the expanding pattern
//! tried, which wraps the single Boolean symbol at `s` (False, True or a
//! variable). A law that applies mutates the formula and keeps the
//! binding table in step with it; one that does not leaves both untouched.

pub mod bindings;

mod basic;
mod collapse;
mod structural;
mod substitution;

pub use bindings::{Binding, Bindings, Definition};

use crate::ir::{Formula, Symbol};
use std::fmt;

/// The eleven rewrite laws, numbered as in proof sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Law {
    /// `+ a F = a`
    IdentityOr = 0,
    /// `* a T = a`
    IdentityAnd = 1,
    /// `+ a a = a`
    IdempotentOr = 2,
    /// `* a a = a`
    IdempotentAnd = 3,
    /// `op a b = op b a`, falling back to `- T = F`, `- F = T`
    CommutativeNegation = 4,
    /// Associativity, distributivity, De Morgan, then double negation
    AssociativeDistributive = 5,
    /// `+ a - a = T`, `* a - a = F`
    Complement = 6,
    /// `+ a T = T`, `* a F = F`
    Domination = 7,
    /// `+ a * a b = a`
    AbsorptionOr = 8,
    /// `* a + a b = a`
    AbsorptionAnd = 9,
    /// Collapse a sub-expression into a fresh variable or expand one back
    Substitution = 10,
}

impl Law {
    pub const COUNT: usize = 11;

    pub const ALL: [Law; Law::COUNT] = [
        Law::IdentityOr,
        Law::IdentityAnd,
        Law::IdempotentOr,
        Law::IdempotentAnd,
        Law::CommutativeNegation,
        Law::AssociativeDistributive,
        Law::Complement,
        Law::Domination,
        Law::AbsorptionOr,
        Law::AbsorptionAnd,
        Law::Substitution,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Law> {
        Law::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Law::IdentityOr => "identity-or",
            Law::IdentityAnd => "identity-and",
            Law::IdempotentOr => "idempotent-or",
            Law::IdempotentAnd => "idempotent-and",
            Law::CommutativeNegation => "commutative",
            Law::AssociativeDistributive => "associative",
            Law::Complement => "complement",
            Law::Domination => "domination",
            Law::AbsorptionOr => "absorption-or",
            Law::AbsorptionAnd => "absorption-and",
            Law::Substitution => "substitution",
        }
    }

    /// Full description used in reports
    pub fn description(self) -> &'static str {
        match self {
            Law::IdentityOr => "identity law in OR form",
            Law::IdentityAnd => "identity law in AND form",
            Law::IdempotentOr => "idempotent law in OR form",
            Law::IdempotentAnd => "idempotent law in AND form",
            Law::CommutativeNegation => "commutative law or negation",
            Law::AssociativeDistributive => {
                "associative law, distributive law, De Morgan's law or double negation"
            }
            Law::Complement => "complement law",
            Law::Domination => "domination law",
            Law::AbsorptionOr => "absorption law in OR form",
            Law::AbsorptionAnd => "absorption law in AND form",
            Law::Substitution => "substitution",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Law {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Law::from_index(index)
                .ok_or_else(|| format!("Law index {} is out of range 0..{}", index, Law::COUNT));
        }
        let normalized = s.to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "identity-or" => Ok(Law::IdentityOr),
            "identity-and" => Ok(Law::IdentityAnd),
            "idempotent-or" => Ok(Law::IdempotentOr),
            "idempotent-and" => Ok(Law::IdempotentAnd),
            "commutative" | "negation" => Ok(Law::CommutativeNegation),
            "associative" | "distributive" | "de-morgan" | "double-negation" => {
                Ok(Law::AssociativeDistributive)
            }
            "complement" => Ok(Law::Complement),
            "domination" => Ok(Law::Domination),
            "absorption-or" => Ok(Law::AbsorptionOr),
            "absorption-and" => Ok(Law::AbsorptionAnd),
            "substitution" => Ok(Law::Substitution),
            _ => Err(format!(
                "Unknown law: '{}'. Use an index 0..{} or a law name",
                s,
                Law::COUNT
            )),
        }
    }
}

/// Apply `law` at `position`, returning whether it matched.
///
/// Positions at or past the end-of-formula marker never match.
pub fn apply_law(
    formula: &mut Formula,
    bindings: &mut Bindings,
    law: Law,
    position: usize,
) -> bool {
    if position >= formula.stop() {
        return false;
    }
    let s = position;
    match law {
        Law::IdentityOr => basic::identity(formula, s, Symbol::Or, Symbol::False),
        Law::IdentityAnd => basic::identity(formula, s, Symbol::And, Symbol::True),
        Law::IdempotentOr => basic::idempotent(formula, bindings, s, Symbol::Or),
        Law::IdempotentAnd => basic::idempotent(formula, bindings, s, Symbol::And),
        Law::CommutativeNegation => {
            basic::commutative(formula, s) || basic::negation(formula, s)
        }
        Law::AssociativeDistributive => structural::apply(formula, bindings, s),
        Law::Complement => collapse::complement(formula, bindings, s),
        Law::Domination => collapse::domination(formula, bindings, s),
        Law::AbsorptionOr => {
            collapse::absorption(formula, bindings, s, Symbol::Or, Symbol::And, Symbol::True)
        }
        Law::AbsorptionAnd => {
            collapse::absorption(formula, bindings, s, Symbol::And, Symbol::Or, Symbol::False)
        }
        Law::Substitution => substitution::apply(formula, bindings, s),
    }
}
