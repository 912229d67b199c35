//! Truth-table classification of formulas

use crate::ir::{Formula, Symbol};
use std::fmt;

/// The constant a proof has to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Goal {
    /// Prove the formula equal to True
    #[default]
    Tautology,
    /// Prove the formula equal to False
    Contradiction,
}

impl Goal {
    pub fn value(self) -> bool {
        matches!(self, Goal::Tautology)
    }

    /// The single symbol a finished proof leaves in the buffer
    pub fn symbol(self) -> Symbol {
        Symbol::constant(self.value())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Tautology => write!(f, "tautology"),
            Goal::Contradiction => write!(f, "contradiction"),
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tautology" | "taut" | "true" | "t" => Ok(Goal::Tautology),
            "contradiction" | "contra" | "false" | "f" => Ok(Goal::Contradiction),
            _ => Err(format!(
                "Unknown goal: '{}'. Valid options: tautology, contradiction",
                s
            )),
        }
    }
}

/// A truth assignment to `x0..x{variables-1}`, bit `i` holding `xi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub bits: u64,
    pub variables: usize,
}

impl Assignment {
    pub fn new(bits: u64, variables: usize) -> Self {
        Self { bits, variables }
    }

    pub fn value(&self, index: usize) -> bool {
        (self.bits >> index) & 1 == 1
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variables == 0 {
            return write!(f, "(no variables)");
        }
        for i in 0..self.variables {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{} = {}", i, self.value(i))?;
        }
        Ok(())
    }
}

/// Outcome of evaluating every assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Tautology,
    Contradiction,
    /// Carries the first assignment whose value differs from the goal
    Neither(Assignment),
}

impl Classification {
    /// Whether this classification is the one a proof toward `goal` needs
    pub fn matches(&self, goal: Goal) -> bool {
        matches!(
            (self, goal),
            (Classification::Tautology, Goal::Tautology)
                | (Classification::Contradiction, Goal::Contradiction)
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Neither(witness) => write!(f, "neither ({})", witness),
        }
    }
}

/// Evaluate `formula` under all `2^k` assignments of its `k` variables.
pub fn classify(formula: &Formula, goal: Goal) -> Classification {
    let variables = formula.variable_count();
    let limit: u128 = 1u128 << variables;
    let mut seen_true = false;
    let mut seen_false = false;
    let mut witness: Option<Assignment> = None;

    for bits in 0..limit {
        let bits = bits as u64;
        let value = formula.evaluate(bits);
        if value {
            seen_true = true;
        } else {
            seen_false = true;
        }
        if value != goal.value() && witness.is_none() {
            witness = Some(Assignment::new(bits, variables));
        }
        if seen_true && seen_false {
            break;
        }
    }

    match (seen_true, seen_false, witness) {
        (true, false, _) => Classification::Tautology,
        (false, true, _) => Classification::Contradiction,
        (_, _, Some(witness)) => Classification::Neither(witness),
        // Unreachable for a formula with at least one assignment
        _ => Classification::Neither(Assignment::new(0, variables)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Formula {
        text.parse().unwrap()
    }

    #[test]
    fn test_excluded_middle_is_tautology() {
        let f = parse("+ x0 - x0");
        assert_eq!(classify(&f, Goal::Tautology), Classification::Tautology);
        assert_eq!(classify(&f, Goal::Contradiction), Classification::Tautology);
    }

    #[test]
    fn test_contradiction() {
        let f = parse("* x0 - x0");
        assert_eq!(
            classify(&f, Goal::Contradiction),
            Classification::Contradiction
        );
    }

    #[test]
    fn test_neither_reports_falsifying_witness() {
        let f = parse("+ x0 F");
        match classify(&f, Goal::Tautology) {
            Classification::Neither(witness) => {
                assert_eq!(witness.bits, 0);
                assert!(!witness.value(0));
                assert_eq!(witness.to_string(), "x0 = false");
            }
            other => panic!("unexpected classification {:?}", other),
        }
    }

    #[test]
    fn test_neither_reports_satisfying_witness_for_contradiction_goal() {
        let f = parse("+ x0 F");
        match classify(&f, Goal::Contradiction) {
            Classification::Neither(witness) => assert!(witness.value(0)),
            other => panic!("unexpected classification {:?}", other),
        }
    }

    #[test]
    fn test_constant_formulas() {
        assert_eq!(
            classify(&parse("- F"), Goal::Tautology),
            Classification::Tautology
        );
        assert_eq!(
            classify(&parse("* T F"), Goal::Tautology),
            Classification::Contradiction
        );
    }

    #[test]
    fn test_matches_goal() {
        assert!(Classification::Tautology.matches(Goal::Tautology));
        assert!(!Classification::Tautology.matches(Goal::Contradiction));
        assert!(!Classification::Neither(Assignment::new(0, 1)).matches(Goal::Tautology));
    }

    #[test]
    fn test_goal_from_str() {
        assert_eq!("tautology".parse::<Goal>().unwrap(), Goal::Tautology);
        assert_eq!("contra".parse::<Goal>().unwrap(), Goal::Contradiction);
        assert!("maybe".parse::<Goal>().is_err());
    }
}
