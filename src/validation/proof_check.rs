//! Independent checking of externally supplied proofs

use crate::error::ProofCheckError;
use crate::ir::Formula;
use crate::rewrite::{apply_law, Bindings};
use crate::search::ProofStep;
use crate::semantics::{evaluate_with, validate_syntax, Assignment, Goal};
use std::fmt;

/// The formula after every step of a checked proof
#[derive(Debug, Clone)]
pub struct ProofTrace {
    pub original: Formula,
    pub goal: Goal,
    /// Each step with the formula it produced
    pub steps: Vec<(ProofStep, Formula)>,
}

impl ProofTrace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Intermediate formulas, the original first
    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        std::iter::once(&self.original).chain(self.steps.iter().map(|(_, f)| f))
    }
}

impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    {}", self.original)?;
        for (i, (step, formula)) in self.steps.iter().enumerate() {
            writeln!(f, "{:>2}. {:<16} {}", i + 1, step.to_string(), formula)?;
        }
        Ok(())
    }
}

/// Replay `steps` on `formula`, checking after every step (numbered from 1)
/// that the law applied, that the formula is well formed and that its value
/// is unchanged under every assignment. The last step, and only the last,
/// must leave the goal constant.
pub fn verify_proof(
    formula: &Formula,
    steps: &[ProofStep],
    goal: Goal,
) -> Result<ProofTrace, ProofCheckError> {
    if steps.is_empty() {
        return Err(ProofCheckError::Empty);
    }

    let variables = formula.variable_count();
    let expected: Vec<bool> = assignments(variables).map(|bits| formula.evaluate(bits)).collect();

    let mut working = formula.clone();
    let mut bindings = Bindings::from_formula(formula);
    let mut trace = ProofTrace {
        original: formula.clone(),
        goal,
        steps: Vec::with_capacity(steps.len()),
    };

    for (i, &step) in steps.iter().enumerate() {
        let number = i + 1;
        if !apply_law(&mut working, &mut bindings, step.law, step.position) {
            return Err(ProofCheckError::LawMismatch {
                step: number,
                law: step.law,
                position: step.position,
            });
        }
        if !validate_syntax(working.body()) {
            return Err(ProofCheckError::SyntaxBroken { step: number });
        }
        for (bits, &value) in assignments(variables).zip(&expected) {
            match evaluate_with(working.body(), &bindings, bits) {
                Some(v) if v == value => {}
                Some(_) => {
                    return Err(ProofCheckError::MeaningChanged {
                        step: number,
                        assignment: Assignment::new(bits, variables),
                    })
                }
                None => return Err(ProofCheckError::SyntaxBroken { step: number }),
            }
        }
        trace.steps.push((step, working.clone()));

        if working.is_constant(goal) && number < steps.len() {
            return Err(ProofCheckError::FinishedEarly { step: number, goal });
        }
    }

    if !working.is_constant(goal) {
        return Err(ProofCheckError::Incomplete {
            formula: working.to_string(),
            goal,
        });
    }
    Ok(trace)
}

fn assignments(variables: usize) -> impl Iterator<Item = u64> {
    (0..1u128 << variables).map(|bits| bits as u64)
}
