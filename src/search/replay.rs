//! Replaying candidate sequences on a fresh copy of the formula

use crate::ir::Formula;
use crate::rewrite::{apply_law, Bindings};
use crate::search::candidate::ProofStep;
use crate::semantics::Goal;

/// How a replay ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// The formula became the goal constant after `steps` steps
    Proved { steps: usize },
    /// Step `step` (0-based) did not apply
    Rejected { step: usize },
    /// Every step applied but the goal constant was never reached
    Unfinished,
}

/// Owns the working buffer and binding table for repeated replays of one
/// formula, reseeding both before every candidate.
#[derive(Debug, Clone)]
pub struct Replayer<'a> {
    original: &'a Formula,
    goal: Goal,
    working: Formula,
    bindings: Bindings,
}

impl<'a> Replayer<'a> {
    pub fn new(original: &'a Formula, goal: Goal) -> Self {
        Self {
            original,
            goal,
            working: original.clone(),
            bindings: Bindings::from_formula(original),
        }
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Working formula as left by the last replay
    pub fn formula(&self) -> &Formula {
        &self.working
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Reset the working state to the original formula.
    pub fn reseed(&mut self) {
        self.working.reset_from(self.original);
        self.bindings.rebuild(self.original);
    }

    /// Apply one step to the working state.
    pub fn step(&mut self, step: ProofStep) -> bool {
        apply_law(&mut self.working, &mut self.bindings, step.law, step.position)
    }

    pub fn is_finished(&self) -> bool {
        self.working.is_constant(self.goal)
    }

    /// Reseed, then apply `steps` in order, stopping at the first step that
    /// does not apply or that reaches the goal constant.
    pub fn replay(&mut self, steps: &[ProofStep]) -> ReplayOutcome {
        self.reseed();
        for (i, &step) in steps.iter().enumerate() {
            if !self.step(step) {
                return ReplayOutcome::Rejected { step: i };
            }
            if self.is_finished() {
                return ReplayOutcome::Proved { steps: i + 1 };
            }
        }
        ReplayOutcome::Unfinished
    }

    /// Whether `steps` is a proof whose final step is the one that reaches
    /// the goal constant.
    pub fn proves_exactly(&mut self, steps: &[ProofStep]) -> bool {
        matches!(self.replay(steps), ReplayOutcome::Proved { steps: n } if n == steps.len())
    }
}

/// True iff replaying `steps` on `formula` reaches the goal constant.
pub fn is_proof_sequence(formula: &Formula, steps: &[ProofStep], goal: Goal) -> bool {
    if steps.is_empty() {
        return false;
    }
    matches!(
        Replayer::new(formula, goal).replay(steps),
        ReplayOutcome::Proved { .. }
    )
}
