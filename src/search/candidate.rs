//! Proof steps and the mixed-radix enumeration of candidate sequences

use crate::error::StepParseError;
use crate::rewrite::Law;
use std::fmt;

/// Laws allowed as the final step: substitution can never leave a constant
pub const FINAL_STEP_LAWS: usize = Law::COUNT - 1;

/// One rewrite: a law applied at a start position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProofStep {
    pub law: Law,
    pub position: usize,
}

impl ProofStep {
    pub fn new(law: Law, position: usize) -> Self {
        Self { law, position }
    }
}

impl Default for ProofStep {
    fn default() -> Self {
        Self::new(Law::IdentityOr, 0)
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.law, self.position)
    }
}

impl std::str::FromStr for ProofStep {
    type Err = StepParseError;

    /// Parses `law@position`, the law given by index or by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (law, position) = s
            .split_once('@')
            .ok_or_else(|| StepParseError::MissingSeparator(s.to_string()))?;
        let law: Law = law.parse().map_err(StepParseError::UnknownLaw)?;
        let position = position
            .trim()
            .parse()
            .map_err(|_| StepParseError::InvalidPosition(position.to_string()))?;
        Ok(Self { law, position })
    }
}

/// An ordered list of proof steps
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProofSequence(Vec<ProofStep>);

impl ProofSequence {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.0.iter()
    }

    /// Numeric pairs, e.g. `{{6, 0}}`
    pub fn codes(&self) -> String {
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|step| format!("{{{}, {}}}", step.law.index(), step.position))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }

    /// Long form, e.g. `complement law at 0`
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|step| format!("{} at {}", step.law.description(), step.position))
            .collect();
        parts.join(", ")
    }
}

impl From<Vec<ProofStep>> for ProofSequence {
    fn from(steps: Vec<ProofStep>) -> Self {
        Self(steps)
    }
}

impl<'a> IntoIterator for &'a ProofSequence {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProofSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ProofSequence {
    type Err = StepParseError;

    /// Steps separated by commas or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ProofStep>, _>>()
            .map(ProofSequence)
    }
}

/// Mixed-radix counter over all candidate sequences of one length.
///
/// Digits from least to most significant: the final step's law (never
/// substitution), then for each earlier step from the last-but-one down
/// to the first, its position followed by its law. The final step's
/// position is always 0. The most significant digit is the first step's
/// law, or the final step's law for single-step sequences.
#[derive(Debug, Clone)]
pub struct CandidateCounter {
    digits: Vec<usize>,
    radices: Vec<usize>,
    /// Leading digits held fixed, restricting the counter to one chunk
    fixed: usize,
    steps: Vec<ProofStep>,
    started: bool,
    done: bool,
}

impl CandidateCounter {
    /// Counter over every sequence of `length` steps.
    pub fn new(length: usize, position_limit: usize) -> Self {
        let mut radices = Vec::with_capacity(length * 2);
        if length > 0 {
            radices.push(FINAL_STEP_LAWS);
            for _ in 1..length {
                radices.push(position_limit);
                radices.push(Law::COUNT);
            }
        }
        let done = radices.is_empty() || radices.contains(&0);
        Self {
            digits: vec![0; radices.len()],
            radices,
            fixed: 0,
            steps: vec![ProofStep::default(); length],
            started: false,
            done,
        }
    }

    /// Counter over the chunk whose most significant digit is `leading`.
    pub fn chunk(length: usize, position_limit: usize, leading: usize) -> Self {
        let mut counter = Self::new(length, position_limit);
        if counter.done {
            return counter;
        }
        let top = counter.digits.len() - 1;
        if leading >= counter.radices[top] {
            counter.done = true;
            return counter;
        }
        counter.digits[top] = leading;
        counter.fixed = 1;
        counter.sync_steps();
        counter
    }

    /// Number of values the most significant digit takes
    pub fn chunk_count(length: usize) -> usize {
        match length {
            0 => 0,
            1 => FINAL_STEP_LAWS,
            _ => Law::COUNT,
        }
    }

    /// Total number of candidates of `length` steps
    pub fn candidate_count(length: usize, position_limit: usize) -> u128 {
        if length == 0 {
            return 0;
        }
        let per_step = (position_limit as u128).saturating_mul(Law::COUNT as u128);
        (1..length).fold(FINAL_STEP_LAWS as u128, |total, _| {
            total.saturating_mul(per_step)
        })
    }

    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Yield the next candidate in counting order.
    pub fn next_candidate(&mut self) -> Option<&[ProofStep]> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
            self.sync_steps();
        }
        if self.done {
            None
        } else {
            Some(&self.steps)
        }
    }

    fn advance(&mut self) {
        if self.done {
            return;
        }
        let free = self.digits.len() - self.fixed;
        for i in 0..free {
            self.digits[i] += 1;
            if self.digits[i] < self.radices[i] {
                self.sync_steps();
                return;
            }
            self.digits[i] = 0;
        }
        self.done = true;
    }

    fn sync_steps(&mut self) {
        let length = self.steps.len();
        if length == 0 {
            return;
        }
        self.steps[length - 1] = ProofStep::new(law_at(self.digits[0]), 0);
        for k in 0..length - 1 {
            let step = length - 2 - k;
            self.steps[step] = ProofStep::new(law_at(self.digits[2 + 2 * k]), self.digits[1 + 2 * k]);
        }
    }
}

fn law_at(index: usize) -> Law {
    Law::from_index(index).unwrap_or(Law::IdentityOr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut counter: CandidateCounter) -> Vec<Vec<ProofStep>> {
        let mut all = Vec::new();
        while let Some(steps) = counter.next_candidate() {
            all.push(steps.to_vec());
        }
        all
    }

    #[test]
    fn test_step_display_and_parse() {
        let step = ProofStep::new(Law::Complement, 3);
        assert_eq!(step.to_string(), "complement@3");
        assert_eq!("complement@3".parse::<ProofStep>().unwrap(), step);
        assert_eq!("6@3".parse::<ProofStep>().unwrap(), step);
        assert!(matches!(
            "complement".parse::<ProofStep>(),
            Err(StepParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "complement@x".parse::<ProofStep>(),
            Err(StepParseError::InvalidPosition(_))
        ));
        assert!(matches!(
            "bogus@1".parse::<ProofStep>(),
            Err(StepParseError::UnknownLaw(_))
        ));
    }

    #[test]
    fn test_sequence_parse_and_render() {
        let seq: ProofSequence = "associative@0, commutative@0".parse().unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.to_string(), "associative@0, commutative@0");
        assert_eq!(seq.codes(), "{{5, 0}, {4, 0}}");
        assert_eq!(
            seq.describe(),
            "associative law, distributive law, De Morgan's law or double negation at 0, \
             commutative law or negation at 0"
        );
    }

    #[test]
    fn test_single_step_candidates() {
        let all = collect(CandidateCounter::new(1, 4));
        assert_eq!(all.len(), FINAL_STEP_LAWS);
        assert!(all.iter().all(|c| c[0].position == 0));
        assert!(all.iter().all(|c| c[0].law != Law::Substitution));
        assert_eq!(all[0][0].law, Law::IdentityOr);
        assert_eq!(all[9][0].law, Law::AbsorptionAnd);
    }

    #[test]
    fn test_counting_order() {
        let all = collect(CandidateCounter::new(2, 3));
        assert_eq!(all.len() as u128, CandidateCounter::candidate_count(2, 3));
        assert_eq!(all.len(), 10 * 3 * 11);
        // The final law turns over fastest, then the first position, then the first law.
        assert_eq!(all[0], vec![ProofStep::new(Law::IdentityOr, 0); 2]);
        assert_eq!(all[1][1].law, Law::IdentityAnd);
        assert_eq!(all[10][0], ProofStep::new(Law::IdentityOr, 1));
        assert_eq!(all[30][0], ProofStep::new(Law::IdentityAnd, 0));
        assert!(all.iter().all(|c| c[1].position == 0));
    }

    #[test]
    fn test_chunks_partition_the_space() {
        let whole = collect(CandidateCounter::new(2, 2));
        let mut chunked = Vec::new();
        for leading in 0..CandidateCounter::chunk_count(2) {
            chunked.extend(collect(CandidateCounter::chunk(2, 2, leading)));
        }
        assert_eq!(whole, chunked);
        assert!(collect(CandidateCounter::chunk(2, 2, 11)).is_empty());
    }

    #[test]
    fn test_degenerate_counters() {
        assert!(collect(CandidateCounter::new(0, 5)).is_empty());
        assert!(collect(CandidateCounter::new(2, 0)).is_empty());
        assert_eq!(CandidateCounter::candidate_count(0, 5), 0);
        assert_eq!(CandidateCounter::candidate_count(3, 2), 10 * 22 * 22);
    }
}
