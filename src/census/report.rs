//! Census tallies and the textual report

use crate::ir::Formula;
use crate::rewrite::Law;
use crate::search::{ProofSequence, SearchOutcome};
use crate::semantics::Goal;
use std::fmt;

/// Bins of formula indices, one bin per proof length, law or position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<Vec<usize>>,
}

impl Histogram {
    pub fn new(bins: usize) -> Self {
        Self {
            bins: vec![Vec::new(); bins],
        }
    }

    /// Add formula `index` to `bin`, growing the histogram if needed.
    pub fn add(&mut self, bin: usize, index: usize) {
        if bin >= self.bins.len() {
            self.bins.resize(bin + 1, Vec::new());
        }
        self.bins[bin].push(index);
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bin(&self, bin: usize) -> &[usize] {
        self.bins.get(bin).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn frequency(&self, bin: usize) -> usize {
        self.bin(bin).len()
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Non-empty bins from most to least frequent; equal frequencies keep
    /// ascending bin order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..self.bins.len())
            .filter(|&bin| self.frequency(bin) > 0)
            .collect();
        ranked.sort_by(|&a, &b| self.frequency(b).cmp(&self.frequency(a)).then(a.cmp(&b)));
        ranked
    }
}

/// One formula that matched the goal, with its minimal proof if found
#[derive(Debug, Clone)]
pub struct CensusEntry {
    pub formula: Formula,
    pub proof: Option<ProofSequence>,
}

/// Tallies over every formula of one size
#[derive(Debug, Clone)]
pub struct CensusReport {
    pub symbols: usize,
    pub goal: Goal,
    pub max_length: usize,
    /// Formulas with valid syntax and gap-free variables
    pub valid_count: usize,
    /// Formulas that evaluate to the goal; entry `i` is formula `#i`
    pub entries: Vec<CensusEntry>,
    pub proof_lengths: Histogram,
    pub laws: Histogram,
    pub positions: Histogram,
    /// Index of the first formula reaching the longest proof
    pub longest: Option<usize>,
}

impl CensusReport {
    pub fn new(symbols: usize, goal: Goal, max_length: usize, positions: usize) -> Self {
        Self {
            symbols,
            goal,
            max_length,
            valid_count: 0,
            entries: Vec::new(),
            proof_lengths: Histogram::new(max_length + 1),
            laws: Histogram::new(Law::COUNT),
            positions: Histogram::new(positions),
            longest: None,
        }
    }

    pub fn match_count(&self) -> usize {
        self.entries.len()
    }

    /// Record the search outcome for the next matching formula.
    pub fn record(&mut self, formula: &Formula, outcome: &SearchOutcome) {
        let index = self.entries.len();
        let proof = outcome.proof().cloned();
        if let Some(proof) = &proof {
            self.proof_lengths.add(proof.len(), index);
            for step in proof {
                self.laws.add(step.law.index(), index);
                self.positions.add(step.position, index);
            }
            if proof.len() > self.max_proof_length() {
                self.longest = Some(index);
            }
        }
        self.entries.push(CensusEntry {
            formula: formula.clone(),
            proof,
        });
    }

    pub fn max_proof_length(&self) -> usize {
        self.longest_entry()
            .and_then(|entry| entry.proof.as_ref())
            .map_or(0, ProofSequence::len)
    }

    pub fn longest_entry(&self) -> Option<&CensusEntry> {
        self.longest.and_then(|index| self.entries.get(index))
    }

    /// Matching formulas with no proof within the length limit
    pub fn holdouts(&self) -> impl Iterator<Item = &Formula> {
        self.entries
            .iter()
            .filter(|entry| entry.proof.is_none())
            .map(|entry| &entry.formula)
    }

    pub fn holdout_count(&self) -> usize {
        self.holdouts().count()
    }

    fn plural(&self) -> &'static str {
        match self.goal {
            Goal::Tautology => "tautologies",
            Goal::Contradiction => "contradictions",
        }
    }
}

fn write_bin(f: &mut fmt::Formatter<'_>, bin: &[usize]) -> fmt::Result {
    write!(f, "\t")?;
    for index in bin {
        write!(f, "#{}, ", index)?;
    }
    writeln!(f)
}

fn write_ranking<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    ranking: impl Iterator<Item = T>,
) -> fmt::Result {
    let items: Vec<String> = ranking.map(|item| item.to_string()).collect();
    writeln!(f, "{}", items.join(", "))
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.symbols;
        writeln!(
            f,
            "There are {} Boolean formulas with {} symbols and with valid syntax and variable labeling.",
            self.valid_count, n
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "There are {} {} with {} symbols.",
            self.match_count(),
            self.plural(),
            n
        )?;
        writeln!(f)?;

        match self.longest_entry() {
            Some(CensusEntry {
                formula,
                proof: Some(proof),
            }) => {
                writeln!(
                    f,
                    "Boolean formula with the longest proof: {} = {}",
                    formula.codes(),
                    formula
                )?;
                writeln!(f, "Longest proof: {} = [{}]", proof.codes(), proof.describe())?;
            }
            _ => writeln!(f, "Boolean formula with the longest proof: (none)")?,
        }
        writeln!(f, "Max proof length = {}", self.max_proof_length())?;
        writeln!(f)?;

        writeln!(f, "Proof Length Histogram:")?;
        writeln!(f)?;
        for length in 1..=self.max_length {
            let bin = self.proof_lengths.bin(length);
            write!(
                f,
                "\t{} {} have a minimal proof length of {}",
                bin.len(),
                self.plural(),
                length
            )?;
            if bin.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, ":")?;
                write_bin(f, bin)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Most common to least common minimal proof lengths (with non-zero frequency):"
        )?;
        write_ranking(f, self.proof_lengths.ranking().into_iter())?;
        writeln!(f)?;

        writeln!(f, "Histogram of Boolean Algebra Law Occurrences:")?;
        writeln!(f)?;
        for law in Law::ALL {
            let bin = self.laws.bin(law.index());
            write!(f, "\tThe {} law occurred {} times", law.name(), bin.len())?;
            if bin.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(
                    f,
                    " in the minimal proofs of the following Boolean formulas:"
                )?;
                write_bin(f, bin)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Most common to least common Boolean algebra laws (with non-zero frequency):"
        )?;
        write_ranking(
            f,
            self.laws
                .ranking()
                .into_iter()
                .filter_map(Law::from_index)
                .map(Law::name),
        )?;
        writeln!(f)?;

        writeln!(f, "Histogram of Proof Steps per Boolean Formula Index:")?;
        writeln!(f)?;
        for position in 0..self.positions.len() {
            let bin = self.positions.bin(position);
            write!(
                f,
                "\t{} proof steps occurred at Boolean formula index {}",
                bin.len(),
                position
            )?;
            if bin.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(
                    f,
                    " in the minimal proofs of the following Boolean formulas:"
                )?;
                write_bin(f, bin)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Most common to least common Boolean formula indices (with non-zero frequency):"
        )?;
        write_ranking(f, self.positions.ranking().into_iter())?;

        let holdouts = self.holdout_count();
        if holdouts > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "{} holdouts have a minimal proof length exceeding {}:",
                holdouts, self.max_length
            )?;
            for (i, formula) in self.holdouts().enumerate() {
                writeln!(f, "{}: {} = {}", i, formula.codes(), formula)?;
            }
        }
        Ok(())
    }
}
