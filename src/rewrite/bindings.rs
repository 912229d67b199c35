//! Variable occurrence counts and synthetic definitions for one proof attempt

use crate::ir::{Formula, Symbol, VarId, FIRST_SYNTHETIC};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The structure a synthetic variable stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Definition {
    Not(Symbol),
    Or(Symbol, Symbol),
    And(Symbol, Symbol),
}

impl Definition {
    /// Binary definition for `op a b`, `None` unless `op` is Or or And
    pub fn binary(op: Symbol, a: Symbol, b: Symbol) -> Option<Self> {
        match op {
            Symbol::Or => Some(Definition::Or(a, b)),
            Symbol::And => Some(Definition::And(a, b)),
            _ => None,
        }
    }

    pub fn operator(self) -> Symbol {
        match self {
            Definition::Not(_) => Symbol::Not,
            Definition::Or(..) => Symbol::Or,
            Definition::And(..) => Symbol::And,
        }
    }

    pub fn operands(self) -> impl Iterator<Item = Symbol> {
        let (a, b) = match self {
            Definition::Not(a) => (a, None),
            Definition::Or(a, b) | Definition::And(a, b) => (a, Some(b)),
        };
        std::iter::once(a).chain(b)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Not(a) => write!(f, "- {}", a),
            Definition::Or(a, b) => write!(f, "+ {} {}", a, b),
            Definition::And(a, b) => write!(f, "* {} {}", a, b),
        }
    }
}

/// Table entry for one live variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Binding {
    pub count: u32,
    pub definition: Option<Definition>,
}

/// Variable binding table.
///
/// `count` for a variable is its direct occurrences in the formula plus
/// the occurrences implied through every live synthetic whose definition
/// mentions it. An entry is removed as soon as its count reaches zero.
#[derive(Debug, Clone)]
pub struct Bindings {
    entries: HashMap<VarId, Binding>,
    next_synthetic: u32,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_synthetic: FIRST_SYNTHETIC,
        }
    }
}

impl Bindings {
    /// Table for a freshly seeded formula
    pub fn from_formula(formula: &Formula) -> Self {
        let mut bindings = Self::default();
        bindings.rebuild(formula);
        bindings
    }

    /// Clear the table and rescan `formula`, restarting synthetic ids.
    pub fn rebuild(&mut self, formula: &Formula) {
        self.entries.clear();
        self.next_synthetic = FIRST_SYNTHETIC;
        for &symbol in formula.body() {
            self.increment(symbol);
        }
    }

    /// Count one more occurrence of `symbol`, cascading into its definition.
    pub fn increment(&mut self, symbol: Symbol) {
        let Symbol::Var(id) = symbol else {
            return;
        };
        let entry = self.entries.entry(id).or_default();
        entry.count += 1;
        if let Some(definition) = entry.definition {
            for operand in definition.operands() {
                self.increment(operand);
            }
        }
    }

    /// Count one fewer occurrence of `symbol`.
    ///
    /// With `cascading` the definition's operands lose an occurrence too;
    /// without it they are assumed to have moved back into the formula.
    pub fn decrement(&mut self, symbol: Symbol, cascading: bool) {
        let Symbol::Var(id) = symbol else {
            return;
        };
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        entry.count = entry.count.saturating_sub(1);
        let definition = entry.definition;
        if entry.count == 0 {
            self.entries.remove(&id);
        }
        if cascading {
            if let Some(definition) = definition {
                for operand in definition.operands() {
                    self.decrement(operand, true);
                }
            }
        }
    }

    /// Allocate a synthetic standing for `definition`, with one occurrence.
    ///
    /// The operands keep their counts: their occurrences move inside the
    /// new variable.
    pub fn define(&mut self, definition: Definition) -> VarId {
        let id = self.fresh_id();
        self.entries.insert(
            id,
            Binding {
                count: 1,
                definition: Some(definition),
            },
        );
        id
    }

    /// Next synthetic id not currently bound
    pub fn fresh_id(&mut self) -> VarId {
        loop {
            let id = VarId(self.next_synthetic);
            self.next_synthetic += 1;
            if !self.entries.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn definition(&self, id: VarId) -> Option<Definition> {
        self.entries.get(&id).and_then(|b| b.definition)
    }

    /// Definition of `symbol` if it is a live synthetic
    pub fn definition_of(&self, symbol: Symbol) -> Option<Definition> {
        symbol.as_var().and_then(|id| self.definition(id))
    }

    /// Current count, zero for unbound variables and non-variables
    pub fn count(&self, symbol: Symbol) -> u32 {
        symbol
            .as_var()
            .and_then(|id| self.entries.get(&id))
            .map_or(0, |b| b.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts of every live variable in id order
    pub fn live_counts(&self) -> BTreeMap<VarId, u32> {
        self.entries.iter().map(|(id, b)| (*id, b.count)).collect()
    }

    /// Every definition references only live variables with smaller ids.
    pub fn is_well_founded(&self) -> bool {
        self.entries.iter().all(|(id, binding)| match binding.definition {
            None => !id.is_synthetic(),
            Some(definition) => definition.operands().all(|operand| match operand {
                Symbol::Var(inner) => inner < *id && self.entries.contains_key(&inner),
                other => other.is_truth_value(),
            }),
        })
    }

    /// Whether the recorded counts agree with a fresh count of `formula`
    /// through the recorded definitions.
    pub fn is_consistent_with(&self, formula: &Formula) -> bool {
        let mut expected: BTreeMap<VarId, u32> = BTreeMap::new();
        let mut pending: Vec<Symbol> = formula.body().to_vec();
        while let Some(symbol) = pending.pop() {
            let Symbol::Var(id) = symbol else {
                continue;
            };
            *expected.entry(id).or_default() += 1;
            if let Some(definition) = self.definition(id) {
                pending.extend(definition.operands());
            }
        }
        expected == self.live_counts()
    }
}

impl PartialEq for Bindings {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Bindings {}
