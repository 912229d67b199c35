//! Fixed-capacity prefix-order formula buffer

use crate::error::{FormulaError, FormulaResult};
use crate::ir::symbol::{Symbol, MAX_VARIABLES};
use crate::semantics::{check_syntax, count_variables, evaluate, Goal};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Trailing room added after the terminator when none is requested
pub const DEFAULT_SLACK: usize = 7;

/// Smallest slack that fits the largest single expansion
pub const MIN_SLACK: usize = 7;

/// A Boolean formula in prefix order.
///
/// The buffer holds `stop + 1 + slack` symbols: the body `[0, stop)`, the
/// end-of-formula marker at `stop`, then room for expansions to grow into.
/// Anything past `stop` is scratch and never read as part of the formula.
#[derive(Debug, Clone)]
pub struct Formula {
    symbols: Vec<Symbol>,
    stop: usize,
    variables: usize,
}

impl Formula {
    /// Build a formula from a terminated symbol sequence, checking it
    /// against the declared number of original variables.
    pub fn from_symbols(
        symbols: &[Symbol],
        declared_variables: usize,
        slack: usize,
    ) -> FormulaResult<Self> {
        let body = match symbols.split_last() {
            Some((Symbol::Stop, body)) => body,
            _ => return Err(FormulaError::MissingTerminator),
        };
        let formula = Self::from_body(body, slack)?;
        if formula.variables != declared_variables {
            return Err(FormulaError::VariableCountMismatch {
                declared: declared_variables,
                found: formula.variables,
            });
        }
        Ok(formula)
    }

    /// Build a formula from an unterminated body, inferring the variable count.
    pub fn from_body(body: &[Symbol], slack: usize) -> FormulaResult<Self> {
        if slack < MIN_SLACK {
            return Err(FormulaError::InsufficientSlack {
                slack,
                min: MIN_SLACK,
            });
        }
        for (position, symbol) in body.iter().enumerate() {
            match symbol {
                Symbol::Stop => return Err(FormulaError::ExtraTerminator { position }),
                Symbol::Var(id) if id.is_synthetic() => {
                    return Err(FormulaError::SyntheticInput {
                        index: id.0 - MAX_VARIABLES as u32,
                    })
                }
                _ => {}
            }
        }
        check_syntax(body)?;
        let variables = count_variables(body)?;

        let stop = body.len();
        let mut symbols = vec![Symbol::Stop; stop + 1 + slack];
        symbols[..stop].copy_from_slice(body);
        Ok(Self {
            symbols,
            stop,
            variables,
        })
    }

    /// Parse the text form, e.g. `"+ x0 - x0"` or `"[+, x0, -, x0]"`.
    pub fn parse(text: &str, slack: usize) -> FormulaResult<Self> {
        let body = tokenize(text)?;
        if body.is_empty() {
            return Err(FormulaError::Empty);
        }
        Self::from_body(&body, slack)
    }

    /// Index of the end-of-formula marker
    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn len(&self) -> usize {
        self.stop
    }

    pub fn is_empty(&self) -> bool {
        self.stop == 0
    }

    pub fn capacity(&self) -> usize {
        self.symbols.len()
    }

    /// Trailing room configured when the formula was built
    pub fn slack(&self) -> usize {
        self.capacity() - self.stop - 1
    }

    pub fn body(&self) -> &[Symbol] {
        &self.symbols[..self.stop]
    }

    /// Number of original variables `x0..x{k-1}`
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Whether growing by `growth` symbols keeps the marker inside the buffer
    pub fn has_room(&self, growth: usize) -> bool {
        self.stop + growth < self.capacity()
    }

    /// Move `[src, stop]` down to start at `dst`.
    pub fn shift_left(&mut self, src: usize, dst: usize) {
        debug_assert!(dst <= src && src <= self.stop);
        self.symbols.copy_within(src..=self.stop, dst);
        self.stop -= src - dst;
    }

    /// Move `[src, stop]` up to start at `dst`.
    pub fn shift_right(&mut self, src: usize, dst: usize) {
        debug_assert!(src <= dst && src <= self.stop);
        debug_assert!(self.stop + (dst - src) < self.capacity());
        self.symbols.copy_within(src..=self.stop, dst);
        self.stop += dst - src;
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.symbols.swap(i, j);
    }

    /// Overwrite this buffer with `other`, reusing the allocation.
    pub fn reset_from(&mut self, other: &Formula) {
        self.symbols.clone_from(&other.symbols);
        self.stop = other.stop;
        self.variables = other.variables;
    }

    /// True iff the body is exactly the goal's constant
    pub fn is_constant(&self, goal: Goal) -> bool {
        self.stop == 1 && self.symbols[0] == goal.symbol()
    }

    /// Value under `assignment`; bodies containing synthetic variables
    /// evaluate to false here and need `semantics::evaluate_with`.
    pub fn evaluate(&self, assignment: u64) -> bool {
        evaluate(self.body(), assignment) == Some(true)
    }

    /// Numeric symbol codes, e.g. `{2, 6, 1, 6}`
    pub fn codes(&self) -> String {
        let codes: Vec<String> = self.body().iter().map(|s| s.code().to_string()).collect();
        format!("{{{}}}", codes.join(", "))
    }
}

fn tokenize(text: &str) -> FormulaResult<Vec<Symbol>> {
    let mut body = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let symbol = match c {
            c if c.is_whitespace() || matches!(c, ',' | '[' | ']') => continue,
            '-' => Symbol::Not,
            '+' => Symbol::Or,
            '*' => Symbol::And,
            'F' => Symbol::False,
            'T' => Symbol::True,
            'x' | 's' => {
                let mut digits = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }
                let token = format!("{}{}", c, digits);
                let index: u32 = digits
                    .parse()
                    .map_err(|_| FormulaError::UnknownToken {
                        token: token.clone(),
                        offset,
                    })?;
                if c == 's' {
                    return Err(FormulaError::SyntheticInput { index });
                }
                if index as usize >= MAX_VARIABLES {
                    return Err(FormulaError::VariableOutOfRange {
                        id: index,
                        max: MAX_VARIABLES,
                    });
                }
                Symbol::var(index)
            }
            other => {
                return Err(FormulaError::UnknownToken {
                    token: other.to_string(),
                    offset,
                })
            }
        };
        body.push(symbol);
    }
    Ok(body)
}

impl std::str::FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s, DEFAULT_SLACK)
    }
}

impl Index<usize> for Formula {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }
}

impl IndexMut<usize> for Formula {
    fn index_mut(&mut self, index: usize) -> &mut Symbol {
        &mut self.symbols[index]
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.body() == other.body()
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body().hash(state);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.body().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    fn x(i: u32) -> Symbol {
        Symbol::var(i)
    }

    #[test]
    fn test_from_symbols() {
        let f = Formula::from_symbols(&[Or, x(0), Not, x(0), Stop], 1, DEFAULT_SLACK).unwrap();
        assert_eq!(f.stop(), 4);
        assert_eq!(f.capacity(), 4 + 1 + DEFAULT_SLACK);
        assert_eq!(f.variable_count(), 1);
        assert_eq!(f[4], Stop);
    }

    #[test]
    fn test_from_symbols_rejects() {
        assert_eq!(
            Formula::from_symbols(&[Or, x(0), Not, x(0)], 1, 7),
            Err(FormulaError::MissingTerminator)
        );
        assert_eq!(
            Formula::from_symbols(&[Not, Stop, True, Stop], 0, 7),
            Err(FormulaError::ExtraTerminator { position: 1 })
        );
        assert_eq!(
            Formula::from_symbols(&[And, x(0), x(2), Stop], 3, 7),
            Err(FormulaError::VariableGap { missing: 1 })
        );
        assert_eq!(
            Formula::from_symbols(&[Or, x(0), x(1), Stop], 3, 7),
            Err(FormulaError::VariableCountMismatch {
                declared: 3,
                found: 2
            })
        );
        assert!(matches!(
            Formula::from_symbols(&[Or, x(0), Stop], 1, 7),
            Err(FormulaError::Syntax { .. })
        ));
        assert_eq!(
            Formula::from_symbols(&[True, Stop], 0, 3),
            Err(FormulaError::InsufficientSlack { slack: 3, min: 7 })
        );
        assert_eq!(
            Formula::from_symbols(&[Stop], 0, 7),
            Err(FormulaError::Empty)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let f: Formula = "+ x0 - x0".parse().unwrap();
        assert_eq!(f.to_string(), "[+ x0 - x0]");
        assert_eq!(f.codes(), "{2, 6, 1, 6}");

        let g: Formula = "[+, x0, -, x0]".parse().unwrap();
        assert_eq!(f, g);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "+ x0 ?".parse::<Formula>(),
            Err(FormulaError::UnknownToken {
                token: "?".to_string(),
                offset: 5
            })
        );
        assert_eq!(
            "- x64".parse::<Formula>(),
            Err(FormulaError::VariableOutOfRange { id: 64, max: 64 })
        );
        assert_eq!(
            "- s0".parse::<Formula>(),
            Err(FormulaError::SyntheticInput { index: 0 })
        );
        assert!(matches!(
            "+ x T".parse::<Formula>(),
            Err(FormulaError::UnknownToken { .. })
        ));
        assert_eq!("  ".parse::<Formula>(), Err(FormulaError::Empty));
    }

    #[test]
    fn test_shifts_track_stop() {
        let mut f: Formula = "+ x0 F".parse().unwrap();
        f.shift_right(1, 3);
        assert_eq!(f.stop(), 5);
        assert_eq!(f.body(), &[Or, x(0), False, x(0), False]);
        f.shift_left(3, 1);
        assert_eq!(f.stop(), 3);
        assert_eq!(f.body(), &[Or, x(0), False]);
        assert_eq!(f[3], Stop);
    }

    #[test]
    fn test_has_room() {
        let f: Formula = "T".parse().unwrap();
        assert_eq!(f.capacity(), 9);
        assert!(f.has_room(7));
        assert!(!f.has_room(8));
    }

    #[test]
    fn test_reset_from_and_is_constant() {
        let original: Formula = "- F".parse().unwrap();
        let mut working = original.clone();
        working[0] = True;
        working.shift_left(2, 1);
        assert!(working.is_constant(Goal::Tautology));
        assert!(!working.is_constant(Goal::Contradiction));
        working.reset_from(&original);
        assert_eq!(working, original);
        assert_eq!(working.stop(), 2);
    }
}
