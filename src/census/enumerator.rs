//! Odometer over every formula with a fixed number of symbols

use crate::error::{CensusError, FormulaError};
use crate::ir::{Formula, Symbol, MAX_VARIABLES, MIN_SLACK};

/// Fewest symbols a census formula can have (`- F`)
pub const MIN_SYMBOLS: usize = 2;

/// Code of the last operator; the first symbol never exceeds it
const LAST_OPERATOR_CODE: u32 = 3;

/// Yields every well-formed, gap-free formula of `n` symbols whose first
/// symbol is an operator, in ascending code order.
///
/// The alphabet is `- + * F T x0 .. x{n-1}`; each position runs through it
/// with the last position turning over fastest.
#[derive(Debug, Clone)]
pub struct FormulaEnumerator {
    codes: Vec<u32>,
    max_code: u32,
    slack: usize,
    done: bool,
}

impl FormulaEnumerator {
    pub fn new(symbols: usize, slack: usize) -> Result<Self, CensusError> {
        if symbols < MIN_SYMBOLS {
            return Err(CensusError::TooFewSymbols {
                symbols,
                min: MIN_SYMBOLS,
            });
        }
        if symbols > MAX_VARIABLES {
            return Err(CensusError::TooManySymbols {
                symbols,
                max: MAX_VARIABLES,
            });
        }
        if slack < MIN_SLACK {
            return Err(FormulaError::InsufficientSlack {
                slack,
                min: MIN_SLACK,
            }
            .into());
        }
        let max_code = Symbol::var(symbols as u32 - 1).code();
        Ok(Self {
            codes: vec![Symbol::Not.code(); symbols],
            max_code,
            slack,
            done: false,
        })
    }

    pub fn symbols(&self) -> usize {
        self.codes.len()
    }

    /// Symbol strings the odometer walks through, valid or not
    pub fn search_space(&self) -> u128 {
        let alphabet = (self.max_code - Symbol::Not.code() + 1) as u128;
        (1..self.codes.len()).fold(LAST_OPERATOR_CODE as u128, |total, _| {
            total.saturating_mul(alphabet)
        })
    }

    fn advance(&mut self) {
        let mut i = self.codes.len() - 1;
        self.codes[i] += 1;
        while self.codes[i] > self.max_code && i > 0 {
            self.codes[i] = Symbol::Not.code();
            i -= 1;
            self.codes[i] += 1;
        }
        if self.codes[0] > LAST_OPERATOR_CODE {
            self.done = true;
        }
    }
}

impl Iterator for FormulaEnumerator {
    type Item = Formula;

    fn next(&mut self) -> Option<Formula> {
        while !self.done {
            let body: Vec<Symbol> = self.codes.iter().map(|&c| Symbol::from_code(c)).collect();
            self.advance();
            if let Ok(formula) = Formula::from_body(&body, self.slack) {
                return Some(formula);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::DEFAULT_SLACK;

    fn texts(symbols: usize) -> Vec<String> {
        FormulaEnumerator::new(symbols, DEFAULT_SLACK)
            .unwrap()
            .map(|f| f.to_string())
            .collect()
    }

    #[test]
    fn test_two_symbols() {
        assert_eq!(texts(2), vec!["[- F]", "[- T]", "[- x0]"]);
    }

    #[test]
    fn test_three_symbols() {
        let all = texts(3);
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], "[- - F]");
        assert!(all.contains(&"[+ x1 x0]".to_string()));
        assert!(!all.iter().any(|f| f.contains("x2")));
        assert_eq!(all.last().map(String::as_str), Some("[* x1 x0]"));
    }

    #[test]
    fn test_search_space() {
        let enumerator = FormulaEnumerator::new(3, DEFAULT_SLACK).unwrap();
        assert_eq!(enumerator.symbols(), 3);
        assert_eq!(enumerator.search_space(), 3 * 8 * 8);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(
            FormulaEnumerator::new(1, DEFAULT_SLACK).unwrap_err(),
            CensusError::TooFewSymbols { symbols: 1, min: 2 }
        );
        assert!(matches!(
            FormulaEnumerator::new(3, 2),
            Err(CensusError::Formula(FormulaError::InsufficientSlack { .. }))
        ));
        assert!(matches!(
            FormulaEnumerator::new(65, DEFAULT_SLACK),
            Err(CensusError::TooManySymbols { .. })
        ));
    }
}
