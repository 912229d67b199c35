//! 3-CNF to prefix notation conversion

use crate::error::{FormulaError, FormulaResult};
use crate::ir::formula::Formula;
use crate::ir::symbol::{Symbol, MAX_VARIABLES};

/// One clause of three signed literals: `k` is `x{k-1}`, `-k` its negation
pub type Clause = [i32; 3];

/// Convert a 3-CNF formula into `* C1 * C2 ... Cn`, each clause rendered
/// as `+ l1 + l2 l3`.
pub fn cnf_to_formula(clauses: &[Clause], slack: usize) -> FormulaResult<Formula> {
    if clauses.is_empty() {
        return Err(FormulaError::EmptyCnf);
    }
    let literal_count = clauses.len() * 3;
    for (clause, literals) in clauses.iter().enumerate() {
        for &literal in literals {
            if literal == 0 || literal.unsigned_abs() as usize > literal_count {
                return Err(FormulaError::LiteralOutOfRange { clause, literal });
            }
            let id = literal.unsigned_abs() - 1;
            if id as usize >= MAX_VARIABLES {
                return Err(FormulaError::VariableOutOfRange {
                    id,
                    max: MAX_VARIABLES,
                });
            }
        }
    }

    let mut body = Vec::with_capacity(literal_count * 2 + clauses.len() * 3);
    let last = clauses.len() - 1;
    for (i, literals) in clauses.iter().enumerate() {
        if i < last {
            body.push(Symbol::And);
        }
        body.push(Symbol::Or);
        for (j, &literal) in literals.iter().enumerate() {
            if literal < 0 {
                body.push(Symbol::Not);
            }
            body.push(Symbol::var(literal.unsigned_abs() - 1));
            if j == 0 {
                body.push(Symbol::Or);
            }
        }
    }
    Formula::from_body(&body, slack)
}

/// Parse clauses written as whitespace-separated literals, one clause per
/// line or per `;`-separated group, e.g. `"1 -3 4; -2 3 -5"`.
pub fn parse_clauses(text: &str) -> FormulaResult<Vec<Clause>> {
    let mut clauses = Vec::new();
    for group in text.split(|c| c == ';' || c == '\n') {
        let group = group.trim();
        if group.is_empty() {
            continue;
        }
        let literals = group
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<i32>().map_err(|_| FormulaError::UnknownToken {
                    token: t.to_string(),
                    offset: clauses.len(),
                })
            })
            .collect::<FormulaResult<Vec<i32>>>()?;
        let clause: Clause = literals.as_slice().try_into().map_err(|_| {
            FormulaError::syntax(format!(
                "clause {} has {} literals instead of 3",
                clauses.len(),
                literals.len()
            ))
        })?;
        clauses.push(clause);
    }
    Ok(clauses)
}
