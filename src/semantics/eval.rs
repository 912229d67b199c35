//! Right-to-left stack machine over prefix-order formulas

use crate::error::{FormulaError, FormulaResult};
use crate::ir::{Symbol, VarId, MAX_VARIABLES};
use crate::rewrite::{Bindings, Definition};

/// Check the prefix arity invariant of a formula body.
///
/// Reading right to left, every operand pushes one value, Not pops one and
/// pushes one, Or/And pop two and push one. The body is well formed iff the
/// stack never underflows and exactly one value remains.
pub fn check_syntax(body: &[Symbol]) -> FormulaResult<()> {
    let mut depth: usize = 0;
    for (i, symbol) in body.iter().enumerate().rev() {
        match symbol.arity() {
            None => return Err(FormulaError::ExtraTerminator { position: i }),
            Some(arity) => {
                if depth < arity {
                    return Err(FormulaError::syntax(format!(
                        "'{}' at position {} is missing an operand",
                        symbol, i
                    )));
                }
                depth = depth - arity + 1;
            }
        }
    }
    match depth {
        0 => Err(FormulaError::Empty),
        1 => Ok(()),
        n => Err(FormulaError::syntax(format!(
            "{} values remain instead of one",
            n
        ))),
    }
}

pub fn validate_syntax(body: &[Symbol]) -> bool {
    check_syntax(body).is_ok()
}

/// Count the original variables of a body.
///
/// Variables must be numbered densely from `x0`; synthetic variables are
/// ignored.
pub fn count_variables(body: &[Symbol]) -> FormulaResult<usize> {
    let mut seen: u64 = 0;
    for symbol in body {
        if let Symbol::Var(id) = symbol {
            if id.is_synthetic() {
                continue;
            }
            seen |= 1u64 << id.0;
        }
    }
    let count = seen.count_ones() as usize;
    let dense = if count == MAX_VARIABLES {
        u64::MAX
    } else {
        (1u64 << count) - 1
    };
    if seen != dense {
        return Err(FormulaError::VariableGap {
            missing: seen.trailing_ones(),
        });
    }
    Ok(count)
}

/// Evaluate a body with variable `xi` taken from bit `i` of `assignment`.
///
/// Returns `None` for malformed bodies or synthetic variables.
pub fn evaluate(body: &[Symbol], assignment: u64) -> Option<bool> {
    run(body, |id| id.bit().map(|bit| (assignment >> bit) & 1 == 1))
}

/// Evaluate a body that may contain synthetic variables, reading each
/// synthetic through its recorded definition.
pub fn evaluate_with(body: &[Symbol], bindings: &Bindings, assignment: u64) -> Option<bool> {
    run(body, |id| resolve(Symbol::Var(id), bindings, assignment))
}

fn resolve(symbol: Symbol, bindings: &Bindings, assignment: u64) -> Option<bool> {
    match symbol {
        Symbol::False => Some(false),
        Symbol::True => Some(true),
        Symbol::Var(id) => match id.bit() {
            Some(bit) => Some((assignment >> bit) & 1 == 1),
            None => match bindings.definition(id)? {
                Definition::Not(a) => Some(!resolve(a, bindings, assignment)?),
                Definition::Or(a, b) => Some(
                    resolve(a, bindings, assignment)? | resolve(b, bindings, assignment)?,
                ),
                Definition::And(a, b) => Some(
                    resolve(a, bindings, assignment)? & resolve(b, bindings, assignment)?,
                ),
            },
        },
        _ => None,
    }
}

fn run<F>(body: &[Symbol], lookup: F) -> Option<bool>
where
    F: Fn(VarId) -> Option<bool>,
{
    let mut stack: Vec<bool> = Vec::with_capacity(body.len());
    for symbol in body.iter().rev() {
        let value = match *symbol {
            Symbol::Not => !stack.pop()?,
            Symbol::Or => {
                let left = stack.pop()?;
                let right = stack.pop()?;
                left || right
            }
            Symbol::And => {
                let left = stack.pop()?;
                let right = stack.pop()?;
                left && right
            }
            Symbol::False => false,
            Symbol::True => true,
            Symbol::Var(id) => lookup(id)?,
            Symbol::Stop => return None,
        };
        stack.push(value);
    }
    let root = stack.pop()?;
    stack.is_empty().then_some(root)
}
