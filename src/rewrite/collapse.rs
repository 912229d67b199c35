//! Laws that collapse a sub-expression: complement, domination, absorption

use super::Bindings;
use crate::ir::{Formula, Symbol};

/// `+ a - a -> T`, `* a - a -> F`, else `T -> + T - T`, `F -> * T - T`
pub(super) fn complement(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 4 <= f.stop()
        && f[s].is_binary()
        && f[s + 1].is_boolean()
        && f[s + 2] == Symbol::Not
        && f[s + 3] == f[s + 1]
    {
        let result = Symbol::constant(f[s] == Symbol::Or);
        b.decrement(f[s + 1], true);
        b.decrement(f[s + 1], true);
        f.shift_left(s + 4, s + 1);
        f[s] = result;
        return true;
    }
    match f[s].truth_value() {
        Some(value) if f.has_room(3) => {
            f.shift_right(s + 1, s + 4);
            f[s] = if value { Symbol::Or } else { Symbol::And };
            f[s + 1] = Symbol::True;
            f[s + 2] = Symbol::Not;
            f[s + 3] = Symbol::True;
            true
        }
        _ => false,
    }
}

/// `+ a T -> T`, `* a F -> F`, else `T -> + T T`, `F -> * F F`
pub(super) fn domination(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 3 <= f.stop() && f[s + 1].is_boolean() && dominates(f[s], f[s + 2]) {
        b.decrement(f[s + 1], true);
        f[s] = f[s + 2];
        f.shift_left(s + 3, s + 1);
        return true;
    }
    match f[s].truth_value() {
        Some(value) if f.has_room(2) => {
            let constant = f[s];
            f.shift_right(s + 1, s + 3);
            f[s] = if value { Symbol::Or } else { Symbol::And };
            f[s + 1] = constant;
            f[s + 2] = constant;
            true
        }
        _ => false,
    }
}

fn dominates(op: Symbol, operand: Symbol) -> bool {
    matches!(
        (op, operand),
        (Symbol::Or, Symbol::True) | (Symbol::And, Symbol::False)
    )
}

/// `outer a inner a b -> a`, else `a -> outer a inner a filler`
pub(super) fn absorption(
    f: &mut Formula,
    b: &mut Bindings,
    s: usize,
    outer: Symbol,
    inner: Symbol,
    filler: Symbol,
) -> bool {
    if s + 5 <= f.stop()
        && f[s] == outer
        && f[s + 1].is_boolean()
        && f[s + 2] == inner
        && f[s + 3] == f[s + 1]
        && f[s + 4].is_boolean()
    {
        b.decrement(f[s + 1], true);
        b.decrement(f[s + 4], true);
        f[s] = f[s + 1];
        f.shift_left(s + 5, s + 1);
        return true;
    }
    if f[s].is_boolean() && f.has_room(4) {
        f.shift_right(s + 1, s + 5);
        f[s + 1] = f[s];
        f[s + 3] = f[s];
        f[s] = outer;
        f[s + 2] = inner;
        f[s + 4] = filler;
        b.increment(f[s + 1]);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::ir::{Formula, Symbol};
    use crate::rewrite::tests::rewrite;
    use crate::rewrite::{apply_law, Bindings, Law};

    #[test]
    fn test_complement() {
        assert_eq!(rewrite("+ x0 - x0", Law::Complement, 0).as_deref(), Some("[T]"));
        assert_eq!(rewrite("* x0 - x0", Law::Complement, 0).as_deref(), Some("[F]"));
        assert_eq!(rewrite("+ x0 - x1", Law::Complement, 0), None);
        assert_eq!(
            rewrite("* x0 T", Law::Complement, 2).as_deref(),
            Some("[* x0 + T - T]")
        );
        assert_eq!(rewrite("F", Law::Complement, 0).as_deref(), Some("[* T - T]"));
    }

    #[test]
    fn test_complement_releases_variable() {
        let mut formula: Formula = "* x1 + x0 - x0".parse().unwrap();
        let mut bindings = Bindings::from_formula(&formula);
        assert!(apply_law(&mut formula, &mut bindings, Law::Complement, 2));
        assert_eq!(formula.to_string(), "[* x1 T]");
        assert_eq!(bindings.count(Symbol::var(0)), 0);
        assert!(bindings.is_consistent_with(&formula));
    }

    #[test]
    fn test_domination() {
        assert_eq!(rewrite("+ x0 T", Law::Domination, 0).as_deref(), Some("[T]"));
        assert_eq!(rewrite("* x0 F", Law::Domination, 0).as_deref(), Some("[F]"));
        assert_eq!(rewrite("T", Law::Domination, 0).as_deref(), Some("[+ T T]"));
        assert_eq!(rewrite("F", Law::Domination, 0).as_deref(), Some("[* F F]"));
        assert_eq!(rewrite("* x0 T", Law::Domination, 0), None);
    }

    #[test]
    fn test_domination_expands_constant_operand() {
        // `+ T x0` does not reduce at 0; the T at 1 still expands.
        assert_eq!(
            rewrite("+ T x0", Law::Domination, 1).as_deref(),
            Some("[+ + T T x0]")
        );
    }

    #[test]
    fn test_absorption() {
        assert_eq!(
            rewrite("+ x0 * x0 x1", Law::AbsorptionOr, 0).as_deref(),
            Some("[x0]")
        );
        assert_eq!(
            rewrite("* x0 + x0 x1", Law::AbsorptionAnd, 0).as_deref(),
            Some("[x0]")
        );
        assert_eq!(
            rewrite("x0", Law::AbsorptionOr, 0).as_deref(),
            Some("[+ x0 * x0 T]")
        );
        assert_eq!(
            rewrite("x0", Law::AbsorptionAnd, 0).as_deref(),
            Some("[* x0 + x0 F]")
        );
        assert_eq!(rewrite("+ x0 * x1 x0", Law::AbsorptionOr, 0), None);
    }

    #[test]
    fn test_absorption_round_trip() {
        let original: Formula = "- x0".parse().unwrap();
        let mut formula = original.clone();
        let mut bindings = Bindings::from_formula(&formula);
        let before = bindings.clone();
        assert!(apply_law(&mut formula, &mut bindings, Law::AbsorptionAnd, 1));
        assert_eq!(bindings.count(Symbol::var(0)), 2);
        assert!(apply_law(&mut formula, &mut bindings, Law::AbsorptionAnd, 1));
        assert_eq!(formula, original);
        assert_eq!(bindings, before);
    }
}
