//! Associativity, distributivity, De Morgan and double negation
//!
//! These share a single law index. The alternatives are tried in order
//! and the first that matches wins.

use super::Bindings;
use crate::ir::{Formula, Symbol};

pub(super) fn apply(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    associative(f, s)
        || distribute(f, b, s)
        || factor(f, b, s)
        || de_morgan_expand(f, s)
        || de_morgan_factor(f, s)
        || double_negation(f, s)
}

/// `op a op b c <-> op op a b c`
fn associative(f: &mut Formula, s: usize) -> bool {
    if s + 5 > f.stop() {
        return false;
    }
    let op = f[s];
    if op.is_binary()
        && (f[s + 1].is_boolean() || f[s + 2].is_boolean())
        && (f[s + 1] == op || f[s + 2] == op)
        && f[s + 3].is_boolean()
        && f[s + 4].is_boolean()
    {
        f.swap(s + 1, s + 2);
        return true;
    }
    false
}

/// `+ a * b c -> * + a b + a c` and its dual
fn distribute(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 5 > f.stop() || !f.has_room(2) {
        return false;
    }
    if f[s].is_binary()
        && f[s + 2] == f[s].dual()
        && f[s + 1].is_boolean()
        && f[s + 3].is_boolean()
        && f[s + 4].is_boolean()
    {
        b.increment(f[s + 1]);
        f.shift_right(s + 5, s + 7);
        f[s + 6] = f[s + 4];
        f[s + 5] = f[s + 1];
        f[s + 1] = f[s];
        f[s + 4] = f[s];
        f[s] = f[s + 2];
        f[s + 2] = f[s + 5];
        return true;
    }
    false
}

/// `* + a b + a c -> + a * b c` and its dual
fn factor(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 7 > f.stop() {
        return false;
    }
    let inner = f[s].dual();
    if f[s].is_binary()
        && f[s + 1] == inner
        && f[s + 4] == inner
        && f[s + 2].is_boolean()
        && f[s + 3].is_boolean()
        && f[s + 6].is_boolean()
        && f[s + 2] == f[s + 5]
    {
        f[s + 1] = f[s + 2];
        f[s + 2] = f[s];
        f[s] = f[s + 4];
        f[s + 4] = f[s + 6];
        f.shift_left(s + 7, s + 5);
        b.decrement(f[s + 1], true);
        return true;
    }
    false
}

/// `- + a b -> * - a - b` and its dual
fn de_morgan_expand(f: &mut Formula, s: usize) -> bool {
    if s + 4 > f.stop() || !f.has_room(1) {
        return false;
    }
    if f[s] == Symbol::Not
        && f[s + 1].is_binary()
        && f[s + 2].is_boolean()
        && f[s + 3].is_boolean()
    {
        f.shift_right(s + 4, s + 5);
        f[s] = f[s + 1].dual();
        f[s + 1] = Symbol::Not;
        f[s + 4] = f[s + 3];
        f[s + 3] = Symbol::Not;
        return true;
    }
    false
}

/// `* - a - b -> - + a b` and its dual
fn de_morgan_factor(f: &mut Formula, s: usize) -> bool {
    if s + 5 > f.stop() {
        return false;
    }
    if f[s].is_binary()
        && f[s + 1] == Symbol::Not
        && f[s + 2].is_boolean()
        && f[s + 3] == Symbol::Not
        && f[s + 4].is_boolean()
    {
        f[s + 1] = f[s].dual();
        f[s] = Symbol::Not;
        f[s + 3] = f[s + 4];
        f.shift_left(s + 5, s + 4);
        return true;
    }
    false
}

/// `- - a -> a`, else `a -> - - a`
fn double_negation(f: &mut Formula, s: usize) -> bool {
    if s + 3 <= f.stop()
        && f[s] == Symbol::Not
        && f[s + 1] == Symbol::Not
        && f[s + 2].is_boolean()
    {
        f[s] = f[s + 2];
        f.shift_left(s + 3, s + 1);
        return true;
    }
    if f[s].is_boolean() && f.has_room(2) {
        f.shift_right(s + 1, s + 3);
        f[s + 2] = f[s];
        f[s] = Symbol::Not;
        f[s + 1] = Symbol::Not;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::ir::{Formula, Symbol};
    use crate::rewrite::tests::rewrite;
    use crate::rewrite::{apply_law, Bindings, Law};

    const LAW: Law = Law::AssociativeDistributive;

    #[test]
    fn test_associative_both_directions() {
        assert_eq!(
            rewrite("+ x0 + x1 x2", LAW, 0).as_deref(),
            Some("[+ + x0 x1 x2]")
        );
        assert_eq!(
            rewrite("* * x0 x1 x2", LAW, 0).as_deref(),
            Some("[* x0 * x1 x2]")
        );
    }

    #[test]
    fn test_mixed_operators_distribute() {
        assert_eq!(
            rewrite("+ x0 * x1 x2", LAW, 0).as_deref(),
            Some("[* + x0 x1 + x0 x2]")
        );
        assert_eq!(
            rewrite("* x0 + x1 x2", LAW, 0).as_deref(),
            Some("[+ * x0 x1 * x0 x2]")
        );
    }

    #[test]
    fn test_factor_reverses_distribution() {
        assert_eq!(
            rewrite("* + x0 x1 + x0 x2", LAW, 0).as_deref(),
            Some("[+ x0 * x1 x2]")
        );
        assert_eq!(rewrite("* + x0 x1 + x2 x0", LAW, 0), None);
    }

    #[test]
    fn test_distribution_keeps_counts() {
        let original: Formula = "+ x0 * x1 x2".parse().unwrap();
        let mut formula = original.clone();
        let mut bindings = Bindings::from_formula(&formula);
        let before = bindings.clone();

        assert!(apply_law(&mut formula, &mut bindings, LAW, 0));
        assert_eq!(bindings.count(Symbol::var(0)), 2);
        assert!(bindings.is_consistent_with(&formula));

        assert!(apply_law(&mut formula, &mut bindings, LAW, 0));
        assert_eq!(formula, original);
        assert_eq!(bindings, before);
    }

    #[test]
    fn test_de_morgan() {
        assert_eq!(
            rewrite("- + x0 x1", LAW, 0).as_deref(),
            Some("[* - x0 - x1]")
        );
        assert_eq!(
            rewrite("- * x0 x1", LAW, 0).as_deref(),
            Some("[+ - x0 - x1]")
        );
        assert_eq!(
            rewrite("* - x0 - x1", LAW, 0).as_deref(),
            Some("[- + x0 x1]")
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(rewrite("- - T", LAW, 0).as_deref(), Some("[T]"));
        assert_eq!(rewrite("- - T", LAW, 2).as_deref(), Some("[- - - - T]"));
        assert_eq!(rewrite("+ x0 x1", LAW, 1).as_deref(), Some("[+ - - x0 x1]"));
    }

    #[test]
    fn test_no_alternative_matches() {
        assert_eq!(rewrite("- + x0 x1", LAW, 1), None);
        assert_eq!(rewrite("- - T", LAW, 1), None);
    }
}
