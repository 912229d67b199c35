//! Identity, idempotence, commutativity and constant negation

use super::Bindings;
use crate::ir::{Formula, Symbol};

/// `op a unit -> a`, else `a -> op a unit`
pub(super) fn identity(f: &mut Formula, s: usize, op: Symbol, unit: Symbol) -> bool {
    if s + 3 <= f.stop() && f[s] == op && f[s + 1].is_boolean() && f[s + 2] == unit {
        f[s] = f[s + 1];
        f.shift_left(s + 3, s + 1);
        return true;
    }
    if f[s].is_boolean() && f.has_room(2) {
        f.shift_right(s + 1, s + 3);
        f[s + 1] = f[s];
        f[s] = op;
        f[s + 2] = unit;
        return true;
    }
    false
}

/// `op a a -> a`, else `a -> op a a`
pub(super) fn idempotent(f: &mut Formula, b: &mut Bindings, s: usize, op: Symbol) -> bool {
    if s + 3 <= f.stop() && f[s] == op && f[s + 1].is_boolean() && f[s + 1] == f[s + 2] {
        f[s] = f[s + 1];
        f.shift_left(s + 3, s + 1);
        b.decrement(f[s], true);
        return true;
    }
    if f[s].is_boolean() && f.has_room(2) {
        b.increment(f[s]);
        f.shift_right(s + 1, s + 3);
        f[s + 1] = f[s];
        f[s + 2] = f[s];
        f[s] = op;
        return true;
    }
    false
}

/// `op a b -> op b a` for single-symbol operands
pub(super) fn commutative(f: &mut Formula, s: usize) -> bool {
    if s + 3 <= f.stop() && f[s].is_binary() && f[s + 1].is_boolean() && f[s + 2].is_boolean() {
        f.swap(s + 1, s + 2);
        return true;
    }
    false
}

/// `- T -> F`, `- F -> T`, else `F -> - T`, `T -> - F`
pub(super) fn negation(f: &mut Formula, s: usize) -> bool {
    if f[s] == Symbol::Not {
        if s + 2 > f.stop() {
            return false;
        }
        return match f[s + 1].truth_value() {
            Some(value) => {
                f[s] = Symbol::constant(!value);
                f.shift_left(s + 2, s + 1);
                true
            }
            None => false,
        };
    }
    match f[s].truth_value() {
        Some(value) if f.has_room(1) => {
            f.shift_right(s + 1, s + 2);
            f[s] = Symbol::Not;
            f[s + 1] = Symbol::constant(!value);
            true
        }
        _ => false,
    }
}
