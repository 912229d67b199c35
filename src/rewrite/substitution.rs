//! Substitution: name a sub-expression with a synthetic variable, or
//! expand a synthetic back into the structure it names

use super::{Bindings, Definition};
use crate::ir::{Formula, Symbol};

pub(super) fn apply(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    match f[s] {
        Symbol::Not => collapse_unary(f, b, s),
        Symbol::Or | Symbol::And => collapse_binary(f, b, s),
        Symbol::Var(_) => match b.definition_of(f[s]) {
            Some(definition) => expand(f, b, s, definition),
            None => false,
        },
        _ => false,
    }
}

/// `- a -> x` with `x := - a`
fn collapse_unary(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 2 > f.stop() || !f[s + 1].is_boolean() {
        return false;
    }
    let id = b.define(Definition::Not(f[s + 1]));
    f[s] = Symbol::Var(id);
    f.shift_left(s + 2, s + 1);
    true
}

/// `op a b -> x` with `x := op a b`
fn collapse_binary(f: &mut Formula, b: &mut Bindings, s: usize) -> bool {
    if s + 3 > f.stop() || !f[s + 1].is_boolean() || !f[s + 2].is_boolean() {
        return false;
    }
    let Some(definition) = Definition::binary(f[s], f[s + 1], f[s + 2]) else {
        return false;
    };
    let id = b.define(definition);
    f[s] = Symbol::Var(id);
    f.shift_left(s + 3, s + 1);
    true
}

/// `x -> - a` or `x -> op a b` from the recorded definition of `x`
fn expand(f: &mut Formula, b: &mut Bindings, s: usize, definition: Definition) -> bool {
    match definition {
        Definition::Not(a) => {
            if !f.has_room(1) {
                return false;
            }
            f.shift_right(s + 1, s + 2);
            b.decrement(f[s], false);
            f[s] = Symbol::Not;
            f[s + 1] = a;
        }
        Definition::Or(a, c) | Definition::And(a, c) => {
            if !f.has_room(2) {
                return false;
            }
            f.shift_right(s + 1, s + 3);
            b.decrement(f[s], false);
            f[s] = definition.operator();
            f[s + 1] = a;
            f[s + 2] = c;
        }
    }
    true
}
