//! Rewrites arbitrary formulas into normal form: existential quantification
//! (order 2 only), negation, conjunction, and atomic predicates.
//!
//! Three structural recursions run in sequence, matching the three visitor
//! passes of the implementation this crate's semantics are grounded on
//! (`ConnectiveEliminationVisitor`, `DoubleNegationEliminationVisitor`,
//! `FirstOrderReplacementVisitor`). Each pass is a plain recursive `match`:
//! atomic predicates pass through unchanged, compound forms are rebuilt from
//! recursively rewritten children.

use crate::variable::Variable;
use crate::wff::Wff;
use std::fmt;

/// Rewrites `Forall`, `If`, and `Or` away using De Morgan dualities.
fn eliminate_connectives<V: Eq + Clone + fmt::Debug>(f: Wff<V>) -> Wff<V> {
    match f {
        Wff::Exists(v, body) => Wff::exists(v, eliminate_connectives(*body)),
        Wff::Forall(v, body) => {
            Wff::not(Wff::exists(v, Wff::not(eliminate_connectives(*body))))
        }
        Wff::Not(body) => Wff::not(eliminate_connectives(*body)),
        Wff::And(l, r) => Wff::and(eliminate_connectives(*l), eliminate_connectives(*r)),
        Wff::If(l, r) => {
            let l = eliminate_connectives(*l);
            let r = eliminate_connectives(*r);
            Wff::not(Wff::and(l, Wff::not(r)))
        }
        Wff::Or(l, r) => {
            let l = eliminate_connectives(*l);
            let r = eliminate_connectives(*r);
            Wff::not(Wff::and(Wff::not(l), Wff::not(r)))
        }
        atomic => atomic,
    }
}

/// Collapses `Not(Not(phi))` to `phi`, bottom-up.
fn eliminate_double_negation<V: Eq + Clone + fmt::Debug>(f: Wff<V>) -> Wff<V> {
    match f {
        Wff::Not(body) => match eliminate_double_negation(*body) {
            Wff::Not(inner) => *inner,
            other => Wff::not(other),
        },
        Wff::Exists(v, body) => Wff::exists(v, eliminate_double_negation(*body)),
        Wff::Forall(v, body) => Wff::forall(v, eliminate_double_negation(*body)),
        Wff::And(l, r) => Wff::and(
            eliminate_double_negation(*l),
            eliminate_double_negation(*r),
        ),
        Wff::Or(l, r) => Wff::or(
            eliminate_double_negation(*l),
            eliminate_double_negation(*r),
        ),
        Wff::If(l, r) => Wff::implies(
            eliminate_double_negation(*l),
            eliminate_double_negation(*r),
        ),
        atomic => atomic,
    }
}

/// Promotes each order-1 `Exists` to an order-2 `Exists` guarded by
/// `Singleton`. Open question carried from the source this is grounded on:
/// the body's free occurrences of the bound variable are *not* rewritten to
/// order 2 — promoting a position variable to a singleton set imposes no new
/// restriction because every atomic predicate treats a singleton set
/// identically to its unique element, so the substitution is unnecessary.
/// This invariant lives in the base automaton constructors (`base.rs`) and
/// must be preserved by any change to either side.
fn promote_first_order<V: Eq + Clone + fmt::Debug>(f: Wff<V>) -> Wff<V> {
    match f {
        Wff::Exists(v, body) => {
            let body = promote_first_order(*body);
            if v.order() == 1 {
                let v2 = Variable::new(v.name().to_string(), 2);
                Wff::exists(v2.clone(), Wff::and(Wff::singleton(v2), body))
            } else {
                Wff::exists(v, body)
            }
        }
        Wff::Forall(v, body) => Wff::forall(v, promote_first_order(*body)),
        Wff::Not(body) => Wff::not(promote_first_order(*body)),
        Wff::And(l, r) => Wff::and(promote_first_order(*l), promote_first_order(*r)),
        Wff::Or(l, r) => Wff::or(promote_first_order(*l), promote_first_order(*r)),
        Wff::If(l, r) => Wff::implies(promote_first_order(*l), promote_first_order(*r)),
        atomic => atomic,
    }
}

/// Rewrites `formula` into normal form: only `Exists` (order 2), `Not`,
/// `And`, and the atomic predicates remain.
pub fn simplify<V: Eq + Clone + fmt::Debug>(formula: Wff<V>) -> Wff<V> {
    let formula = eliminate_connectives(formula);
    let formula = eliminate_double_negation(formula);
    promote_first_order(formula)
}
