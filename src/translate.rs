//! Drives a `Wff<V>` to a boxed `Dfa<V>` by structural recursion over the
//! normal form `simplify` produces, combining base constructors (`base.rs`)
//! with the lazy composition views (`compose.rs`) the same way the source
//! this crate's translation semantics are grounded on builds up its DFA one
//! sub-formula at a time (`translation.py`'s `TranslationVisitor`).

use crate::automaton::base;
use crate::automaton::compose::{Complement, Determinize, Intersection, Projection};
use crate::automaton::core::Dfa;
use crate::automaton::error::TranslationError;
use crate::simplify::simplify;
use crate::wff::Wff;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Translates `formula` into a deterministic finite automaton over
/// `alphabet`. Calls `simplify` internally first — callers never need to
/// pre-simplify.
pub fn translate<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    formula: &Wff<V>,
    alphabet: &BTreeSet<V>,
) -> Result<Box<dyn Dfa<V>>, TranslationError<V>> {
    let formula = simplify(formula.clone());
    translate_normal_form(&formula, alphabet)
}

fn translate_normal_form<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    formula: &Wff<V>,
    alphabet: &BTreeSet<V>,
) -> Result<Box<dyn Dfa<V>>, TranslationError<V>> {
    match formula {
        Wff::Exists(v, body) => {
            let inner = translate_normal_form(body, alphabet)?;
            let projected = Projection::new(inner, v.name().to_string());
            Ok(Box::new(Determinize::new(Box::new(projected))))
        }
        Wff::Not(body) => {
            let inner = translate_normal_form(body, alphabet)?;
            Ok(Box::new(Complement::new(inner)))
        }
        Wff::And(l, r) => {
            let left = translate_normal_form(l, alphabet)?;
            let right = translate_normal_form(r, alphabet)?;
            Ok(Box::new(Intersection::new(left, right)))
        }
        Wff::ContainedIn(l, r) => Ok(Box::new(base::contained_in_dfa(l, r, alphabet))),
        Wff::Equal(l, r) => Ok(Box::new(base::equal_dfa(l, r, alphabet))),
        Wff::Less(l, r) => Ok(Box::new(base::less_dfa(l, r, alphabet))),
        Wff::Singleton(v) => Ok(Box::new(base::singleton_dfa(v, alphabet))),
        Wff::Symbol(sym, v) => Ok(Box::new(base::symbol_dfa(*sym, v, alphabet)?)),
        Wff::Forall(..) | Wff::Or(..) | Wff::If(..) => {
            unreachable!("simplify eliminates Forall, Or, and If before translation")
        }
    }
}
