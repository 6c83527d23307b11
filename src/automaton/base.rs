//! Explicit, fully materialized DFAs for the atomic predicates. States are
//! small integers drawn from a builder-scoped counter, matching the
//! teacher's `DFA`/`NFA` construction style in `src/dfa.rs` / `src/nfa.rs`,
//! generalized to the labelled-arc model (§4.2).

use crate::automaton::core::{Arc, ArcIndex, Dfa, State, Sym};
use crate::automaton::error::TranslationError;
use crate::variable::Variable;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Builder for `BaseDfa`. Maintains a state counter, the start state, the
/// set of final states, and a per-state list of arcs.
pub(crate) struct Builder<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    alphabet: BTreeSet<V>,
    start: Option<usize>,
    finals: BTreeSet<usize>,
    transitions: Vec<Vec<Arc<V>>>,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Builder<V> {
    pub(crate) fn new(alphabet: BTreeSet<V>) -> Builder<V> {
        Builder {
            alphabet,
            start: None,
            finals: BTreeSet::new(),
            transitions: Vec::new(),
        }
    }

    pub(crate) fn add_state(&mut self) -> usize {
        let state = self.transitions.len();
        self.transitions.push(Vec::new());
        state
    }

    pub(crate) fn set_start(&mut self, state: usize) {
        self.start = Some(state);
    }

    pub(crate) fn set_final(&mut self, state: usize) {
        self.finals.insert(state);
    }

    /// Adds an arc from `state` to `next` on `symbol`, with the given
    /// positive and negative variable names.
    pub(crate) fn add_arc(&mut self, state: usize, next: usize, symbol: V, pos: &[&str], neg: &[&str]) {
        let pos: BTreeSet<String> = pos.iter().map(|s| s.to_string()).collect();
        let neg: BTreeSet<String> = neg.iter().map(|s| s.to_string()).collect();
        debug_assert!(pos.is_disjoint(&neg), "pos and neg must be disjoint");
        self.transitions[state].push(Arc {
            symbol: Sym::Symbol(symbol),
            pos,
            neg,
            nextstate: State::Scalar(next),
        });
    }

    pub(crate) fn alphabet(&self) -> &BTreeSet<V> {
        &self.alphabet
    }

    pub(crate) fn build(self) -> BaseDfa<V> {
        BaseDfa {
            start: self.start.expect("builder never had set_start called"),
            finals: self.finals,
            transitions: self.transitions,
        }
    }
}

/// An immutable, fully materialized base automaton.
#[derive(Debug, Clone)]
pub struct BaseDfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    start: usize,
    finals: BTreeSet<usize>,
    transitions: Vec<Vec<Arc<V>>>,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Dfa<V> for BaseDfa<V> {
    fn start(&self) -> State {
        State::Scalar(self.start)
    }

    fn is_final(&self, state: &State) -> bool {
        self.finals.contains(&state.as_scalar())
    }

    fn arcs_at(&self, state: &State) -> ArcIndex<V> {
        ArcIndex(self.transitions[state.as_scalar()].clone())
    }
}

/// The Sigma-universal automaton: one state, always final, self-loop on
/// every symbol, no variables mentioned.
pub(crate) fn universal_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    alphabet: &BTreeSet<V>,
) -> BaseDfa<V> {
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    b.set_start(s0);
    b.set_final(s0);
    for &s in alphabet {
        b.add_arc(s0, s0, s, &[], &[]);
    }
    b.build()
}

/// `Symbol(symbol, X)`: every position in `X` is labelled `symbol`.
pub(crate) fn symbol_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    symbol: V,
    variable: &Variable,
    alphabet: &BTreeSet<V>,
) -> Result<BaseDfa<V>, TranslationError<V>> {
    if !alphabet.contains(&symbol) {
        return Err(TranslationError::SymbolNotInAlphabet(symbol));
    }
    let x = variable.name();
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    let sink = b.add_state();
    b.set_start(s0);
    b.set_final(s0);
    for &s in b.alphabet().clone().iter() {
        b.add_arc(s0, s0, s, &[], &[x]);
        let nextstate = if s == symbol { s0 } else { sink };
        b.add_arc(s0, nextstate, s, &[x], &[]);
        b.add_arc(sink, sink, s, &[], &[]);
    }
    Ok(b.build())
}

/// `Equal(X, Y)`.
pub(crate) fn equal_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    left: &Variable,
    right: &Variable,
    alphabet: &BTreeSet<V>,
) -> BaseDfa<V> {
    let x = left.name();
    let y = right.name();
    if x == y {
        return universal_dfa(alphabet);
    }
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    let sink = b.add_state();
    b.set_start(s0);
    b.set_final(s0);
    for &s in b.alphabet().clone().iter() {
        b.add_arc(s0, s0, s, &[], &[x, y]);
        b.add_arc(s0, s0, s, &[x, y], &[]);
        b.add_arc(s0, sink, s, &[x], &[y]);
        b.add_arc(s0, sink, s, &[y], &[x]);
        b.add_arc(sink, sink, s, &[], &[]);
    }
    b.build()
}

/// `ContainedIn(X, Y)`.
pub(crate) fn contained_in_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    left: &Variable,
    right: &Variable,
    alphabet: &BTreeSet<V>,
) -> BaseDfa<V> {
    let x = left.name();
    let y = right.name();
    if x == y {
        return universal_dfa(alphabet);
    }
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    let sink = b.add_state();
    b.set_start(s0);
    b.set_final(s0);
    for &s in b.alphabet().clone().iter() {
        b.add_arc(s0, s0, s, &[], &[x]);
        b.add_arc(s0, s0, s, &[x, y], &[]);
        b.add_arc(s0, sink, s, &[x], &[y]);
        b.add_arc(sink, sink, s, &[], &[]);
    }
    b.build()
}

/// `Singleton(X)`: the collection denoted by `X` has exactly one element.
pub(crate) fn singleton_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    variable: &Variable,
    alphabet: &BTreeSet<V>,
) -> BaseDfa<V> {
    let x = variable.name();
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    let fin = b.add_state();
    let sink = b.add_state();
    b.set_start(s0);
    b.set_final(fin);
    for &s in b.alphabet().clone().iter() {
        b.add_arc(s0, s0, s, &[], &[x]);
        b.add_arc(s0, fin, s, &[x], &[]);
        b.add_arc(fin, fin, s, &[], &[x]);
        b.add_arc(fin, sink, s, &[x], &[]);
        b.add_arc(sink, sink, s, &[], &[]);
    }
    b.build()
}

/// `Less(X, Y)`: `X` precedes `Y`, lifted uniformly to sets.
pub(crate) fn less_dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    left: &Variable,
    right: &Variable,
    alphabet: &BTreeSet<V>,
) -> BaseDfa<V> {
    let x = left.name();
    let y = right.name();
    let mut b = Builder::new(alphabet.clone());
    let s0 = b.add_state();
    let fin = b.add_state();
    let sink = b.add_state();
    b.set_start(s0);
    b.set_final(s0);
    b.set_final(fin);
    for &s in b.alphabet().clone().iter() {
        b.add_arc(s0, sink, s, &[x, y], &[]);
        b.add_arc(s0, s0, s, &[], &[x, y]);
        b.add_arc(s0, s0, s, &[x], &[y]);
        b.add_arc(s0, fin, s, &[y], &[x]);
        b.add_arc(fin, fin, s, &[], &[x]);
        b.add_arc(fin, sink, s, &[x], &[]);
        b.add_arc(sink, sink, s, &[], &[]);
    }
    b.build()
}
