//! The labelled transition model: the data type of an automaton arc and the
//! abstract `Dfa` capability every base and composed automaton implements.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// A symbol read off the alphabet, or the wildcard fallback ρ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sym<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    Symbol(V),
    /// Matches any alphabet symbol not otherwise handled at a state. Never
    /// emitted by the base constructors in `base.rs` — see the note on
    /// `Determinize` for why that is a restriction, not an oversight.
    Rho,
}

/// Macro-state identity, uniform across every automaton shape this crate
/// builds: a scalar for a base automaton, a pair for an intersection, a set
/// for a determinization. A single recursive type rather than one state
/// type per composition lets `Dfa<V>` be a plain, non-generic-over-state
/// trait usable as `Box<dyn Dfa<V>>` however deep the formula that drove the
/// composition is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    Scalar(usize),
    Pair(Box<State>, Box<State>),
    Set(BTreeSet<State>),
}

impl State {
    pub(crate) fn pair(l: State, r: State) -> State {
        State::Pair(Box::new(l), Box::new(r))
    }

    pub(crate) fn as_scalar(&self) -> usize {
        match self {
            State::Scalar(s) => *s,
            other => panic!("expected a scalar state, found {:?}", other),
        }
    }

    pub(crate) fn as_pair(&self) -> (&State, &State) {
        match self {
            State::Pair(l, r) => (l, r),
            other => panic!("expected a pair state, found {:?}", other),
        }
    }

    pub(crate) fn as_set(&self) -> &BTreeSet<State> {
        match self {
            State::Set(s) => s,
            other => panic!("expected a set state, found {:?}", other),
        }
    }
}

/// A labelled transition: `symbol` together with the positive and negative
/// variable sets that must (resp. must not) claim the current position for
/// the arc to be applicable, and the destination state.
///
/// `pos ∩ neg = ∅` is a hard invariant upheld by every constructor in this
/// crate (the base builder and every compose view).
#[derive(Debug, Clone)]
pub struct Arc<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    pub symbol: Sym<V>,
    pub pos: BTreeSet<String>,
    pub neg: BTreeSet<String>,
    pub nextstate: State,
}

/// A collection of arcs indexed by symbol, as spec'd: containment test,
/// iteration over the symbol keys actually present, exact-or-ρ-fallback
/// lookup by symbol.
#[derive(Debug, Clone)]
pub struct ArcIndex<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(pub Vec<Arc<V>>);

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> ArcIndex<V> {
    pub fn empty() -> ArcIndex<V> {
        ArcIndex(Vec::new())
    }

    /// Distinct concrete alphabet symbols with at least one arc keyed
    /// exactly under them (ρ is not among these — see `has_rho`).
    pub fn symbols(&self) -> BTreeSet<V> {
        self.0
            .iter()
            .filter_map(|a| match a.symbol {
                Sym::Symbol(s) => Some(s),
                Sym::Rho => None,
            })
            .collect()
    }

    pub fn has_rho(&self) -> bool {
        self.0.iter().any(|a| a.symbol == Sym::Rho)
    }

    pub fn contains(&self, symbol: V) -> bool {
        self.0.iter().any(|a| a.symbol == Sym::Symbol(symbol))
    }

    pub fn can_match(&self, symbol: V) -> bool {
        self.contains(symbol) || self.has_rho()
    }

    /// Arcs registered exactly under `symbol`, or, if none, arcs registered
    /// under ρ.
    pub fn for_symbol(&self, symbol: V) -> Vec<&Arc<V>> {
        let direct: Vec<&Arc<V>> = self
            .0
            .iter()
            .filter(|a| a.symbol == Sym::Symbol(symbol))
            .collect();
        if !direct.is_empty() {
            return direct;
        }
        self.0.iter().filter(|a| a.symbol == Sym::Rho).collect()
    }
}

/// The capability every automaton object in this crate provides: a start
/// state, a finality predicate, and arc lookup by state. All automaton
/// objects are logically immutable after construction; base automata are
/// fully materialized at build time, composed automata compute states and
/// arcs on demand from their operands but expose this same read-only
/// contract.
pub trait Dfa<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    fn start(&self) -> State;
    fn is_final(&self, state: &State) -> bool;
    fn arcs_at(&self, state: &State) -> ArcIndex<V>;
}
