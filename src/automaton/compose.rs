//! Lazy composition views over an operand `Dfa<V>` (or two). None of these
//! materialize a transition table up front; `start`/`is_final`/`arcs_at` are
//! computed on demand from the operand(s), the way the base builder's
//! product is computed on demand rather than up front in the source this
//! crate's composition semantics are grounded on (`dfa.py`'s `intersect`,
//! `project`, `determinize`, `complement`).

use crate::automaton::core::{Arc, ArcIndex, Dfa, State, Sym};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Boolean complement: final states become non-final and vice versa. Arcs
/// are passed through unchanged, since complementation is purely a
/// finality flip over a deterministic, totally-defined automaton.
pub(crate) struct Complement<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    operand: Box<dyn Dfa<V>>,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Complement<V> {
    pub(crate) fn new(operand: Box<dyn Dfa<V>>) -> Complement<V> {
        Complement { operand }
    }
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Dfa<V> for Complement<V> {
    fn start(&self) -> State {
        self.operand.start()
    }

    fn is_final(&self, state: &State) -> bool {
        !self.operand.is_final(state)
    }

    fn arcs_at(&self, state: &State) -> ArcIndex<V> {
        self.operand.arcs_at(state)
    }
}

/// Combines two arcs from the respective operands of an `Intersection` into
/// zero or one combined arc: symbols must agree (exactly, or one/both may be
/// ρ, in which case the more specific symbol wins), and the pos/neg variable
/// sets are unioned — unless a variable is claimed positively by one side
/// and negatively by the other, in which case the combination is
/// contradictory and no arc results.
fn intersect_arc<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    left: &Arc<V>,
    right: &Arc<V>,
) -> Option<Arc<V>> {
    let symbol = match (left.symbol, right.symbol) {
        (Sym::Symbol(a), Sym::Symbol(b)) if a == b => Sym::Symbol(a),
        (Sym::Symbol(a), Sym::Symbol(b)) if a != b => return None,
        (Sym::Symbol(a), Sym::Rho) => Sym::Symbol(a),
        (Sym::Rho, Sym::Symbol(b)) => Sym::Symbol(b),
        (Sym::Rho, Sym::Rho) => Sym::Rho,
        _ => unreachable!(),
    };
    let pos: BTreeSet<String> = left.pos.union(&right.pos).cloned().collect();
    let neg: BTreeSet<String> = left.neg.union(&right.neg).cloned().collect();
    if !pos.is_disjoint(&neg) {
        return None;
    }
    Some(Arc {
        symbol,
        pos,
        neg,
        nextstate: State::pair(left.nextstate.clone(), right.nextstate.clone()),
    })
}

/// Conjunction: the Cartesian product of two operands, with states paired
/// and arcs combined pairwise via `intersect_arc`.
pub(crate) struct Intersection<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    left: Box<dyn Dfa<V>>,
    right: Box<dyn Dfa<V>>,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Intersection<V> {
    pub(crate) fn new(left: Box<dyn Dfa<V>>, right: Box<dyn Dfa<V>>) -> Intersection<V> {
        Intersection { left, right }
    }
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Dfa<V> for Intersection<V> {
    fn start(&self) -> State {
        State::pair(self.left.start(), self.right.start())
    }

    fn is_final(&self, state: &State) -> bool {
        let (l, r) = state.as_pair();
        self.left.is_final(l) && self.right.is_final(r)
    }

    fn arcs_at(&self, state: &State) -> ArcIndex<V> {
        let (l, r) = state.as_pair();
        let left_arcs = self.left.arcs_at(l);
        let right_arcs = self.right.arcs_at(r);
        let mut combined = Vec::new();
        for la in &left_arcs.0 {
            for ra in &right_arcs.0 {
                if let Some(arc) = intersect_arc(la, ra) {
                    combined.push(arc);
                }
            }
        }
        ArcIndex(combined)
    }
}

/// Existential projection: hides `variable` from the operand's arcs by
/// dropping it from every `pos`/`neg` set. This is the automaton-level
/// counterpart of `Exists` — the resulting automaton is generally
/// nondeterministic (two arcs on the same symbol can become indistinguishable
/// once the bound variable's claim is erased), which is exactly why
/// `Determinize` exists as a separate view rather than being folded in here.
pub(crate) struct Projection<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    operand: Box<dyn Dfa<V>>,
    variable: String,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Projection<V> {
    pub(crate) fn new(operand: Box<dyn Dfa<V>>, variable: String) -> Projection<V> {
        Projection { operand, variable }
    }
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Dfa<V> for Projection<V> {
    fn start(&self) -> State {
        self.operand.start()
    }

    fn is_final(&self, state: &State) -> bool {
        self.operand.is_final(state)
    }

    fn arcs_at(&self, state: &State) -> ArcIndex<V> {
        let arcs = self.operand.arcs_at(state);
        let projected = arcs
            .0
            .iter()
            .map(|a| {
                let mut pos = a.pos.clone();
                let mut neg = a.neg.clone();
                pos.remove(&self.variable);
                neg.remove(&self.variable);
                Arc {
                    symbol: a.symbol,
                    pos,
                    neg,
                    nextstate: a.nextstate.clone(),
                }
            })
            .collect();
        ArcIndex(projected)
    }
}

/// Powerset determinization of a (possibly nondeterministic) operand. A
/// macro-state is a `BTreeSet` of operand states — reachable states are
/// discovered lazily, one `arcs_at` call at a time, rather than precomputed
/// in one pass: the operand's own state space may itself be infinite in
/// shape (nested compositions), so eager powerset construction isn't an
/// option here the way it is for a fixed NFA.
///
/// For a fixed macro-state and a fixed symbol, every `(P, N)` partition of
/// the variables mentioned by the applicable operand arcs is enumerated —
/// `2^|V|` of them — and each gets the union of the nextstates of every arc
/// whose `pos ⊆ P` and `neg ⊆ N`; see `enumerate_partitions`. This is
/// exponential in the number of variables touched at a state, not just in
/// the number of operand arcs.
pub(crate) struct Determinize<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> {
    operand: Box<dyn Dfa<V>>,
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Determinize<V> {
    pub(crate) fn new(operand: Box<dyn Dfa<V>>) -> Determinize<V> {
        Determinize { operand }
    }

    fn member_states<'a>(&self, state: &'a State) -> Vec<&'a State> {
        state.as_set().iter().collect()
    }
}

impl<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord> Dfa<V> for Determinize<V> {
    fn start(&self) -> State {
        let mut set = BTreeSet::new();
        set.insert(self.operand.start());
        State::Set(set)
    }

    fn is_final(&self, state: &State) -> bool {
        self.member_states(state)
            .iter()
            .any(|s| self.operand.is_final(s))
    }

    fn arcs_at(&self, state: &State) -> ArcIndex<V> {
        let members = self.member_states(state);
        let per_member: Vec<ArcIndex<V>> = members.iter().map(|m| self.operand.arcs_at(m)).collect();
        let all_arcs: Vec<&Arc<V>> = per_member.iter().flat_map(|idx| idx.0.iter()).collect();

        let mut symbols: BTreeSet<Sym<V>> = all_arcs.iter().map(|a| a.symbol).collect();
        let has_rho = symbols.contains(&Sym::Rho);
        if has_rho {
            symbols.remove(&Sym::Rho);
        }

        let mut result = Vec::new();
        let mut emit_for = |candidates: &[&Arc<V>], symbol: Sym<V>, result: &mut Vec<Arc<V>>| {
            for (pos, neg, nextstates) in enumerate_partitions(candidates) {
                result.push(Arc {
                    symbol,
                    pos,
                    neg,
                    nextstate: State::Set(nextstates),
                });
            }
        };

        for symbol in &symbols {
            let candidates: Vec<&Arc<V>> = all_arcs
                .iter()
                .filter(|a| a.symbol == *symbol || a.symbol == Sym::Rho)
                .cloned()
                .collect();
            emit_for(&candidates, *symbol, &mut result);
        }
        if has_rho {
            let candidates: Vec<&Arc<V>> =
                all_arcs.iter().filter(|a| a.symbol == Sym::Rho).cloned().collect();
            emit_for(&candidates, Sym::Rho, &mut result);
        }

        ArcIndex(result)
    }
}

/// Enumerates every `(P, N)` partition of the variables mentioned across
/// `candidates` — `V` split into a positive half `P` and a negative half
/// `N = V \ P`, `2^|V|` partitions in all — and, for each, unions the
/// nextstates of every candidate arc whose `pos ⊆ P` and `neg ⊆ N`. A
/// partition with no qualifying arc is omitted (no transition, not a
/// transition to nowhere). An arc with partial support — mentioning only
/// some of `V` — qualifies for every partition consistent with the
/// variables it does mention, so it is folded into more than one cell; this
/// is why partitions can't be read off the arcs' exact `(pos, neg)` keys.
fn enumerate_partitions<V: Eq + Hash + Copy + Clone + fmt::Debug + Ord>(
    candidates: &[&Arc<V>],
) -> Vec<(BTreeSet<String>, BTreeSet<String>, BTreeSet<State>)> {
    let mut variables: BTreeSet<String> = BTreeSet::new();
    for arc in candidates {
        variables.extend(arc.pos.iter().cloned());
        variables.extend(arc.neg.iter().cloned());
    }
    let variables: Vec<String> = variables.into_iter().collect();

    let mut result = Vec::new();
    for mask in 0..(1usize << variables.len()) {
        let mut pos = BTreeSet::new();
        let mut neg = BTreeSet::new();
        for (i, v) in variables.iter().enumerate() {
            if mask & (1 << i) != 0 {
                pos.insert(v.clone());
            } else {
                neg.insert(v.clone());
            }
        }
        let mut nextstates = BTreeSet::new();
        for arc in candidates {
            if arc.pos.is_subset(&pos) && arc.neg.is_subset(&neg) {
                nextstates.insert(arc.nextstate.clone());
            }
        }
        if !nextstates.is_empty() {
            result.push((pos, neg, nextstates));
        }
    }
    result
}
