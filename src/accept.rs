//! Membership testing: walks a word through a `Dfa<V>` one symbol at a time.

use crate::automaton::core::{Dfa, State};
use crate::automaton::error::MembershipError;

/// Whether `dfa` accepts `word`. `dfa` must be deterministic — at most one
/// applicable arc at every state for every symbol actually read. Panics if
/// that's violated rather than returning a `Result`: a nondeterministic
/// automaton reaching this point is a bug in how it was built (translation
/// always produces deterministic automata via `Determinize`), never a
/// condition a caller of `accepts` can usefully recover from.
pub fn accepts<V: Eq + Copy + Clone + std::fmt::Debug + std::hash::Hash + Ord>(
    dfa: &dyn Dfa<V>,
    word: &[V],
) -> bool {
    let mut state = dfa.start();
    for &symbol in word {
        let arcs = dfa.arcs_at(&state);
        let applicable: Vec<_> = arcs
            .for_symbol(symbol)
            .into_iter()
            .filter(|a| a.pos.is_empty())
            .collect();
        match applicable.len() {
            0 => return false,
            1 => state = applicable[0].nextstate.clone(),
            _ => panic!("{}", MembershipError::Nondeterministic),
        }
    }
    dfa.is_final(&state)
}
