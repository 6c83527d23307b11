//! Compiles Monadic Second-Order Logic over finite strings into
//! deterministic finite automata and decides membership against them.
//!
//! A formula (`Wff`) is built from quantifiers, connectives, and four atomic
//! predicates over first- and second-order variables (positions and sets of
//! positions). [`simplify`] rewrites an arbitrary formula into a restricted
//! normal form; [`translate`] compiles that normal form into a `Dfa` over a
//! given alphabet by structural recursion, combining small materialized base
//! automata with lazy composition views; [`accepts`] walks a word through
//! the result.

pub mod accept;
pub mod automaton;
pub mod simplify;
pub mod translate;
pub mod variable;
pub mod wff;

pub use accept::accepts;
pub use automaton::{Dfa, State};
pub use automaton::error::{MembershipError, TranslationError};
pub use simplify::simplify;
pub use translate::translate;
pub use variable::Variable;
pub use wff::Wff;

#[cfg(test)]
mod tests {
    use crate::{accepts, simplify, translate, Variable, Wff};
    use std::collections::BTreeSet;

    fn alphabet(symbols: &[char]) -> BTreeSet<char> {
        symbols.iter().copied().collect()
    }

    fn word(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn exists_equal_self_accepts_all_nonempty_words() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::exists(x.clone(), Wff::equal(x.clone(), x));
        let dfa = translate(&formula, &sigma).unwrap();
        assert!(!accepts(&*dfa, &word("")));
        assert!(accepts(&*dfa, &word("a")));
        assert!(accepts(&*dfa, &word("ab")));
        assert!(accepts(&*dfa, &word("bb")));
    }

    #[test]
    fn not_complements_acceptance() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let phi: Wff<char> = Wff::exists(x.clone(), Wff::symbol('a', x));
        let not_phi = Wff::not(phi.clone());
        let dfa_phi = translate(&phi, &sigma).unwrap();
        let dfa_not_phi = translate(&not_phi, &sigma).unwrap();
        for w in ["", "a", "b", "ab", "ba", "bb"] {
            assert_eq!(
                accepts(&*dfa_not_phi, &word(w)),
                !accepts(&*dfa_phi, &word(w)),
                "word {:?}",
                w
            );
        }
    }

    #[test]
    fn and_conjoins_acceptance() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let y = Variable::new("y", 1);
        let has_a: Wff<char> = Wff::exists(x, Wff::symbol('a', Variable::new("x", 1)));
        let has_b: Wff<char> = Wff::exists(y, Wff::symbol('b', Variable::new("y", 1)));
        let both = Wff::and(has_a.clone(), has_b.clone());
        let dfa_a = translate(&has_a, &sigma).unwrap();
        let dfa_b = translate(&has_b, &sigma).unwrap();
        let dfa_both = translate(&both, &sigma).unwrap();
        for w in ["", "a", "b", "ab", "aa", "bb"] {
            assert_eq!(
                accepts(&*dfa_both, &word(w)),
                accepts(&*dfa_a, &word(w)) && accepts(&*dfa_b, &word(w)),
                "word {:?}",
                w
            );
        }
    }

    #[test]
    fn simplify_is_idempotent_on_acceptance() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::forall(
            x.clone(),
            Wff::or(Wff::symbol('a', x.clone()), Wff::symbol('b', x)),
        );
        let once = simplify(formula.clone());
        let twice = simplify(once.clone());
        let dfa_once = translate(&once, &sigma).unwrap();
        let dfa_twice = translate(&twice, &sigma).unwrap();
        for w in ["", "a", "ab", "ba", "bb", "aab"] {
            assert_eq!(accepts(&*dfa_once, &word(w)), accepts(&*dfa_twice, &word(w)));
        }
    }

    #[test]
    fn forall_matches_not_exists_not() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let body = |v: Variable| -> Wff<char> { Wff::symbol('a', v) };
        let forall_form = Wff::forall(x.clone(), body(x.clone()));
        let rewritten = Wff::not(Wff::exists(x.clone(), Wff::not(body(x))));
        let dfa_forall = translate(&forall_form, &sigma).unwrap();
        let dfa_rewritten = translate(&rewritten, &sigma).unwrap();
        for w in ["", "a", "aa", "b", "ab", "ba"] {
            assert_eq!(accepts(&*dfa_forall, &word(w)), accepts(&*dfa_rewritten, &word(w)));
        }
    }

    #[test]
    fn construction_repr_matches_canonical_form() {
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::forall(x.clone(), Wff::symbol('a', x));
        assert_eq!(
            formula.construction_repr(),
            "Forall(Variable(\"x\", 1), Symbol('a', Variable(\"x\", 1)))"
        );
    }

    #[test]
    fn display_matches_pretty_print_grammar() {
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::forall(
            x.clone(),
            Wff::or(Wff::symbol('a', x.clone()), Wff::symbol('b', x)),
        );
        assert_eq!(formula.to_string(), "∀¹x [\"a\"(x) ∨ \"b\"(x)]");
    }

    #[test]
    fn display_of_simplified_form_matches_normal_form_grammar() {
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::forall(
            x.clone(),
            Wff::or(Wff::symbol('a', x.clone()), Wff::symbol('b', x)),
        );
        let simplified = simplify(formula);
        assert_eq!(
            simplified.to_string(),
            "¬∃²x [Singleton(x) ∧ [¬\"a\"(x) ∧ ¬\"b\"(x)]]"
        );
    }

    /// Scenario 1: there is an `a` at some position strictly before a `b`.
    #[test]
    fn scenario_a_before_b() {
        let sigma = alphabet(&['a', 'b', 'c']);
        let x = Variable::new("x", 1);
        let y = Variable::new("y", 1);
        let formula: Wff<char> = Wff::exists(
            x.clone(),
            Wff::and(
                Wff::symbol('a', x.clone()),
                Wff::exists(
                    y.clone(),
                    Wff::and(Wff::symbol('b', y.clone()), Wff::less(x, y)),
                ),
            ),
        );
        let dfa = translate(&formula, &sigma).unwrap();
        for w in ["ab", "abc", "acb", "cab"] {
            assert!(accepts(&*dfa, &word(w)), "expected accept: {:?}", w);
        }
        for w in ["", "a", "b", "ba", "bac", "cba"] {
            assert!(!accepts(&*dfa, &word(w)), "expected reject: {:?}", w);
        }
    }

    /// Scenario 5: every position is labelled `a`.
    #[test]
    fn scenario_all_a() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::forall(x.clone(), Wff::symbol('a', x));
        let dfa = translate(&formula, &sigma).unwrap();
        for w in ["", "a", "aa"] {
            assert!(accepts(&*dfa, &word(w)), "expected accept: {:?}", w);
        }
        for w in ["b", "ab", "ba"] {
            assert!(!accepts(&*dfa, &word(w)), "expected reject: {:?}", w);
        }
    }

    /// Scenario 6: some position is labelled `a`.
    #[test]
    fn scenario_some_a() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::exists(x.clone(), Wff::symbol('a', x));
        let dfa = translate(&formula, &sigma).unwrap();
        for w in ["a", "ab", "ba"] {
            assert!(accepts(&*dfa, &word(w)), "expected accept: {:?}", w);
        }
        for w in ["", "b", "bb"] {
            assert!(!accepts(&*dfa, &word(w)), "expected reject: {:?}", w);
        }
    }

    #[test]
    fn translate_rejects_symbol_outside_alphabet() {
        let sigma = alphabet(&['a', 'b']);
        let x = Variable::new("x", 1);
        let formula: Wff<char> = Wff::exists(x.clone(), Wff::symbol('z', x));
        let err = translate(&formula, &sigma).unwrap_err();
        assert_eq!(err, crate::TranslationError::SymbolNotInAlphabet('z'));
    }
}
