//! End-to-end scenarios: build a formula, translate it over a concrete
//! alphabet, and check accept/reject sets against the resulting automaton.

use m2lstr::{accepts, translate, Variable, Wff};
use std::collections::BTreeSet;

fn alphabet(symbols: &[char]) -> BTreeSet<char> {
    symbols.iter().copied().collect()
}

fn word(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn assert_accepts(dfa: &dyn m2lstr::Dfa<char>, accept: &[&str], reject: &[&str]) {
    for w in accept {
        assert!(accepts(dfa, &word(w)), "expected accept: {:?}", w);
    }
    for w in reject {
        assert!(!accepts(dfa, &word(w)), "expected reject: {:?}", w);
    }
}

/// First symbol is `a`: `exists x. a(x) and forall y. not(y < x)`.
#[test]
fn first_symbol_is_a() {
    let sigma = alphabet(&['a', 'b', 'c']);
    let x = Variable::new("x", 1);
    let y = Variable::new("y", 1);
    let formula: Wff<char> = Wff::exists(
        x.clone(),
        Wff::and(
            Wff::symbol('a', x.clone()),
            Wff::forall(y.clone(), Wff::not(Wff::less(y, x))),
        ),
    );
    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(&*dfa, &["a", "aa", "ab", "ac"], &["", "b", "ba", "cb"]);
}

/// Last symbol is `a`: `exists x. a(x) and forall y. not(x < y)`.
#[test]
fn last_symbol_is_a() {
    let sigma = alphabet(&['a', 'b', 'c']);
    let x = Variable::new("x", 1);
    let y = Variable::new("y", 1);
    let formula: Wff<char> = Wff::exists(
        x.clone(),
        Wff::and(
            Wff::symbol('a', x.clone()),
            Wff::forall(y.clone(), Wff::not(Wff::less(x, y))),
        ),
    );
    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(&*dfa, &["a", "ba", "ca"], &["", "ab", "cc"]);
}

/// `v` is the first position of the word: no position precedes it.
fn is_first(v: Variable, fresh: &str) -> Wff<char> {
    let w = Variable::new(fresh, 1);
    Wff::forall(w.clone(), Wff::not(Wff::less(w, v)))
}

/// `v` is the last position of the word: no position follows it.
fn is_last(v: Variable, fresh: &str) -> Wff<char> {
    let w = Variable::new(fresh, 1);
    Wff::forall(w.clone(), Wff::not(Wff::less(v, w)))
}

/// `left` immediately precedes `right`: nothing lies strictly between them.
fn immediately_precedes(left: Variable, right: Variable, fresh: &str) -> Wff<char> {
    let w = Variable::new(fresh, 1);
    Wff::and(
        Wff::less(left.clone(), right.clone()),
        Wff::not(Wff::exists(
            w.clone(),
            Wff::and(Wff::less(left, w.clone()), Wff::less(w, right)),
        )),
    )
}

/// The second symbol and the second-to-last symbol are both `b`.
#[test]
fn second_and_second_to_last_are_b() {
    let sigma = alphabet(&['a', 'b']);
    let first = Variable::new("first", 1);
    let second = Variable::new("second", 1);
    let last = Variable::new("last", 1);
    let second_last = Variable::new("second_last", 1);

    let formula: Wff<char> = Wff::exists(
        first.clone(),
        Wff::exists(
            second.clone(),
            Wff::exists(
                last.clone(),
                Wff::exists(
                    second_last.clone(),
                    Wff::and(
                        is_first(first.clone(), "w1"),
                        Wff::and(
                            immediately_precedes(first, second.clone(), "w2"),
                            Wff::and(
                                is_last(last.clone(), "w3"),
                                Wff::and(
                                    immediately_precedes(second_last.clone(), last, "w4"),
                                    Wff::and(
                                        Wff::symbol('b', second),
                                        Wff::symbol('b', second_last),
                                    ),
                                ),
                            ),
                        ),
                    ),
                ),
            ),
        ),
    );

    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(
        &*dfa,
        &["bb", "aba", "abb", "bba", "abba", "abaaaba"],
        &["", "a", "ab", "ba", "aab", "baa", "bab"],
    );
}

/// Every position is labelled `a`.
#[test]
fn every_position_is_a() {
    let sigma = alphabet(&['a', 'b']);
    let x = Variable::new("x", 1);
    let formula: Wff<char> = Wff::forall(x.clone(), Wff::symbol('a', x));
    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(&*dfa, &["", "a", "aa"], &["b", "ab", "ba"]);
}

/// Some position is labelled `a`.
#[test]
fn some_position_is_a() {
    let sigma = alphabet(&['a', 'b']);
    let x = Variable::new("x", 1);
    let formula: Wff<char> = Wff::exists(x.clone(), Wff::symbol('a', x));
    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(&*dfa, &["a", "ab", "ba"], &["", "b", "bb"]);
}

/// `exists Y. exists x. x in Y and a(x)`: `Y` is always satisfiable by
/// choosing the singleton `{x}`, so this is equivalent to "some position is
/// labelled `a`". Exercises `ContainedIn` through a determinized
/// intersection whose operand arcs have partial variable support (some arcs
/// constrain only `x`, others only `Y`), which is exactly where folding
/// nextstates by exact `(pos, neg)` key instead of by partition
/// containment would go wrong.
#[test]
fn contained_in_witnessed_by_singleton() {
    let sigma = alphabet(&['a', 'b']);
    let x = Variable::new("x", 1);
    let set = Variable::new("Y", 2);
    let formula: Wff<char> = Wff::exists(
        set.clone(),
        Wff::exists(
            x.clone(),
            Wff::and(Wff::contained_in(x.clone(), set), Wff::symbol('a', x)),
        ),
    );
    let dfa = translate(&formula, &sigma).unwrap();
    assert_accepts(&*dfa, &["a", "ab", "ba", "baa"], &["", "b", "bb"]);
}
