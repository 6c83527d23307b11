use crate::variable::Variable;
use std::fmt;

/// A well-formed formula of Monadic Second-Order Logic over finite strings.
///
/// Immutable once built. Generic over `V`, the alphabet symbol type, because
/// `Symbol` embeds a literal alphabet element — the same way the teacher's
/// automaton types (`Automaton<V>`, `DFA<V>`, `NFA<V>`) are generic over
/// their alphabet.
#[derive(Debug, Clone)]
pub enum Wff<V: Eq + Clone + fmt::Debug> {
    Exists(Variable, Box<Wff<V>>),
    Forall(Variable, Box<Wff<V>>),
    Not(Box<Wff<V>>),
    And(Box<Wff<V>>, Box<Wff<V>>),
    Or(Box<Wff<V>>, Box<Wff<V>>),
    If(Box<Wff<V>>, Box<Wff<V>>),
    ContainedIn(Variable, Variable),
    Equal(Variable, Variable),
    Less(Variable, Variable),
    Singleton(Variable),
    Symbol(V, Variable),
}

impl<V: Eq + Clone + fmt::Debug> Wff<V> {
    pub fn exists(v: Variable, body: Wff<V>) -> Wff<V> {
        Wff::Exists(v, Box::new(body))
    }

    pub fn forall(v: Variable, body: Wff<V>) -> Wff<V> {
        Wff::Forall(v, Box::new(body))
    }

    pub fn not(body: Wff<V>) -> Wff<V> {
        Wff::Not(Box::new(body))
    }

    pub fn and(left: Wff<V>, right: Wff<V>) -> Wff<V> {
        Wff::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Wff<V>, right: Wff<V>) -> Wff<V> {
        Wff::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Wff<V>, right: Wff<V>) -> Wff<V> {
        Wff::If(Box::new(left), Box::new(right))
    }

    /// `right.order` must be 2: `ContainedIn` denotes membership or
    /// subset-hood in a set, never in a position.
    pub fn contained_in(left: Variable, right: Variable) -> Wff<V> {
        assert_eq!(right.order, 2, "ContainedIn's right operand must be order 2");
        Wff::ContainedIn(left, right)
    }

    pub fn equal(left: Variable, right: Variable) -> Wff<V> {
        Wff::Equal(left, right)
    }

    pub fn less(left: Variable, right: Variable) -> Wff<V> {
        Wff::Less(left, right)
    }

    pub fn singleton(v: Variable) -> Wff<V> {
        Wff::Singleton(v)
    }

    pub fn symbol(sym: V, v: Variable) -> Wff<V> {
        Wff::Symbol(sym, v)
    }

    /// Canonical constructor-call form, used only by tests (pretty-printing
    /// beyond what is needed for testing is out of scope).
    pub fn construction_repr(&self) -> String
    where
        V: fmt::Debug,
    {
        match self {
            Wff::Exists(v, body) => format!(
                "Exists(Variable({:?}, {}), {})",
                v.name, v.order, body.construction_repr()
            ),
            Wff::Forall(v, body) => format!(
                "Forall(Variable({:?}, {}), {})",
                v.name, v.order, body.construction_repr()
            ),
            Wff::Not(body) => format!("Not({})", body.construction_repr()),
            Wff::And(l, r) => format!(
                "And({}, {})",
                l.construction_repr(),
                r.construction_repr()
            ),
            Wff::Or(l, r) => format!("Or({}, {})", l.construction_repr(), r.construction_repr()),
            Wff::If(l, r) => format!("If({}, {})", l.construction_repr(), r.construction_repr()),
            Wff::ContainedIn(l, r) => format!(
                "ContainedIn(Variable({:?}, {}), Variable({:?}, {}))",
                l.name, l.order, r.name, r.order
            ),
            Wff::Equal(l, r) => format!(
                "Equal(Variable({:?}, {}), Variable({:?}, {}))",
                l.name, l.order, r.name, r.order
            ),
            Wff::Less(l, r) => format!(
                "Less(Variable({:?}, {}), Variable({:?}, {}))",
                l.name, l.order, r.name, r.order
            ),
            Wff::Singleton(v) => format!("Singleton(Variable({:?}, {}))", v.name, v.order),
            Wff::Symbol(sym, v) => {
                format!("Symbol({:?}, Variable({:?}, {}))", sym, v.name, v.order)
            }
        }
    }
}

impl<V: Eq + Clone + fmt::Debug + fmt::Display> fmt::Display for Wff<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Wff::Exists(v, body) => write!(f, "∃{}{} {}", v.order_pretty(), v, body),
            Wff::Forall(v, body) => write!(f, "∀{}{} {}", v.order_pretty(), v, body),
            Wff::Not(body) => write!(f, "¬{}", body),
            Wff::And(l, r) => write!(f, "[{} ∧ {}]", l, r),
            Wff::Or(l, r) => write!(f, "[{} ∨ {}]", l, r),
            Wff::If(l, r) => write!(f, "[{} → {}]", l, r),
            Wff::ContainedIn(l, r) => {
                if l.order == 1 {
                    write!(f, "[{} ∈ {}]", l, r)
                } else {
                    write!(f, "[{} ⊆ {}]", l, r)
                }
            }
            Wff::Equal(l, r) => write!(f, "[{} == {}]", l, r),
            Wff::Less(l, r) => write!(f, "[{} < {}]", l, r),
            Wff::Singleton(v) => write!(f, "Singleton({})", v),
            Wff::Symbol(sym, v) => write!(f, "\"{}\"({})", sym, v),
        }
    }
}
