use std::fmt;

/// Reserved for a recoverable construction precondition. Nothing in this
/// crate currently constructs one: the two invariants spec'd at
/// construction time (`Variable` order, `ContainedIn`'s right-operand
/// order) are caller contracts enforced with `assert!`, matching the
/// original implementation's `assert` statements, not data learned from
/// untrusted input. Kept named so a future constructor fed from outside
/// this crate's trust boundary has somewhere to report into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    InvalidVariableOrder(u8),
    ContainedInRightOperandNotSecondOrder,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstructionError::InvalidVariableOrder(order) => {
                write!(f, "variable order must be 1 or 2, got {}", order)
            }
            ConstructionError::ContainedInRightOperandNotSecondOrder => {
                write!(f, "ContainedIn's right operand must be order 2")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Raised by `translate` when a `Symbol(sigma, _)` predicate's `sigma` is
/// not a member of the alphabet passed to `translate`. Unlike the
/// `ConstructionError` preconditions, this can't be checked when the
/// formula is built — the alphabet isn't known until translation — so it
/// is a recoverable `Result`, not a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError<V: fmt::Debug> {
    SymbolNotInAlphabet(V),
}

impl<V: fmt::Debug> fmt::Display for TranslationError<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranslationError::SymbolNotInAlphabet(sym) => {
                write!(f, "symbol {:?} is not a member of the alphabet", sym)
            }
        }
    }
}

impl<V: fmt::Debug> std::error::Error for TranslationError<V> {}

/// Internal invariant violation during membership testing: more than one
/// applicable successor arc at a single step. Indicates a bug in automaton
/// construction, never a user error — `accepts` panics with this rather
/// than returning it (see `crate::accept`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    Nondeterministic,
}

impl fmt::Display for MembershipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MembershipError::Nondeterministic => {
                write!(f, "more than one applicable successor arc at a single step")
            }
        }
    }
}

impl std::error::Error for MembershipError {}
