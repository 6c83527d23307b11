use std::fmt;

/// A first-order or second-order variable.
///
/// Order 1 denotes a position within a word; order 2 denotes a set of
/// positions. Two variables with the same name and order are
/// interchangeable — variable identity is by name, not by object identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    pub(crate) name: String,
    pub(crate) order: u8,
}

impl Variable {
    /// Builds a variable. Panics if `order` is not 1 or 2: this is a
    /// caller precondition, not a recoverable runtime condition.
    pub fn new(name: impl Into<String>, order: u8) -> Variable {
        assert!(order == 1 || order == 2, "variable order must be 1 or 2");
        Variable {
            name: name.into(),
            order,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> u8 {
        self.order
    }

    pub fn order_pretty(&self) -> &'static str {
        match self.order {
            1 => "¹",
            2 => "²",
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
