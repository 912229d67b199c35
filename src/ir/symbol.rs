//! The formula alphabet: structural symbols plus variables

use std::fmt;

/// Number of original variables an assignment bitmask can hold
pub const MAX_VARIABLES: usize = 64;

/// First identifier handed out to synthetic variables
pub const FIRST_SYNTHETIC: u32 = MAX_VARIABLES as u32;

/// Numeric code of `x0`; structural symbols use the codes below it
const FIRST_VARIABLE_CODE: u32 = 6;

/// Variable identifier.
///
/// Ids below [`FIRST_SYNTHETIC`] are original (user-visible) variables,
/// `x0` being id 0. Everything above is allocated by the substitution law
/// and only has meaning inside one proof attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u32);

impl VarId {
    pub fn is_synthetic(self) -> bool {
        self.0 >= FIRST_SYNTHETIC
    }

    /// Bit of the assignment mask holding this variable's value
    pub fn bit(self) -> Option<u32> {
        (!self.is_synthetic()).then_some(self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            write!(f, "s{}", self.0 - FIRST_SYNTHETIC)
        } else {
            write!(f, "x{}", self.0)
        }
    }
}

/// A single formula symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
    /// End-of-formula marker
    #[default]
    Stop,
    Not,
    Or,
    And,
    False,
    True,
    Var(VarId),
}

impl Symbol {
    /// Original variable `x{index}`
    pub fn var(index: u32) -> Self {
        Symbol::Var(VarId(index))
    }

    pub fn constant(value: bool) -> Self {
        if value {
            Symbol::True
        } else {
            Symbol::False
        }
    }

    /// A single Boolean sub-expression: a literal or any variable
    pub fn is_boolean(self) -> bool {
        matches!(self, Symbol::False | Symbol::True | Symbol::Var(_))
    }

    pub fn is_truth_value(self) -> bool {
        matches!(self, Symbol::False | Symbol::True)
    }

    /// Or / And
    pub fn is_binary(self) -> bool {
        matches!(self, Symbol::Or | Symbol::And)
    }

    pub fn as_var(self) -> Option<VarId> {
        match self {
            Symbol::Var(id) => Some(id),
            _ => None,
        }
    }

    pub fn truth_value(self) -> Option<bool> {
        match self {
            Symbol::False => Some(false),
            Symbol::True => Some(true),
            _ => None,
        }
    }

    /// Operands consumed when reading prefix order; `None` for the marker
    pub fn arity(self) -> Option<usize> {
        match self {
            Symbol::Stop => None,
            Symbol::Not => Some(1),
            Symbol::Or | Symbol::And => Some(2),
            _ => Some(0),
        }
    }

    /// Swaps Or and And, leaves everything else alone
    pub fn dual(self) -> Self {
        match self {
            Symbol::Or => Symbol::And,
            Symbol::And => Symbol::Or,
            other => other,
        }
    }

    /// Compact numeric code: 0 end, 1 not, 2 or, 3 and, 4 false, 5 true, 6+ variables
    pub fn code(self) -> u32 {
        match self {
            Symbol::Stop => 0,
            Symbol::Not => 1,
            Symbol::Or => 2,
            Symbol::And => 3,
            Symbol::False => 4,
            Symbol::True => 5,
            Symbol::Var(VarId(id)) => FIRST_VARIABLE_CODE + id,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Symbol::Stop,
            1 => Symbol::Not,
            2 => Symbol::Or,
            3 => Symbol::And,
            4 => Symbol::False,
            5 => Symbol::True,
            _ => Symbol::var(code - FIRST_VARIABLE_CODE),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Stop => write!(f, "STOP"),
            Symbol::Not => write!(f, "-"),
            Symbol::Or => write!(f, "+"),
            Symbol::And => write!(f, "*"),
            Symbol::False => write!(f, "F"),
            Symbol::True => write!(f, "T"),
            Symbol::Var(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_classification() {
        assert!(Symbol::True.is_boolean());
        assert!(Symbol::False.is_boolean());
        assert!(Symbol::var(3).is_boolean());
        assert!(Symbol::Var(VarId(FIRST_SYNTHETIC + 2)).is_boolean());
        assert!(!Symbol::Not.is_boolean());
        assert!(!Symbol::Or.is_boolean());
        assert!(!Symbol::Stop.is_boolean());
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..20 {
            assert_eq!(Symbol::from_code(code).code(), code);
        }
        assert_eq!(Symbol::var(0).code(), 6);
        assert_eq!(Symbol::from_code(7), Symbol::var(1));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Symbol::Not.arity(), Some(1));
        assert_eq!(Symbol::And.arity(), Some(2));
        assert_eq!(Symbol::var(0).arity(), Some(0));
        assert_eq!(Symbol::Stop.arity(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::var(2).to_string(), "x2");
        assert_eq!(Symbol::Var(VarId(FIRST_SYNTHETIC)).to_string(), "s0");
        assert_eq!(Symbol::Or.to_string(), "+");
        assert_eq!(Symbol::Stop.to_string(), "STOP");
    }

    #[test]
    fn test_dual() {
        assert_eq!(Symbol::Or.dual(), Symbol::And);
        assert_eq!(Symbol::And.dual(), Symbol::Or);
        assert_eq!(Symbol::Not.dual(), Symbol::Not);
    }

    #[test]
    fn test_synthetic_has_no_bit() {
        assert_eq!(VarId(5).bit(), Some(5));
        assert_eq!(VarId(FIRST_SYNTHETIC).bit(), None);
    }
}
