//! Types module: defines the operator vocabulary of the query language.
//!
//! This module provides the Operator enum and its precedence table.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A boolean operator keyword.
///
/// Only `And` and `Or` evaluate; the others are part of the vocabulary so that
/// queries using them compile to a program the evaluator can reject explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    Nor,
    Xor,
    Nand,
    Not,
}

impl Operator {
    /// Every operator, in keyword-table order.
    pub const ALL: [Operator; 6] = [
        Operator::And,
        Operator::Or,
        Operator::Nor,
        Operator::Xor,
        Operator::Nand,
        Operator::Not,
    ];

    /// Binding strength. Higher binds tighter; all operators are left-associative.
    pub fn precedence(self) -> i8 {
        match self {
            Operator::Not => 4,
            Operator::And | Operator::Nand => 3,
            Operator::Or | Operator::Xor => 2,
            Operator::Nor => -1,
        }
    }

    /// The canonical (upper case) keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Nor => "NOR",
            Operator::Xor => "XOR",
            Operator::Nand => "NAND",
            Operator::Not => "NOT",
        }
    }

    /// Case-sensitive keyword lookup.
    pub fn from_keyword(s: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.keyword() == s)
    }

    /// Keyword lookup ignoring ASCII case.
    pub fn from_keyword_ignore_case(s: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.keyword().eq_ignore_ascii_case(s))
    }

    /// Whether the evaluator has semantics for this operator.
    pub fn is_evaluable(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Whether this operator is recognized with the given vocabulary.
    pub fn is_active(self, extended: bool) -> bool {
        extended || self.is_evaluable()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_precedence_table() {
        assert_eq!(Operator::Not.precedence(), 4);
        assert_eq!(Operator::And.precedence(), 3);
        assert_eq!(Operator::Nand.precedence(), 3);
        assert_eq!(Operator::Or.precedence(), 2);
        assert_eq!(Operator::Xor.precedence(), 2);
        assert_eq!(Operator::Nor.precedence(), -1);
        assert!(Operator::And.precedence() > Operator::Or.precedence());
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(Operator::from_keyword("AND"), Some(Operator::And));
        assert_eq!(Operator::from_keyword("OR"), Some(Operator::Or));
        assert_eq!(Operator::from_keyword("NAND"), Some(Operator::Nand));
        assert_eq!(Operator::from_keyword("and"), None);
        assert_eq!(Operator::from_keyword("ANDY"), None);
    }

    #[test]
    fn test_keyword_lookup_ignore_case() {
        assert_eq!(Operator::from_keyword_ignore_case("and"), Some(Operator::And));
        assert_eq!(Operator::from_keyword_ignore_case("Or"), Some(Operator::Or));
        assert_eq!(Operator::from_keyword_ignore_case("xOr"), Some(Operator::Xor));
        assert_eq!(Operator::from_keyword_ignore_case("orange"), None);
    }

    #[test]
    fn test_active_vocabulary() {
        assert!(Operator::And.is_active(false));
        assert!(Operator::Or.is_active(false));
        assert!(!Operator::Not.is_active(false));
        assert!(Operator::Not.is_active(true));
    }

    #[test]
    fn test_display_round_trips_keyword() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_keyword(&op.to_string()), Some(op));
        }
    }

    #[test]
    fn test_serialization_deserialization() {
        let json = serde_json::to_string(&Operator::Nand).unwrap();
        let deser: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, Operator::Nand);
    }
}
