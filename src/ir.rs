//! Intermediate Representation (IR) for the query engine.
//!
//! This module defines the postfix instructions produced by the compiler and
//! consumed by the evaluator.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::term::Term;
use crate::types::Operator;

/// A single instruction in a compiled query program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Match a term. The text keeps its quote and negation markers.
    Match(String),
    /// Combine the two topmost results.
    Operator(Operator),
    /// Group marker left behind by an unclosed `(`.
    OpenGroup,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Match(text) => f.write_str(text),
            Instruction::Operator(op) => write!(f, "{}", op),
            Instruction::OpenGroup => f.write_str("("),
        }
    }
}

/// A compiled query: instructions in postfix order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The decoded match terms, in program order.
    pub fn terms(&self) -> Vec<Term<'_>> {
        self.instructions
            .iter()
            .filter_map(|i| match i {
                Instruction::Match(text) => Some(Term::decode(text)),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

/// The operand stack used during evaluation.
pub type OperandStack<T> = Vec<Vec<T>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    fn program() -> Program {
        Program::from(vec![
            Instruction::Match("a".to_string()),
            Instruction::Match("\"b\"".to_string()),
            Instruction::Operator(Operator::And),
            Instruction::Match("-c".to_string()),
            Instruction::Operator(Operator::Or),
        ])
    }

    #[test]
    fn test_display_is_postfix() {
        assert_eq!(program().to_string(), "a \"b\" AND -c OR");
        assert_eq!(Program::new().to_string(), "");
    }

    #[test]
    fn test_terms_in_program_order() {
        let prog = program();
        let terms = prog.terms();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].keyword, "a");
        assert!(terms[1].exact);
        assert_eq!(terms[1].keyword, "b");
        assert!(!terms[2].include);
        assert_eq!(terms[2].keyword, "c");
    }

    #[test]
    fn test_len_and_iter() {
        let prog = program();
        assert_eq!(prog.len(), 5);
        assert!(!prog.is_empty());
        let ops = prog.iter().filter(|i| matches!(i, Instruction::Operator(_))).count();
        assert_eq!(ops, 2);
    }

    #[test]
    fn test_serialization_deserialization() {
        let prog = program();
        let json = serde_json::to_string(&prog).unwrap();
        let deser: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(prog, deser);
    }
}
