//! Evaluator module: runs a compiled program against a matcher.
//!
//! Instructions are processed in program order with a single operand stack of
//! result collections.

use std::collections::HashSet;
use std::hash::Hash;
use crate::ir::{Instruction, OperandStack, Program};
use crate::matcher::Matcher;
use crate::term::Term;
use crate::types::Operator;
use crate::WiresearchError;

/// A program bound for evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'p> {
    program: &'p Program,
}

impl<'p> Evaluator<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    /// Evaluates the program. An empty program yields an empty collection.
    pub fn run<T, M>(&self, matcher: &M) -> Result<Vec<T>, WiresearchError>
    where
        T: Clone + Eq + Hash,
        M: Matcher<T> + ?Sized,
    {
        if self.program.is_empty() {
            return Ok(Vec::new());
        }
        let mut stack: OperandStack<T> = Vec::new();
        for (position, instruction) in self.program.iter().enumerate() {
            match instruction {
                Instruction::Match(text) => {
                    let term = Term::decode(text);
                    stack.push(matcher.matches(term.keyword, term.exact, term.include));
                }
                Instruction::Operator(op) => {
                    let combine: fn(&[T], &[T]) -> Vec<T> = match op {
                        Operator::And => intersect,
                        Operator::Or => union,
                        other => return Err(WiresearchError::UnsupportedOperator(*other)),
                    };
                    let (r2, r1) = match (stack.pop(), stack.pop()) {
                        (Some(r2), Some(r1)) => (r2, r1),
                        _ => {
                            return Err(WiresearchError::MalformedQuery(format!(
                                "operator {} at position {} is missing an operand",
                                op, position
                            )))
                        }
                    };
                    stack.push(combine(&r1, &r2));
                }
                Instruction::OpenGroup => {
                    return Err(WiresearchError::MalformedQuery(
                        "unclosed parenthesis".to_string(),
                    ))
                }
            }
        }
        match stack.len() {
            1 => Ok(stack.pop().unwrap_or_default()),
            n => Err(WiresearchError::MalformedQuery(format!(
                "expected one result after evaluation, found {}",
                n
            ))),
        }
    }
}

/// Evaluates `program` with `matcher`.
pub fn evaluate<T, M>(program: &Program, matcher: &M) -> Result<Vec<T>, WiresearchError>
where
    T: Clone + Eq + Hash,
    M: Matcher<T> + ?Sized,
{
    Evaluator::new(program).run(matcher)
}

/// Elements of `r1` also present in `r2`, in `r1` order, without duplicates.
pub fn intersect<T: Clone + Eq + Hash>(r1: &[T], r2: &[T]) -> Vec<T> {
    let other: HashSet<&T> = r2.iter().collect();
    let mut seen = HashSet::new();
    r1.iter()
        .filter(|x| other.contains(x) && seen.insert(*x))
        .cloned()
        .collect()
}

/// Elements of `r1` in order, then the new elements of `r2`, without duplicates.
pub fn union<T: Clone + Eq + Hash>(r1: &[T], r2: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    r1.iter()
        .chain(r2.iter())
        .filter(|x| seen.insert(*x))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::normalize::normalize;
    use std::cell::RefCell;

    fn table(keyword: &str, _exact: bool, _include: bool) -> Vec<&'static str> {
        match keyword {
            "a" => vec!["a"],
            "b" => vec!["b", "d"],
            "c" => vec!["d"],
            _ => vec![],
        }
    }

    fn run(query: &str) -> Result<Vec<&'static str>, WiresearchError> {
        evaluate(&compile(&normalize(query)), &table)
    }

    #[test]
    fn test_intersect_keeps_first_order() {
        assert_eq!(intersect(&[3, 1, 2, 1], &[1, 2, 3]), vec![3, 1, 2]);
        assert_eq!(intersect(&[1, 2], &[3]), Vec::<i32>::new());
    }

    #[test]
    fn test_union_keeps_first_order() {
        assert_eq!(union(&["x"], &["y", "x"]), vec!["x", "y"]);
        assert_eq!(union(&[1, 1, 2], &[2, 3, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(run("a OR b AND c").unwrap(), vec!["a", "d"]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(run("(a OR b) AND c").unwrap(), vec!["d"]);
    }

    #[test]
    fn test_empty_program_is_empty_result() {
        assert_eq!(run("").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_flags_are_passed_to_matcher() {
        let calls = RefCell::new(Vec::new());
        let matcher = |keyword: &str, exact: bool, include: bool| {
            calls.borrow_mut().push((keyword.to_string(), exact, include));
            Vec::<u8>::new()
        };
        evaluate(&compile(&normalize("-fish \"cat\" -\"new york\"")), &matcher).unwrap();
        assert_eq!(
            calls.into_inner(),
            vec![
                ("fish".to_string(), false, false),
                ("cat".to_string(), true, true),
                ("new york".to_string(), true, false),
            ]
        );
    }

    #[test]
    fn test_underflow_is_malformed() {
        let err = run("AND").unwrap_err();
        assert!(matches!(err, WiresearchError::MalformedQuery(_)));
        let err = run("a OR").unwrap_err();
        assert!(matches!(err, WiresearchError::MalformedQuery(_)));
    }

    #[test]
    fn test_leftover_operands_are_malformed() {
        let prog = Program::from(vec![
            Instruction::Match("a".to_string()),
            Instruction::Match("b".to_string()),
        ]);
        assert!(matches!(evaluate(&prog, &table), Err(WiresearchError::MalformedQuery(_))));
    }

    #[test]
    fn test_unclosed_group_is_malformed() {
        assert!(matches!(run("(a OR b"), Err(WiresearchError::MalformedQuery(_))));
    }

    #[test]
    fn test_unsupported_operators_are_rejected() {
        for op in [Operator::Not, Operator::Xor, Operator::Nand, Operator::Nor] {
            let prog = Program::from(vec![
                Instruction::Match("a".to_string()),
                Instruction::Match("b".to_string()),
                Instruction::Operator(op),
            ]);
            match evaluate(&prog, &table) {
                Err(WiresearchError::UnsupportedOperator(got)) => assert_eq!(got, op),
                other => panic!("expected unsupported operator, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unsupported_operator_wins_over_underflow() {
        let prog = Program::from(vec![Instruction::Operator(Operator::Not)]);
        assert!(matches!(
            evaluate(&prog, &table),
            Err(WiresearchError::UnsupportedOperator(Operator::Not))
        ));
    }
}
