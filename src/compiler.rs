//! Compiler module: compiles a normalized query into a postfix program.
//!
//! This is a shunting-yard pass over the characters of the query. Terms go
//! straight to the output queue; operators wait on an operator stack until an
//! operator of lower precedence, a closing parenthesis or the end of input
//! releases them.

use crate::config::QueryConfig;
use crate::ir::{Instruction, Program};
use crate::types::Operator;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Group,
    Op(Operator),
}

impl Pending {
    fn into_instruction(self) -> Instruction {
        match self {
            Pending::Group => Instruction::OpenGroup,
            Pending::Op(op) => Instruction::Operator(op),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Compiler {
    protect_phrases: bool,
    extended_operators: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(&QueryConfig::default())
    }
}

impl Compiler {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            protect_phrases: config.protect_phrases,
            extended_operators: config.extended_operators,
        }
    }

    /// Compiles a normalized query. Never fails: unbalanced parentheses and
    /// missing operands produce a program the evaluator rejects.
    pub fn compile(&self, normalized: &str) -> Program {
        let mut state = CompileState::new(self.extended_operators);
        let mut in_quote = false;
        for ch in normalized.chars() {
            if in_quote {
                state.buffer.push(ch);
                if ch == '"' {
                    in_quote = false;
                }
                continue;
            }
            match ch {
                '(' => {
                    state.flush();
                    state.operators.push(Pending::Group);
                }
                ')' => {
                    state.flush();
                    state.close_group();
                }
                ' ' => state.flush(),
                '"' if self.protect_phrases => {
                    in_quote = true;
                    state.buffer.push(ch);
                }
                _ => state.buffer.push(ch),
            }
        }
        state.finish()
    }
}

struct CompileState {
    output: Program,
    operators: Vec<Pending>,
    buffer: String,
    extended_operators: bool,
}

impl CompileState {
    fn new(extended_operators: bool) -> Self {
        Self {
            output: Program::new(),
            operators: Vec::new(),
            buffer: String::new(),
            extended_operators,
        }
    }

    /// Emits the buffered token as a term, or routes it through precedence
    /// insertion when it spells an operator keyword.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.buffer);
        match Operator::from_keyword(&token) {
            Some(op) if op.is_active(self.extended_operators) => self.push_operator(op),
            _ => self.output.push(Instruction::Match(token)),
        }
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&Pending::Op(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.output.push(Instruction::Operator(top));
        }
        self.operators.push(Pending::Op(op));
    }

    /// Pops down to the nearest group marker. A stray `)` drains the stack.
    fn close_group(&mut self) {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Group => return,
                Pending::Op(op) => self.output.push(Instruction::Operator(op)),
            }
        }
    }

    fn finish(mut self) -> Program {
        self.flush();
        while let Some(pending) = self.operators.pop() {
            self.output.push(pending.into_instruction());
        }
        self.output
    }
}

/// Compiles with the default configuration.
pub fn compile(normalized: &str) -> Program {
    Compiler::default().compile(normalized)
}
