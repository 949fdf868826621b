//! The evaluator.
//!
//! An `Interpreter` owns one stack for its whole lifetime. Each `eval`
//! call parses one line against a freshly merged environment and runs the
//! resulting instructions against that stack, in order.

mod builder;

pub use builder::InterpreterBuilder;

use stacker_ir::{Instruction, ParsedForm, Value};
use stacker_parse::{parse, parse_statement, ParseError};

use crate::environment::{Arity, Environment, Extensions, Operation};
use crate::errors::{at_line, invalid_argument, EvalResult};
use crate::Stack;

/// Single-stack interpreter.
///
/// Not meant to be shared between threads; use one interpreter per thread.
#[derive(Debug, Default)]
pub struct Interpreter {
    stack: Stack,
    extensions: Extensions,
    strict_arity: bool,
}

impl Interpreter {
    /// Interpreter with an empty stack and only the builtins.
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Current stack, head first.
    #[inline]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[inline]
    pub fn stack_head(&self) -> Option<&Value> {
        self.stack.head()
    }

    pub fn strict_arity(&self) -> bool {
        self.strict_arity
    }

    /// A fresh view of the builtins merged with this interpreter's extensions.
    pub fn environment(&self) -> Environment {
        Environment::with_extensions(&self.extensions)
    }

    /// Evaluate one line of instruction text.
    ///
    /// A block runs its statements in order; statements before a failing
    /// one stay applied.
    #[tracing::instrument(level = "debug", skip_all, fields(text = %text))]
    pub fn eval(&mut self, text: &str) -> EvalResult<&Stack> {
        let env = self.environment();
        self.eval_in(&env, text)?;
        Ok(&self.stack)
    }

    /// Evaluate with `extra` merged over this interpreter's environment,
    /// for this call only.
    #[tracing::instrument(level = "debug", skip_all, fields(text = %text))]
    pub fn eval_with(&mut self, text: &str, extra: &Extensions) -> EvalResult<&Stack> {
        let mut env = self.environment();
        env.extend(extra);
        self.eval_in(&env, text)?;
        Ok(&self.stack)
    }

    /// Evaluate each line of `source` in order, stopping at the first error.
    ///
    /// The error carries the 1-based number of the failing line.
    pub fn eval_lines(&mut self, source: &str) -> EvalResult<&Stack> {
        let env = self.environment();
        for (idx, line) in source.lines().enumerate() {
            self.eval_in(&env, line)
                .map_err(|err| at_line(idx + 1, err))?;
        }
        Ok(&self.stack)
    }

    fn eval_in(&mut self, env: &Environment, text: &str) -> EvalResult {
        let names = env.names();
        match parse(text, &names)? {
            ParsedForm::Empty => Ok(()),
            ParsedForm::Simple(instruction) => self.invoke(env, instruction),
            ParsedForm::Procedure(block) => {
                for statement in block.statements() {
                    if let Some(instruction) = parse_statement(statement, &names)? {
                        self.invoke(env, instruction)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Check the arity contract, then run the operation.
    ///
    /// Extensions run against the live stack; if one fails, the stack is
    /// restored to its state before the call.
    fn invoke(&mut self, env: &Environment, instruction: Instruction) -> EvalResult {
        let Instruction { op, arg } = instruction;
        let Some(operation) = env.get(&op) else {
            return Err(ParseError::invalid_syntax(format!("{op} {arg}")).into());
        };
        if self.strict_arity && operation.arity() == Arity::Void && !arg.is_void() {
            return Err(invalid_argument(&op, arg));
        }
        tracing::debug!(%op, %arg, depth = self.stack.len(), "apply");
        match operation {
            Operation::Builtin(builtin) => builtin.apply(&mut self.stack, arg),
            Operation::Extension(ext) => {
                let snapshot = self.stack.clone();
                let result = ext.apply(&mut self.stack, arg);
                if result.is_err() {
                    self.stack = snapshot;
                }
                result
            }
        }
    }
}
