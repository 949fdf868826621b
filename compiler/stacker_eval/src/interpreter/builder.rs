//! `InterpreterBuilder` for creating Interpreter instances with extension
//! operations and arity checking.

use stacker_ir::Value;

use super::Interpreter;
use crate::environment::{Extensions, StackOperation, VoidArg};
use crate::errors::EvalResult;
use crate::Stack;

/// Builder for creating Interpreter instances with various configurations.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    extensions: Extensions,
    strict_arity: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Register an extension operation; it replaces a builtin of the same name.
    #[must_use]
    pub fn operation<O>(mut self, name: impl Into<String>, op: O) -> Self
    where
        O: StackOperation + Send + Sync + 'static,
    {
        self.extensions.insert(name, op);
        self
    }

    /// Register an extension operation that ignores its argument.
    #[must_use]
    pub fn void_operation<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Stack, Value) -> EvalResult + Send + Sync + 'static,
    {
        self.operation(name, VoidArg(f))
    }

    /// Register a whole set of extension operations.
    #[must_use]
    pub fn extensions(mut self, extra: &Extensions) -> Self {
        self.extensions.merge(extra);
        self
    }

    /// Reject non-`void` arguments to operations that ignore them.
    ///
    /// Off by default: `swap 0` behaves like `swap void`.
    #[must_use]
    pub fn strict_arity(mut self, strict: bool) -> Self {
        self.strict_arity = strict;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            stack: Stack::new(),
            extensions: self.extensions,
            strict_arity: self.strict_arity,
        }
    }
}
