//! Operation environment.
//!
//! Maps operation names to operations. A fresh environment holds the
//! builtins; caller-supplied `Extensions` are merged on top and win over
//! a builtin of the same name.

use std::fmt;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use stacker_ir::Value;

use crate::builtins::Builtin;
use crate::errors::EvalResult;
use crate::Stack;

/// Argument contract of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// The argument is consumed.
    Value,
    /// The argument is ignored; strict interpreters require `void`.
    Void,
}

/// A caller-defined operation.
///
/// Closures of the shape `Fn(&mut Stack, Value) -> EvalResult` implement
/// this directly and take their argument; wrap one in `VoidArg` to declare
/// that it ignores it.
pub trait StackOperation {
    fn apply(&self, stack: &mut Stack, arg: Value) -> EvalResult;

    fn arity(&self) -> Arity {
        Arity::Value
    }
}

impl<F> StackOperation for F
where
    F: Fn(&mut Stack, Value) -> EvalResult,
{
    fn apply(&self, stack: &mut Stack, arg: Value) -> EvalResult {
        self(stack, arg)
    }
}

/// Marks a closure operation as ignoring its argument.
pub struct VoidArg<F>(pub F);

impl<F> StackOperation for VoidArg<F>
where
    F: Fn(&mut Stack, Value) -> EvalResult,
{
    fn apply(&self, stack: &mut Stack, arg: Value) -> EvalResult {
        (self.0)(stack, arg)
    }

    fn arity(&self) -> Arity {
        Arity::Void
    }
}

pub type SharedOperation = Arc<dyn StackOperation + Send + Sync>;

/// An entry in the environment.
#[derive(Clone)]
pub enum Operation {
    Builtin(Builtin),
    Extension(SharedOperation),
}

impl Operation {
    pub fn arity(&self) -> Arity {
        match self {
            Operation::Builtin(builtin) => builtin.arity(),
            Operation::Extension(op) => op.arity(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Operation::Builtin(_))
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Operation::Extension(op) => f
                .debug_tuple("Extension")
                .field(&op.arity())
                .finish(),
        }
    }
}

/// Caller-supplied operations, merged over the builtins.
#[derive(Clone, Default)]
pub struct Extensions {
    ops: FxHashMap<String, SharedOperation>,
}

impl Extensions {
    pub fn new() -> Self {
        Extensions::default()
    }

    /// Register `op` under `name`, replacing any earlier entry.
    pub fn insert<O>(&mut self, name: impl Into<String>, op: O)
    where
        O: StackOperation + Send + Sync + 'static,
    {
        self.ops.insert(name.into(), Arc::new(op));
    }

    #[must_use]
    pub fn with<O>(mut self, name: impl Into<String>, op: O) -> Self
    where
        O: StackOperation + Send + Sync + 'static,
    {
        self.insert(name, op);
        self
    }

    /// Copy every entry of `other` in, replacing same-named entries.
    pub fn merge(&mut self, other: &Extensions) {
        for (name, op) in &other.ops {
            self.ops.insert(name.clone(), Arc::clone(op));
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.keys().map(String::as_str)
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ops.keys()).finish()
    }
}

/// Name to operation registry consulted by the parser and the evaluator.
#[derive(Clone, Debug)]
pub struct Environment {
    ops: FxHashMap<String, Operation>,
}

impl Environment {
    /// The builtin set alone.
    pub fn base() -> Self {
        let ops = Builtin::ALL
            .iter()
            .map(|&builtin| (builtin.name().to_owned(), Operation::Builtin(builtin)))
            .collect();
        Environment { ops }
    }

    /// The builtin set with `extra` merged on top.
    pub fn with_extensions(extra: &Extensions) -> Self {
        let mut env = Environment::base();
        env.extend(extra);
        env
    }

    /// Merge `extra` into this environment; same-named entries are replaced.
    pub fn extend(&mut self, extra: &Extensions) {
        for (name, op) in &extra.ops {
            self.ops
                .insert(name.clone(), Operation::Extension(Arc::clone(op)));
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Registered operation names, as the parser's accepted-name set.
    pub fn names(&self) -> FxHashSet<&str> {
        self.ops.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::base()
    }
}
