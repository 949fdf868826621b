//! Evaluation errors.
//!
//! Constructors live here so call sites read `stack_underflow(op, 2, 1)`
//! rather than spelling out struct variants.

use stacker_ir::Value;
use stacker_parse::ParseError;

/// Result of evaluation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Error surfaced by `Interpreter::eval`.
///
/// Nothing is recovered inside the interpreter; every failure propagates
/// to the caller as soon as it happens.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Text does not fit the grammar or names an unknown operation.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// Argument violates the operation's arity contract.
    #[error("{op} takes no arguments but void, got {got}")]
    Argument { op: String, got: Value },
    /// Operation needs more elements than the stack holds.
    #[error("stack underflow: {op} needs {needed} element(s), found {found}")]
    StackUnderflow {
        op: String,
        needed: usize,
        found: usize,
    },
    /// Operand of the wrong kind. No base operation raises this.
    #[error("type mismatch in {op}: expected {expected}, got {got}")]
    Type {
        op: String,
        expected: String,
        got: String,
    },
    /// Error from one line of multi-line source.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        source: Box<EvalError>,
    },
}

/// Error category, for matching without destructuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    Argument,
    StackUnderflow,
    Type,
}

impl EvalError {
    /// Category of this error; a `Line` error reports its source's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Syntax(_) => ErrorKind::Syntax,
            EvalError::Argument { .. } => ErrorKind::Argument,
            EvalError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            EvalError::Type { .. } => ErrorKind::Type,
            EvalError::Line { source, .. } => source.kind(),
        }
    }
}

/// Argument given to an operation that only accepts `void`.
#[cold]
pub fn invalid_argument(op: &str, got: Value) -> EvalError {
    EvalError::Argument {
        op: op.to_owned(),
        got,
    }
}

/// Operation found fewer elements than it needs.
#[cold]
pub fn stack_underflow(op: &str, needed: usize, found: usize) -> EvalError {
    EvalError::StackUnderflow {
        op: op.to_owned(),
        needed,
        found,
    }
}

/// Operand has the wrong kind.
#[cold]
pub fn type_mismatch(op: &str, expected: &str, got: &Value) -> EvalError {
    EvalError::Type {
        op: op.to_owned(),
        expected: expected.to_owned(),
        got: got.type_name().to_owned(),
    }
}

/// Attach a 1-based line number to an error.
#[cold]
pub fn at_line(line: usize, error: EvalError) -> EvalError {
    EvalError::Line {
        line,
        source: Box::new(error),
    }
}
