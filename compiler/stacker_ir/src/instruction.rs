//! Parsed instruction forms.

use std::fmt;

use crate::Value;

/// A simple instruction: an operation name and its argument atom.
///
/// Every simple instruction carries exactly one argument, even when the
/// operation ignores it (callers conventionally write `void`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub op: String,
    pub arg: Value,
}

impl Instruction {
    pub fn new(op: impl Into<String>, arg: Value) -> Self {
        Instruction { op: op.into(), arg }
    }
}

/// Renders the instruction back to source text (`push 1`, `swap void`).
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Value::Str(s) => write!(f, "{} {s}", self.op),
            arg => write!(f, "{} {arg}", self.op),
        }
    }
}

/// A `{ ... }` block of `;`-separated statements.
///
/// Statements are kept as source text and parsed one at a time when the
/// block runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Procedure {
    source: String,
}

impl Procedure {
    /// Wrap block source. The text must start with `{` and end with `}`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        debug_assert!(source.starts_with('{') && source.ends_with('}'));
        Procedure { source }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Split the block interior on `;`, trimming each statement.
    ///
    /// Empty statements are kept (a trailing `;` yields one) and evaluate
    /// as no-ops.
    pub fn statements(&self) -> Vec<&str> {
        let inner = self
            .source
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or("");
        inner.split(';').map(str::trim).collect()
    }
}

/// Result of parsing one line of instruction text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedForm {
    /// Empty text; evaluates to nothing.
    Empty,
    Simple(Instruction),
    Procedure(Procedure),
}
