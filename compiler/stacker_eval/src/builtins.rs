//! The base operation set.
//!
//! Each builtin checks its stack precondition before touching the stack,
//! so a failing builtin never leaves a partial mutation behind.

use stacker_ir::Value;

use crate::environment::Arity;
use crate::errors::EvalResult;
use crate::Stack;

/// Base operations, always present in a fresh environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Push,
    Drop,
    Dup,
    Swap,
    Over,
    Rot,
    Eq,
    Or,
    Not,
}

impl Builtin {
    pub const ALL: [Builtin; 9] = [
        Builtin::Push,
        Builtin::Drop,
        Builtin::Dup,
        Builtin::Swap,
        Builtin::Over,
        Builtin::Rot,
        Builtin::Eq,
        Builtin::Or,
        Builtin::Not,
    ];

    /// Name used in instruction text.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Push => "push",
            Builtin::Drop => "drop",
            Builtin::Dup => "dup",
            Builtin::Swap => "swap",
            Builtin::Over => "over",
            Builtin::Rot => "rot",
            Builtin::Eq => "eq",
            Builtin::Or => "or",
            Builtin::Not => "not",
        }
    }

    /// Only `push` and `eq` read their argument.
    pub fn arity(self) -> Arity {
        match self {
            Builtin::Push | Builtin::Eq => Arity::Value,
            _ => Arity::Void,
        }
    }

    pub fn apply(self, stack: &mut Stack, arg: Value) -> EvalResult {
        let op = self.name();
        match self {
            Builtin::Push => stack.push_head(arg),
            Builtin::Drop => {
                stack.take_head(op)?;
            }
            // Inspecting an empty stack yields void rather than failing.
            Builtin::Dup => {
                let top = stack.head().cloned().unwrap_or(Value::Void);
                stack.push_head(top);
            }
            // Grows the tail, unlike every other operation.
            Builtin::Over => {
                let top = stack.head().cloned().unwrap_or(Value::Void);
                stack.push_tail(top);
            }
            Builtin::Swap => {
                stack.require(op, 2)?;
                let first = stack.take_head(op)?;
                let second = stack.take_head(op)?;
                stack.push_head(first);
                stack.push_head(second);
            }
            Builtin::Rot => {
                let top = stack.take_head(op)?;
                stack.push_tail(top);
            }
            Builtin::Eq => {
                let top = stack.take_head(op)?;
                stack.push_head(Value::Bool(top == arg));
            }
            Builtin::Or => {
                stack.require(op, 2)?;
                let a = stack.take_head(op)?;
                let b = stack.take_head(op)?;
                stack.push_head(Value::Bool(!(a.is_false() && b.is_false())));
            }
            Builtin::Not => {
                let top = stack.take_head(op)?;
                stack.push_head(Value::Bool(top.is_false()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
