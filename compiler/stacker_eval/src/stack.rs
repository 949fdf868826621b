//! The value stack.
//!
//! A double-ended sequence of values. The head is the front; every
//! operation reads and writes there, except `over` and `rot`, which
//! append to the tail.

use std::collections::VecDeque;
use std::fmt;

use stacker_ir::Value;

use crate::errors::{stack_underflow, EvalResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    items: VecDeque<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look at the head without removing it.
    #[inline]
    pub fn head(&self) -> Option<&Value> {
        self.items.front()
    }

    /// Look at the element just below the head.
    #[inline]
    pub fn second(&self) -> Option<&Value> {
        self.items.get(1)
    }

    #[inline]
    pub fn push_head(&mut self, value: Value) {
        self.items.push_front(value);
    }

    #[inline]
    pub fn pop_head(&mut self) -> Option<Value> {
        self.items.pop_front()
    }

    #[inline]
    pub fn push_tail(&mut self, value: Value) {
        self.items.push_back(value);
    }

    #[inline]
    pub fn pop_tail(&mut self) -> Option<Value> {
        self.items.pop_back()
    }

    /// Fail with `StackUnderflow` unless at least `needed` elements are present.
    ///
    /// Operations call this before mutating, so a failure leaves the stack
    /// untouched.
    pub fn require(&self, op: &str, needed: usize) -> EvalResult {
        if self.items.len() < needed {
            return Err(stack_underflow(op, needed, self.items.len()));
        }
        Ok(())
    }

    /// Remove the head, or fail with `StackUnderflow` naming `op`.
    pub fn take_head(&mut self, op: &str) -> EvalResult<Value> {
        self.items
            .pop_front()
            .ok_or_else(|| stack_underflow(op, 1, 0))
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.items.iter()
    }

    /// Copy the values out, head first.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.iter().cloned().collect()
    }
}

/// Collects head first: the first item becomes the head.
impl FromIterator<Value> for Stack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Value;
    type IntoIter = std::collections::vec_deque::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
