//! Stacker IR - values and parsed instruction forms.
//!
//! This crate contains the data shared by the parser and the evaluator:
//! - `Value`: the four runtime values a stack slot can hold
//! - `Instruction`: an operation name paired with its argument atom
//! - `Procedure`: a `{ ... }` block of `;`-separated statements
//! - `ParsedForm`: what the parser hands to the evaluator
//!
//! Nothing here knows about the stack or the operation environment.

mod instruction;
mod value;

pub use instruction::{Instruction, ParsedForm, Procedure};
pub use value::Value;
