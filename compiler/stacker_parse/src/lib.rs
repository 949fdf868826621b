//! Instruction parser for Stacker.
//!
//! Turns one line of instruction text into a `ParsedForm`:
//! - `""` is the empty form
//! - `{ a; b; c }` is a procedure block
//! - `<op> <arg>` is a simple instruction, where `<op>` must be a name
//!   registered in the live environment
//!
//! Operation names are checked here, so an unknown name is a syntax
//! error rather than a dispatch failure.

mod atomize;
mod error;

pub use atomize::atomize;
pub use error::ParseError;

use rustc_hash::FxHashSet;
use stacker_ir::{Instruction, ParsedForm, Procedure};

/// Parse one instruction line against the given operation names.
pub fn parse(text: &str, names: &FxHashSet<&str>) -> Result<ParsedForm, ParseError> {
    if is_block(text) {
        tracing::trace!(text, "parsed procedure");
        return Ok(ParsedForm::Procedure(Procedure::new(text)));
    }
    Ok(parse_statement(text, names)?.map_or(ParsedForm::Empty, ParsedForm::Simple))
}

/// Parse one statement of a procedure block.
///
/// Returns `None` for the empty statement. Blocks are rejected here:
/// procedures do not nest.
pub fn parse_statement(
    text: &str,
    names: &FxHashSet<&str>,
) -> Result<Option<Instruction>, ParseError> {
    if text.is_empty() {
        return Ok(None);
    }
    let instruction = parse_simple(text, names)?;
    tracing::trace!(op = %instruction.op, arg = %instruction.arg, "parsed instruction");
    Ok(Some(instruction))
}

fn is_block(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('{') && text.ends_with('}')
}

/// Match `<op> <arg>`: exactly one space, a known operation name, and an
/// argument token.
fn parse_simple(text: &str, names: &FxHashSet<&str>) -> Result<Instruction, ParseError> {
    let Some((op, arg)) = text.split_once(' ') else {
        return Err(ParseError::invalid_syntax(text));
    };
    if !names.contains(op) || !is_arg_token(arg) {
        return Err(ParseError::invalid_syntax(text));
    }
    Ok(Instruction::new(op, atomize(arg)))
}

/// Word characters (`[A-Za-z0-9_]+`), or `-` followed by digits.
fn is_arg_token(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => {
            !token.is_empty()
                && token
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
    }
}
