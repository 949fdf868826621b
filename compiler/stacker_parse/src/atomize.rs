//! Literal grammar for argument tokens.

use stacker_ir::Value;

/// Convert one argument token into a `Value`.
///
/// First match wins: integer literal, `void`, `false`, `true`, and
/// otherwise the raw token as text. Atomizing never fails; integers that
/// overflow `i64` stay text.
pub fn atomize(token: &str) -> Value {
    if let Ok(n) = token.parse::<i64>() {
        return Value::Int(n);
    }
    match token {
        "void" => Value::Void,
        "false" => Value::Bool(false),
        "true" => Value::Bool(true),
        _ => Value::Str(token.to_owned()),
    }
}
