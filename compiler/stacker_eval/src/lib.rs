//! Stacker Eval - the stack evaluator.
//!
//! # Architecture
//!
//! - `Stack`: the double-ended value stack, head at the front
//! - `Builtin`: the base operation set (`push`, `drop`, `dup`, `swap`,
//!   `over`, `rot`, `eq`, `or`, `not`)
//! - `Environment`: name to operation registry, builtins plus `Extensions`
//! - `Interpreter`: parses each line and runs it against its stack
//!
//! ```ignore
//! let mut interpreter = Interpreter::new();
//! interpreter.eval("push 1")?;
//! interpreter.eval("{ push 2; swap void }")?;
//! assert_eq!(interpreter.stack().to_string(), "[1, 2]");
//! ```

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod stack;

pub use builtins::Builtin;
pub use environment::{
    Arity, Environment, Extensions, Operation, SharedOperation, StackOperation, VoidArg,
};
pub use errors::{ErrorKind, EvalError, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use stack::Stack;

// Re-export the value model so callers need only this crate
pub use stacker_ir::Value;
pub use stacker_parse::ParseError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=stacker_eval=debug` or `RUST_LOG=stacker_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
