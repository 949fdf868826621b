//! Property-based tests for stack operations.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use stacker_eval::{Interpreter, Value};

/// An argument token together with the value it atomizes to.
fn atom() -> impl Strategy<Value = (String, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (n.to_string(), Value::Int(n))),
        Just(("void".to_owned(), Value::Void)),
        any::<bool>().prop_map(|b| (b.to_string(), Value::Bool(b))),
        "[a-z_][a-z0-9_]{0,10}"
            .prop_filter("not a keyword", |s| !matches!(s.as_str(), "void" | "true" | "false"))
            .prop_map(|s| (s.clone(), Value::Str(s))),
    ]
}

/// Interpreter preloaded with the given atoms, last pushed at the head.
fn loaded(atoms: &[(String, Value)]) -> Interpreter {
    let mut interpreter = Interpreter::new();
    for (token, _) in atoms {
        interpreter.eval(&format!("push {token}")).unwrap();
    }
    interpreter
}

proptest! {
    #[test]
    fn push_then_head_is_identity(
        prefix in prop::collection::vec(atom(), 0..5),
        (token, value) in atom(),
    ) {
        let mut interpreter = loaded(&prefix);
        interpreter.eval(&format!("push {token}")).unwrap();
        prop_assert_eq!(interpreter.stack_head(), Some(&value));
        prop_assert_eq!(interpreter.stack().len(), prefix.len() + 1);
    }

    #[test]
    fn dup_drop_drop_removes_one(prefix in prop::collection::vec(atom(), 1..6)) {
        let mut interpreter = loaded(&prefix);
        let before = interpreter.stack().to_vec();
        interpreter.eval("dup void").unwrap();
        interpreter.eval("drop void").unwrap();
        prop_assert_eq!(interpreter.stack().to_vec(), before.clone());
        interpreter.eval("drop void").unwrap();
        prop_assert_eq!(interpreter.stack().to_vec(), before[1..].to_vec());
    }

    #[test]
    fn eq_is_reflexive((token, _) in atom()) {
        let mut interpreter = Interpreter::new();
        interpreter.eval(&format!("push {token}")).unwrap();
        interpreter.eval(&format!("eq {token}")).unwrap();
        prop_assert_eq!(interpreter.stack().to_vec(), vec![Value::Bool(true)]);
    }

    #[test]
    fn eq_never_matches_across_kinds((a, va) in atom(), (b, vb) in atom()) {
        prop_assume!(std::mem::discriminant(&va) != std::mem::discriminant(&vb));
        let mut interpreter = Interpreter::new();
        interpreter.eval(&format!("push {a}")).unwrap();
        interpreter.eval(&format!("eq {b}")).unwrap();
        prop_assert_eq!(interpreter.stack().to_vec(), vec![Value::Bool(false)]);
    }

    #[test]
    fn failed_operations_leave_stack_untouched(
        prefix in prop::collection::vec(atom(), 0..2),
        op in prop::sample::select(vec!["swap", "or"]),
    ) {
        let mut interpreter = loaded(&prefix);
        let before = interpreter.stack().to_vec();
        let result = interpreter.eval(&format!("{op} void"));
        if prefix.len() < 2 {
            prop_assert!(result.is_err());
            prop_assert_eq!(interpreter.stack().to_vec(), before);
        }
    }
}
