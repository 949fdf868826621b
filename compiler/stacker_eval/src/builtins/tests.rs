use super::*;
use crate::errors::stack_underflow;
use pretty_assertions::assert_eq;

fn stack_of(values: &[Value]) -> Stack {
    values.iter().cloned().collect()
}

fn run(op: Builtin, before: &[Value], arg: Value) -> (EvalResult, Stack) {
    let mut stack = stack_of(before);
    let result = op.apply(&mut stack, arg);
    (result, stack)
}

#[test]
fn test_names_are_unique() {
    let mut names: Vec<_> = Builtin::ALL.iter().map(|b| b.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Builtin::ALL.len());
}

#[test]
fn test_push_prepends() {
    let (result, stack) = run(Builtin::Push, &[Value::int(1)], Value::int(2));
    assert_eq!(result, Ok(()));
    assert_eq!(stack, stack_of(&[Value::int(2), Value::int(1)]));
}

#[test]
fn test_drop() {
    let (_, stack) = run(Builtin::Drop, &[Value::int(3)], Value::Void);
    assert!(stack.is_empty());

    let (result, stack) = run(Builtin::Drop, &[], Value::Void);
    assert_eq!(result, Err(stack_underflow("drop", 1, 0)));
    assert!(stack.is_empty());
}

#[test]
fn test_dup() {
    let (_, stack) = run(Builtin::Dup, &[Value::int(5), Value::int(1)], Value::Void);
    assert_eq!(stack, stack_of(&[Value::int(5), Value::int(5), Value::int(1)]));
}

#[test]
fn test_dup_on_empty_pushes_void() {
    let (result, stack) = run(Builtin::Dup, &[], Value::Void);
    assert_eq!(result, Ok(()));
    assert_eq!(stack, stack_of(&[Value::Void]));
}

#[test]
fn test_swap() {
    let (_, stack) = run(Builtin::Swap, &[Value::int(2), Value::int(1)], Value::Void);
    assert_eq!(stack, stack_of(&[Value::int(1), Value::int(2)]));
}

#[test]
fn test_swap_underflow_leaves_stack_untouched() {
    let (result, stack) = run(Builtin::Swap, &[Value::int(7)], Value::Void);
    assert_eq!(result, Err(stack_underflow("swap", 2, 1)));
    assert_eq!(stack, stack_of(&[Value::int(7)]));
}

#[test]
fn test_over_appends_to_tail() {
    let (_, stack) = run(Builtin::Over, &[Value::int(2), Value::int(3)], Value::Void);
    assert_eq!(stack, stack_of(&[Value::int(2), Value::int(3), Value::int(2)]));
}

#[test]
fn test_over_on_empty_appends_void() {
    let (_, stack) = run(Builtin::Over, &[], Value::Void);
    assert_eq!(stack, stack_of(&[Value::Void]));
}

#[test]
fn test_rot_moves_head_to_tail() {
    let before = [Value::int(3), Value::int(1), Value::int(2)];
    let (_, stack) = run(Builtin::Rot, &before, Value::Void);
    assert_eq!(stack, stack_of(&[Value::int(1), Value::int(2), Value::int(3)]));

    let (result, _) = run(Builtin::Rot, &[], Value::Void);
    assert_eq!(result, Err(stack_underflow("rot", 1, 0)));
}

#[test]
fn test_eq() {
    let (_, stack) = run(Builtin::Eq, &[Value::int(100)], Value::int(100));
    assert_eq!(stack, stack_of(&[Value::bool(true)]));

    let (_, stack) = run(Builtin::Eq, &[Value::int(100)], Value::int(99));
    assert_eq!(stack, stack_of(&[Value::bool(false)]));
}

#[test]
fn test_eq_across_kinds_is_false() {
    let (_, stack) = run(Builtin::Eq, &[Value::string("100")], Value::int(100));
    assert_eq!(stack, stack_of(&[Value::bool(false)]));

    let (_, stack) = run(Builtin::Eq, &[Value::int(0)], Value::bool(false));
    assert_eq!(stack, stack_of(&[Value::bool(false)]));
}

#[test]
fn test_or() {
    let f = Value::bool(false);
    let t = Value::bool(true);
    let (_, stack) = run(Builtin::Or, &[f.clone(), f.clone()], Value::Void);
    assert_eq!(stack, stack_of(&[f.clone()]));

    let (_, stack) = run(Builtin::Or, &[t.clone(), f.clone()], Value::Void);
    assert_eq!(stack, stack_of(&[t.clone()]));

    // Only exact Bool(false) counts as false.
    let (_, stack) = run(Builtin::Or, &[Value::int(0), f.clone()], Value::Void);
    assert_eq!(stack, stack_of(&[t]));

    let (result, stack) = run(Builtin::Or, &[f.clone()], Value::Void);
    assert_eq!(result, Err(stack_underflow("or", 2, 1)));
    assert_eq!(stack, stack_of(&[f]));
}

#[test]
fn test_not() {
    let (_, stack) = run(Builtin::Not, &[Value::bool(false)], Value::Void);
    assert_eq!(stack, stack_of(&[Value::bool(true)]));

    let (_, stack) = run(Builtin::Not, &[Value::bool(true)], Value::Void);
    assert_eq!(stack, stack_of(&[Value::bool(false)]));

    let (_, stack) = run(Builtin::Not, &[Value::Void], Value::Void);
    assert_eq!(stack, stack_of(&[Value::bool(false)]));

    let (result, _) = run(Builtin::Not, &[], Value::Void);
    assert_eq!(result, Err(stack_underflow("not", 1, 0)));
}

#[test]
fn test_arity() {
    assert_eq!(Builtin::Push.arity(), Arity::Value);
    assert_eq!(Builtin::Eq.arity(), Arity::Value);
    assert_eq!(Builtin::Swap.arity(), Arity::Void);
    assert_eq!(Builtin::Not.arity(), Arity::Void);
}
