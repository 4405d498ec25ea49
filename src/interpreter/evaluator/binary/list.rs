use crate::interpreter::value::core::Value;

/// Pairs two values into a new cell. The tail may be any value, so `:`
/// also builds improper lists.
#[must_use]
pub fn eval_cons(head: &Value, tail: &Value) -> Value {
    Value::cons(head.clone(), tail.clone())
}
