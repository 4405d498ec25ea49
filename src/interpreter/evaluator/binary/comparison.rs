use crate::{
    ast::{BinaryOperator, Location},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `<`, `>` and `=`.
///
/// Ordering needs two integers. Equality accepts any two values and compares
/// them with [`Value::identical`]. The result is `1` or `0`.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{BinaryOperator, Location, Position},
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let at = Location { symbol: '=', position: Position::new(1, 0) };
/// let list = Value::cons(1.into(), Value::NIL);
///
/// let same = eval_comparison(BinaryOperator::Equal, &list, &list.clone(), at).unwrap();
/// assert_eq!(same.to_string(), "1");
///
/// let mixed = eval_comparison(BinaryOperator::Equal, &list, &1.into(), at).unwrap();
/// assert_eq!(mixed.to_string(), "0");
/// ```
///
/// # Errors
/// `TypeMismatch` if an ordering operand is not an integer.
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       at: Location)
                       -> EvalResult<Value> {
    match op {
        BinaryOperator::Equal => Ok(left.identical(right).into()),
        BinaryOperator::Less => Ok((left.as_integer(at)? < right.as_integer(at)?).into()),
        BinaryOperator::Greater => Ok((left.as_integer(at)? > right.as_integer(at)?).into()),
        _ => Err(RuntimeError::MalformedTree { at }),
    }
}
