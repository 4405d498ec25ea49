use crate::{
    ast::{BinaryOperator, Location},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates integer addition or subtraction.
///
/// Both operands must be integers. Overflow is reported rather than wrapped.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{BinaryOperator, Location, Position},
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let at = Location { symbol: '-', position: Position::new(1, 0) };
///
/// let diff = eval_scalar_op(BinaryOperator::Subtract, &2.into(), &5.into(), at).unwrap();
/// assert_eq!(diff.to_string(), "-3");
///
/// assert!(eval_scalar_op(BinaryOperator::Add, &i64::MAX.into(), &1.into(), at).is_err());
/// assert!(eval_scalar_op(BinaryOperator::Add, &Value::NIL, &1.into(), at).is_err());
/// ```
///
/// # Errors
/// - `TypeMismatch` if an operand is not an integer.
/// - `Overflow` if the result does not fit in 64 bits.
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      at: Location)
                      -> EvalResult<Value> {
    let left = left.as_integer(at)?;
    let right = right.as_integer(at)?;

    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        _ => return Err(RuntimeError::MalformedTree { at }),
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { at })
}
