use std::{io::BufRead, rc::Rc};

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Location, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, children},
        value::{core::Value, frame::Frame},
    },
};

impl<R: BufRead> Context<R> {
    /// Evaluates an `OpExp` node.
    ///
    /// Both operands are evaluated, left first, then the operator is applied.
    pub(crate) fn eval_binary_op(&mut self,
                                 node: &Rc<Node>,
                                 frame: &Rc<Frame>)
                                 -> EvalResult<Value> {
        let op = BinaryOperator::from_symbol(node.symbol)
            .ok_or(RuntimeError::MalformedTree { at: node.location() })?;

        let (left, right) = children(node)?;
        let left = self.eval(left, frame)?;
        let right = self.eval(right, frame)?;

        trace!(?op, %left, %right, "binary operation");
        eval_binary(op, &left, &right, node.location())
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic and ordering go to [`eval_scalar_op`](super::scalar::eval_scalar_op)
/// and [`eval_comparison`](super::comparison::eval_comparison), pairing to
/// [`eval_cons`](super::list::eval_cons).
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `at`: The operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the result.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{BinaryOperator, Location, Position},
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let at = Location { symbol: '+', position: Position::new(1, 0) };
///
/// let sum = eval_binary(BinaryOperator::Add, &3.into(), &4.into(), at).unwrap();
/// assert_eq!(sum.to_string(), "7");
///
/// let less = eval_binary(BinaryOperator::Less, &3.into(), &4.into(), at).unwrap();
/// assert_eq!(less.to_string(), "1");
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   at: Location)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Cons, Equal, Greater, Less, Subtract};

    match op {
        Add | Subtract => super::scalar::eval_scalar_op(op, left, right, at),
        Equal | Less | Greater => super::comparison::eval_comparison(op, left, right, at),
        Cons => Ok(super::list::eval_cons(left, right)),
    }
}
