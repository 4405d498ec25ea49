use std::io::BufRead;

use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, input::TokenReader},
        value::core::Value,
    },
};

/// Returns the head of a non-empty list.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{Location, Position},
///     interpreter::{evaluator::function::builtin::first, value::core::Value},
/// };
///
/// let at = Location { symbol: 'x', position: Position::new(1, 0) };
/// let list = Value::from_items([7.into(), 8.into()]);
///
/// assert_eq!(first(&list, at).unwrap().to_string(), "7");
/// assert!(first(&Value::NIL, at).is_err());
/// ```
///
/// # Errors
/// - `EmptyListAccess` for the empty list.
/// - `TypeMismatch` if `list` is not a list.
pub fn first(list: &Value, at: Location) -> EvalResult<Value> {
    Ok(list.as_cons(at)?.head.clone())
}

/// Returns the tail of a non-empty list.
///
/// # Errors
/// - `EmptyListAccess` for the empty list.
/// - `TypeMismatch` if `list` is not a list.
pub fn rest(list: &Value, at: Location) -> EvalResult<Value> {
    Ok(list.as_cons(at)?.tail.clone())
}

/// Reads the next input token as a signed decimal integer.
///
/// # Errors
/// - `InputExhausted` if no token is left.
/// - `InvalidInteger` if the token is not an integer in range.
/// - `Input` if reading fails.
pub fn read_int<R: BufRead>(input: &mut TokenReader<R>, at: Location) -> EvalResult<Value> {
    let token = input.next_token()
                     .map_err(|source| RuntimeError::Input { source, at })?
                     .ok_or(RuntimeError::InputExhausted { at })?;

    token.parse::<i64>()
         .map(Value::Integer)
         .map_err(|_| RuntimeError::InvalidInteger { token, at })
}

/// Reads the next input token as a list of character codes.
///
/// Once the input is exhausted this returns the empty list. Bytes that are
/// not valid UTF-8 are not an error; each invalid sequence becomes U+FFFD,
/// code 65533.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{Location, Position},
///     interpreter::evaluator::{function::builtin::read_token, input::TokenReader},
/// };
///
/// let at = Location { symbol: '~', position: Position::new(1, 0) };
/// let mut input = TokenReader::new("ab".as_bytes());
///
/// assert_eq!(read_token(&mut input, at).unwrap().to_string(), "[97, 98]");
/// assert_eq!(read_token(&mut input, at).unwrap().to_string(), "[]");
///
/// let mut input = TokenReader::new(&b"a\xff"[..]);
/// assert_eq!(read_token(&mut input, at).unwrap().to_string(), "[97, 65533]");
/// ```
///
/// # Errors
/// `Input` if reading fails.
pub fn read_token<R: BufRead>(input: &mut TokenReader<R>, at: Location) -> EvalResult<Value> {
    let token = input.next_token()
                     .map_err(|source| RuntimeError::Input { source, at })?;

    Ok(token.map_or(Value::NIL, |token| Value::from_text(&token)))
}
