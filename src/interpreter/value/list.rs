use std::fmt::Write;

use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::char_from_code,
};

impl Value {
    /// Builds a list from its elements, first element first.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
        where I: IntoIterator<Item = Self>,
              I::IntoIter: DoubleEndedIterator
    {
        items.into_iter()
             .rev()
             .fold(Self::NIL, |tail, head| Self::cons(head, tail))
    }

    /// Converts text into a list of character codes.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_text("hi").to_string(), "[104, 105]");
    /// assert!(!Value::from_text("").is_truthy());
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let codes = text.chars()
                        .map(|c| Self::Integer(i64::from(u32::from(c))))
                        .collect::<Vec<_>>();
        Self::from_items(codes)
    }
}

/// Collects the elements of a list.
///
/// # Errors
/// `TypeMismatch` if `list`, or any tail along it, is not a list.
pub fn items(list: &Value, at: Location) -> EvalResult<Vec<Value>> {
    let mut items = Vec::new();
    let mut cell = list.as_list(at)?;

    while let Some(cons) = cell {
        items.push(cons.head.clone());
        cell = cons.tail.as_list(at)?;
    }

    Ok(items)
}

/// Converts a list of character codes back into text.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{Location, Position},
///     interpreter::value::{core::Value, list::text},
/// };
///
/// let at = Location { symbol: '{', position: Position::new(1, 0) };
///
/// assert_eq!(text(&Value::from_text("abc"), at).unwrap(), "abc");
/// assert!(text(&Value::Integer(7), at).is_err());
/// ```
///
/// # Errors
/// - `TypeMismatch` if the value is not a proper list of integers.
/// - `InvalidCharacterCode` if an element is not a Unicode scalar value.
pub fn text(row: &Value, at: Location) -> EvalResult<String> {
    items(row, at)?.iter()
                   .map(|item| {
                       let code = item.as_integer(at)?;
                       char_from_code(code).ok_or(RuntimeError::InvalidCharacterCode { code, at })
                   })
                   .collect()
}

/// Formats a program's final value for output.
///
/// An integer prints as a decimal number on its own line. A list prints as
/// rows, one line each: a row that is a list of character codes prints as
/// text, a row that is an integer prints as a number. A closure prints its
/// description.
///
/// # Example
/// ```
/// use monoglyph::{
///     ast::{Location, Position},
///     interpreter::value::{core::Value, list::render_output},
/// };
///
/// let at = Location { symbol: '{', position: Position::new(1, 0) };
/// let rows = Value::from_items([Value::from_text("Hi"), Value::from_text("there")]);
///
/// assert_eq!(render_output(&Value::Integer(65), at).unwrap(), "65\n");
/// assert_eq!(render_output(&rows, at).unwrap(), "Hi\nthere\n");
/// assert_eq!(render_output(&Value::NIL, at).unwrap(), "");
/// ```
///
/// # Errors
/// Propagates errors from [`items`] and [`text`], and rejects rows that are
/// closures.
pub fn render_output(value: &Value, at: Location) -> EvalResult<String> {
    let mut out = String::new();

    match value {
        Value::Integer(n) => {
            let _ = writeln!(out, "{n}");
        },
        Value::List(_) => {
            for row in items(value, at)? {
                match row {
                    Value::Integer(n) => {
                        let _ = writeln!(out, "{n}");
                    },
                    Value::List(_) => {
                        out.push_str(&text(&row, at)?);
                        out.push('\n');
                    },
                    Value::Closure(_) => {
                        return Err(RuntimeError::TypeMismatch { expected: "list",
                                                                found: row.kind_name(),
                                                                at });
                    },
                }
            }
        },
        Value::Closure(closure) => {
            let _ = writeln!(out, "{closure}");
        },
    }

    Ok(out)
}
