use std::{fmt, rc::Rc};

use crate::{
    ast::{Location, Node},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::frame::Frame},
};

/// A list: either the empty list or a shared cons cell.
pub type List = Option<Rc<Cons>>;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once built. Lists and closures are shared by
/// reference, so cloning a `Value` is cheap.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64 bit signed integer. Comparisons produce `1` and `0`.
    Integer(i64),
    /// A list, `None` being the empty list.
    List(List),
    /// A user lambda or one of the built-ins.
    Closure(Rc<Closure>),
}

/// An immutable pair, the building block of lists.
#[derive(Debug)]
pub struct Cons {
    /// The first element.
    pub head: Value,
    /// The rest, normally another list.
    pub tail: Value,
}

// Unlinks the tail cell by cell so that freeing a long list does not recurse
// once per element.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut tail = std::mem::replace(&mut self.tail, Value::NIL);

        while let Value::List(Some(cell)) = tail {
            match Rc::try_unwrap(cell) {
                Ok(mut cons) => tail = std::mem::replace(&mut cons.tail, Value::NIL),
                Err(_) => break,
            }
        }
    }
}

/// Something that can be called.
pub enum Closure {
    /// A lambda from the program, with the frame it was created in.
    User {
        /// The frame active when the lambda was evaluated.
        frame:  Rc<Frame>,
        /// The `LambdaExp` node holding parameters and body.
        lambda: Rc<Node>,
    },
    /// One of the closures the prelude provides.
    Builtin(Builtin),
}

/// The closures bound in every program's root frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Reads one integer from the input.
    ReadInt,
    /// Reads one whitespace delimited token from the input as a list of
    /// character codes.
    ReadToken,
    /// The head of a list.
    First,
    /// The tail of a list.
    Rest,
}

impl Builtin {
    /// A readable name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReadInt => "read-int",
            Self::ReadToken => "read-token",
            Self::First => "first",
            Self::Rest => "rest",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Self::Closure(Rc::new(Closure::Builtin(builtin)))
    }
}

impl Value {
    /// The empty list.
    pub const NIL: Self = Self::List(None);

    /// Pairs `head` and `tail` in a new cell.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::value::core::Value;
    ///
    /// let list = Value::cons(1.into(), Value::NIL);
    ///
    /// assert!(list.is_truthy());
    /// assert!(!Value::NIL.is_truthy());
    /// ```
    #[must_use]
    pub fn cons(head: Self, tail: Self) -> Self {
        Self::List(Some(Rc::new(Cons { head, tail })))
    }

    /// The name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::List(_) => "list",
            Self::Closure(_) => "closure",
        }
    }

    /// Decides which branch a conditional takes.
    ///
    /// Integers are true when non-zero, lists when non-empty, closures always.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::List(list) => list.is_some(),
            Self::Closure(_) => true,
        }
    }

    /// Equality as the `=` operator sees it.
    ///
    /// Values of different kinds are never equal. Integers compare by value.
    /// Lists and closures compare by identity, so two lists built separately
    /// are different even with the same elements. The empty list equals
    /// itself, and a built-in equals every other closure of the same built-in.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::value::core::Value;
    ///
    /// let a = Value::cons(1.into(), Value::NIL);
    /// let b = Value::cons(1.into(), Value::NIL);
    ///
    /// assert!(a.identical(&a.clone()));
    /// assert!(!a.identical(&b));
    /// assert!(Value::Integer(3).identical(&3.into()));
    /// ```
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::List(None), Self::List(None)) => true,
            (Self::List(Some(a)), Self::List(Some(b))) => Rc::ptr_eq(a, b),
            (Self::Closure(a), Self::Closure(b)) => {
                Rc::ptr_eq(a, b)
                || matches!((&**a, &**b), (Closure::Builtin(x), Closure::Builtin(y)) if x == y)
            },
            _ => false,
        }
    }

    /// Returns the integer, or a `TypeMismatch` at `at`.
    pub fn as_integer(&self, at: Location) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(self.mismatch("integer", at)),
        }
    }

    /// Returns the list, or a `TypeMismatch` at `at`.
    pub fn as_list(&self, at: Location) -> EvalResult<&List> {
        match self {
            Self::List(list) => Ok(list),
            _ => Err(self.mismatch("list", at)),
        }
    }

    /// Returns the first cell of a non-empty list.
    ///
    /// # Errors
    /// - `EmptyListAccess` for the empty list.
    /// - `TypeMismatch` if the value is not a list.
    pub fn as_cons(&self, at: Location) -> EvalResult<&Rc<Cons>> {
        self.as_list(at)?
            .as_ref()
            .ok_or(RuntimeError::EmptyListAccess { at })
    }

    /// Returns the closure, or a `TypeMismatch` at `at`.
    pub fn as_closure(&self, at: Location) -> EvalResult<&Rc<Closure>> {
        match self {
            Self::Closure(closure) => Ok(closure),
            _ => Err(self.mismatch("closure", at)),
        }
    }

    fn mismatch(&self, expected: &'static str, at: Location) -> RuntimeError {
        RuntimeError::TypeMismatch { expected,
                                     found: self.kind_name(),
                                     at }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::List(list) => {
                write!(f, "[")?;

                let mut cell = list.as_ref();
                let mut first = true;
                while let Some(cons) = cell {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;

                    write!(f, "{}", cons.head)?;

                    cell = match &cons.tail {
                        Self::List(rest) => rest.as_ref(),
                        improper => {
                            write!(f, " | {improper}")?;
                            None
                        },
                    };
                }

                write!(f, "]")
            },
            Self::Closure(closure) => write!(f, "{closure}"),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { lambda, .. } => write!(f, "<lambda at {}>", lambda.position),
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}

// Frames can reach back to the closure through their bindings, so Debug stays
// shallow.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure({self})")
    }
}
