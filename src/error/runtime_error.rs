use thiserror::Error;

use crate::ast::Location;

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the location of the node being evaluated when the
/// error was raised.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A call supplied a different number of arguments than the lambda has
    /// parameters.
    #[error("Error at {at}: Argument count mismatch, expected {expected} but found {found}.")]
    ArityMismatch {
        /// Parameters declared by the callee.
        expected: usize,
        /// Arguments supplied by the call.
        found:    usize,
        /// The call.
        at:       Location,
    },
    /// A variable is bound in no enclosing frame.
    #[error("Error at {at}: Unbound variable '{name}'.")]
    UnboundVariable {
        /// The variable name.
        name: char,
        /// The variable reference.
        at:   Location,
    },
    /// Asked for the head or tail of the empty list.
    #[error("Error at {at}: Cannot take the head or tail of the empty list.")]
    EmptyListAccess {
        /// The offending argument.
        at: Location,
    },
    /// A value had a different kind than the operation needs.
    #[error("Error at {at}: Type error, expected {expected} but found {found}.")]
    TypeMismatch {
        /// The kind the operation needs.
        expected: &'static str,
        /// The kind it got.
        found:    &'static str,
        /// The operation or operand.
        at:       Location,
    },
    /// Integer arithmetic overflowed.
    #[error("Error at {at}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The operator.
        at: Location,
    },
    /// The input token read for an integer is not one.
    #[error("Error at {at}: Expected an integer on input but read '{token}'.")]
    InvalidInteger {
        /// The token read.
        token: String,
        /// The call that read it.
        at:    Location,
    },
    /// An integer was requested but the input is exhausted.
    #[error("Error at {at}: Expected an integer but the input is exhausted.")]
    InputExhausted {
        /// The call that tried to read.
        at: Location,
    },
    /// An output row contains a value that is not a character code.
    #[error("Error at {at}: {code} is not a valid character code.")]
    InvalidCharacterCode {
        /// The offending value.
        code: i64,
        /// The program whose result was being printed.
        at:   Location,
    },
    /// The evaluator met a node that cannot appear where it is. Only trees that
    /// skipped validation can trigger this.
    #[error("Error at {at}: Malformed syntax tree, this node cannot be evaluated here.")]
    MalformedTree {
        /// The node.
        at: Location,
    },
    /// Reading the program's input failed.
    #[error("Error at {at}: Failed to read input: {source}")]
    Input {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The call that tried to read.
        at:     Location,
    },
}
