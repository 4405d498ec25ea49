use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors that can occur while reading the character stream and
/// building the syntax tree: characters outside the grammar, input that ends
/// in the middle of a node, and anything left over after the program.
pub mod parse_error;
/// Grammar errors.
///
/// The validator reports a node whose kind is not accepted at its position.
pub mod grammar_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: wrong
/// operand kinds, unbound names, arity mismatches, empty list access and
/// problems reading the program's input.
pub mod runtime_error;

pub use grammar_error::GrammarViolation;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Exit code for malformed command line arguments.
pub const EXIT_USAGE: u8 = 1;
/// Exit code when the program file cannot be read.
pub const EXIT_SOURCE: u8 = 2;
/// Exit code when the program fails to parse or validate.
pub const EXIT_INVALID: u8 = 3;
/// Exit code when evaluation fails.
pub const EXIT_RUNTIME: u8 = 4;

/// Any failure of the parse, validate and evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree does not follow the grammar.
    #[error(transparent)]
    Grammar(#[from] GrammarViolation),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::Grammar(_) => EXIT_INVALID,
            Self::Runtime(_) => EXIT_RUNTIME,
        }
    }
}
