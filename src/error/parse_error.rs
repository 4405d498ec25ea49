use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during reading or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a character with no entry in the grammar table.
    #[error("Error at {position}: Malformed input, {symbol:?} is not part of the language.")]
    MalformedInput {
        /// The offending character.
        symbol:   char,
        /// Where it was read.
        position: Position,
    },
    /// Found more input after the program was complete.
    #[error("Error at {position}: Trailing input {symbol:?} after the end of the program.")]
    TrailingInput {
        /// The first extra character.
        symbol:   char,
        /// Where it was read.
        position: Position,
    },
    /// The input ended while a parent node still needed a child.
    #[error("Error at {position}: Unexpected end of input, {symbol:?} is missing a child.")]
    UnexpectedEndOfInput {
        /// The parent node left incomplete.
        symbol:   char,
        /// Where the parent was read.
        position: Position,
    },
    /// The source contains no program at all.
    #[error("Error: The program is empty.")]
    EmptyProgram,
}
