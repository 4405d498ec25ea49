use thiserror::Error;

use crate::{
    ast::Position,
    interpreter::grammar::{KindSet, SyntaxKind},
};

/// A node whose kind is not allowed where it appears.
///
/// The allowed set is the one declared by the node's parent for that side,
/// or `{Program}` for the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at {position}: {symbol:?} ({kind}) is not allowed here, expected one of {allowed}.")]
pub struct GrammarViolation {
    /// The node's character.
    pub symbol:   char,
    /// The kind the node produces.
    pub kind:     SyntaxKind,
    /// Where the node was read.
    pub position: Position,
    /// The kinds that would have been accepted.
    pub allowed:  KindSet,
}
