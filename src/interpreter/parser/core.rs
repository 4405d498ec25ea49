use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        grammar::{self, Shape},
        lexer::{CharacterSource, Glyph},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive descent parser over a [`CharacterSource`].
///
/// The parser only knows shapes. `! 1 2` parses fine even though `1` cannot be
/// assigned to; the validator rejects it afterwards.
pub struct Parser<'s> {
    source: CharacterSource<'s>,
}

impl<'s> Parser<'s> {
    /// Creates a parser reading `text`.
    #[must_use]
    pub fn new(text: &'s str) -> Self {
        Self { source: CharacterSource::new(text) }
    }

    /// Parses a whole program.
    ///
    /// Exactly one top-level node is read. After it the stream must be
    /// exhausted.
    ///
    /// # Errors
    /// - `EmptyProgram` if there is nothing to parse.
    /// - `TrailingInput` if anything follows the top-level node.
    /// - Propagates errors from [`Parser::parse_one`].
    pub fn parse_program(mut self) -> ParseResult<Node> {
        let root = self.parse_one()?.ok_or(ParseError::EmptyProgram)?;

        if let Some(Glyph { character, position }) = self.source.next_glyph()? {
            return Err(ParseError::TrailingInput { symbol: character,
                                                   position });
        }

        debug!(nodes = root.size(), "parsed program");
        Ok(root)
    }

    /// Parses one node and, for parent symbols, both of its subtrees.
    ///
    /// Returns `None` when the stream is already exhausted.
    ///
    /// # Errors
    /// - `MalformedInput` if a character has no grammar table entry.
    /// - `UnexpectedEndOfInput` if the stream ends inside a parent node.
    pub fn parse_one(&mut self) -> ParseResult<Option<Node>> {
        let Some(glyph) = self.source.next_glyph()? else {
            return Ok(None);
        };

        let descriptor =
            grammar::lookup(glyph.character).ok_or(ParseError::MalformedInput { symbol:   glyph.character,
                                                                                position: glyph.position, })?;

        let node = match descriptor.shape {
            Shape::Leaf => Node::leaf(glyph.character, descriptor, glyph.position),
            Shape::Parent => {
                let left = self.parse_child(glyph)?;
                let right = self.parse_child(glyph)?;
                Node::parent(glyph.character, descriptor, glyph.position, left, right)
            },
        };

        Ok(Some(node))
    }

    /// Parses a required child of `parent`.
    fn parse_child(&mut self, parent: Glyph) -> ParseResult<Node> {
        self.parse_one()?
            .ok_or(ParseError::UnexpectedEndOfInput { symbol:   parent.character,
                                                      position: parent.position, })
    }
}

/// Parses `source` into a syntax tree.
///
/// # Example
/// ```
/// use monoglyph::interpreter::{grammar::SyntaxKind, parser::core::parse_program};
///
/// let tree = parse_program("{ ! x #41 ; x }").unwrap();
///
/// assert_eq!(tree.kind(), SyntaxKind::Program);
/// assert_eq!(tree.to_string(), "{!x#41;x}");
/// ```
///
/// # Errors
/// See [`Parser::parse_program`].
pub fn parse_program(source: &str) -> ParseResult<Node> {
    Parser::new(source).parse_program()
}
