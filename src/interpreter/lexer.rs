use logos::Logos;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// How many columns a tab advances.
pub const TAB_WIDTH: usize = 4;

/// A single source character and the position it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// The character.
    pub character: char,
    /// Where it was read.
    pub position:  Position,
}

/// Represents a lexical token in the source input.
///
/// Every non-whitespace character is a token of its own. Whether it means
/// anything is up to the grammar table; the lexer only tracks positions and
/// drops whitespace.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Any character other than a space, tab or newline.
    #[regex(r"[^ \t\n]", symbol)]
    Symbol(Glyph),
    /// ` `
    #[token(" ", |lex| {
        lex.extras.column += 1;
        logos::Skip
    })]
    Space,
    /// `\t`
    #[token("\t", |lex| {
        lex.extras.column += TAB_WIDTH;
        logos::Skip
    })]
    Tab,
    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.column = 0;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the line and column of the next character.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line, starting at 1.
    pub line:   usize,
    /// The current column, starting at 0.
    pub column: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

/// Snapshots the position of the current character.
///
/// The column is advanced by [`CharacterSource::next_glyph`] once the glyph is
/// handed out.
fn symbol(lex: &logos::Lexer<Token>) -> Glyph {
    let position = Position::new(lex.extras.line, lex.extras.column);
    let character = lex.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);

    Glyph { character, position }
}

/// Yields the characters of a program one at a time, skipping whitespace.
///
/// # Example
/// ```
/// use monoglyph::{ast::Position, interpreter::lexer::CharacterSource};
///
/// let mut source = CharacterSource::new("{\n\tx");
///
/// let open = source.next_glyph().unwrap().unwrap();
/// assert_eq!(open.position, Position::new(1, 0));
///
/// let name = source.next_glyph().unwrap().unwrap();
/// assert_eq!(name.character, 'x');
/// assert_eq!(name.position, Position::new(2, 4));
///
/// assert!(source.next_glyph().unwrap().is_none());
/// ```
pub struct CharacterSource<'s> {
    lexer: logos::Lexer<'s, Token>,
}

impl<'s> CharacterSource<'s> {
    /// Creates a source reading `text` from line 1, column 0.
    #[must_use]
    pub fn new(text: &'s str) -> Self {
        Self { lexer: Token::lexer_with_extras(text, LexerExtras::default()) }
    }

    /// The position of the next character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.lexer.extras.line, self.lexer.extras.column)
    }

    /// Returns the next non-whitespace character, or `None` at the end of the
    /// stream.
    pub fn next_glyph(&mut self) -> ParseResult<Option<Glyph>> {
        match self.lexer.next() {
            Some(Ok(Token::Symbol(glyph))) => {
                self.lexer.extras.column += 1;
                Ok(Some(glyph))
            },
            // The whitespace callbacks return `Skip`, so these never arrive. The
            // variants exist only to carry the callbacks that move the column.
            Some(Ok(Token::Space | Token::Tab | Token::NewLine)) => self.next_glyph(),
            Some(Err(())) => {
                let symbol = self.lexer
                                 .slice()
                                 .chars()
                                 .next()
                                 .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ParseError::MalformedInput { symbol,
                                                 position: self.position(), })
            },
            None => Ok(None),
        }
    }
}
