use std::io::{self, BufRead};

use tracing::trace;

/// Splits a reader into whitespace delimited tokens.
///
/// Tokens are read lazily: only as much input as the next token needs is
/// consumed, so a program reading interactively does not block on lines it
/// has not asked for yet.
///
/// # Example
/// ```
/// use monoglyph::interpreter::evaluator::input::TokenReader;
///
/// let mut reader = TokenReader::new("  12 abc\n-3".as_bytes());
///
/// assert_eq!(reader.next_token().unwrap().as_deref(), Some("12"));
/// assert_eq!(reader.next_token().unwrap().as_deref(), Some("abc"));
/// assert_eq!(reader.next_token().unwrap().as_deref(), Some("-3"));
/// assert_eq!(reader.next_token().unwrap(), None);
/// ```
pub struct TokenReader<R> {
    reader: R,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the next token, or `None` once the input is exhausted.
    ///
    /// The whitespace character ending a token is consumed with it. Tokens are
    /// decoded lossily: invalid UTF-8 turns into U+FFFD.
    ///
    /// # Errors
    /// Any error of the underlying reader.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut token = Vec::new();

        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buffer {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
            }

            self.reader.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }

        let token = String::from_utf8_lossy(&token).into_owned();
        trace!(%token, "read input token");
        Ok(Some(token))
    }
}
