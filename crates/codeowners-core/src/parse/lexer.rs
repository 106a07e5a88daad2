//! Character cursor over CODEOWNERS text.
//!
//! The lexer is a forward-only view over the input. It never allocates and
//! never moves backwards; the parser drives it one character at a time.

/// A forward-only cursor over an immutable string, aware of `\n` and `\r\n`
/// line boundaries.
///
/// Positions are byte offsets; the cursor always sits on a character
/// boundary and advances by the UTF-8 width of each consumed character.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    content: &'a str,
    position: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            position: 0,
            line: 1,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line number of the cursor (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    fn remaining(&self) -> &'a str {
        &self.content[self.position..]
    }

    /// Returns true once the cursor has moved past the last character.
    pub fn end_of_content(&self) -> bool {
        self.position >= self.content.len()
    }

    /// Returns true at end of content, on `\n`, or on a `\r` that is
    /// immediately followed by `\n`.
    ///
    /// A `\r` that is the final character of the input is not a line end.
    pub fn end_of_line(&self) -> bool {
        let mut chars = self.remaining().chars();
        match chars.next() {
            None | Some('\n') => true,
            Some('\r') => chars.next() == Some('\n'),
            Some(_) => false,
        }
    }

    /// Returns the character under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the end of content has been reached.
    pub fn current(&self) -> char {
        match self.remaining().chars().next() {
            Some(c) => c,
            None => panic!(
                "invalid cursor state: end of content reached at offset {}, no current character",
                self.position
            ),
        }
    }

    /// Returns the character after the one under the cursor, if any.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Returns the character under the cursor and advances past it.
    ///
    /// # Panics
    ///
    /// Panics if the end of content has been reached.
    pub fn consume(&mut self) -> char {
        let c = self.current();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes characters until the cursor reaches the end of the line.
    pub fn consume_until_end_of_line(&mut self) {
        while !self.end_of_line() {
            self.consume();
        }
    }

    /// Skips the run of consecutive `target` characters starting at the
    /// cursor. Does nothing if the cursor is not on `target`.
    pub fn consume_all(&mut self, target: char) {
        if self.end_of_content() || self.current() != target {
            return;
        }

        while self.peek() == Some(target) {
            self.consume();
        }

        self.consume();
    }
}
