//! Scratch buffer for building tokens.

/// Accumulates characters for one token at a time.
///
/// Taking the token out leaves the buffer empty but keeps its allocation
/// around for the next token.
#[derive(Debug, Default)]
pub struct TokenBuffer {
    text: String,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the current token.
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Returns true if no characters are buffered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the buffered token and clears the buffer.
    pub fn take(&mut self) -> String {
        let token = self.text.clone();
        self.text.clear();
        token
    }
}
