//! Line-level parser for CODEOWNERS content.
//!
//! This module drives the [`Lexer`] over the whole input and turns each
//! rule line into an [`Entry`]. Comment lines and blank lines produce
//! nothing.

use super::lexer::Lexer;
use super::token::TokenBuffer;
use crate::entry::Entry;
use log::{debug, trace};
use std::iter::FusedIterator;

/// Lazy iterator over the entries of a CODEOWNERS document.
///
/// Created by [`parse_codeowners`]. Each entry is parsed when the iterator
/// is advanced.
#[derive(Debug)]
pub struct Entries<'a> {
    lexer: Lexer<'a>,
    buffer: TokenBuffer,
    emitted: usize,
    finished: bool,
}

impl<'a> Entries<'a> {
    fn new(content: &'a str) -> Self {
        // Whitespace-only documents hold no entries
        let content = if content.trim().is_empty() { "" } else { content };
        Self {
            lexer: Lexer::new(content),
            buffer: TokenBuffer::new(),
            emitted: 0,
            finished: false,
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while !self.lexer.end_of_content() {
            if let Some(entry) = parse_line(&mut self.lexer, &mut self.buffer) {
                self.emitted += 1;
                return Some(entry);
            }
        }

        if !self.finished {
            self.finished = true;
            debug!("Parsing complete: {} entries", self.emitted);
        }
        None
    }
}

impl FusedIterator for Entries<'_> {}

/// Parses one logical line.
///
/// Returns the entry if the line holds a rule. Otherwise the line is skipped
/// along with its terminator.
fn parse_line(lexer: &mut Lexer<'_>, buffer: &mut TokenBuffer) -> Option<Entry> {
    let line = lexer.line();

    while !lexer.end_of_line() {
        if lexer.current() == '#' {
            lexer.consume_until_end_of_line();
            continue;
        }

        let pattern = parse_pattern(lexer, buffer);
        lexer.consume_all(' ');
        let owners = parse_owners(lexer, buffer);

        trace!(
            "Line {}: pattern {:?} with {} owner(s)",
            line,
            pattern,
            owners.len()
        );
        return Some(Entry { pattern, owners });
    }

    if !lexer.end_of_content() {
        lexer.consume();
    }

    None
}

/// Reads the pattern token. A space or tab ends it and is dropped.
fn parse_pattern(lexer: &mut Lexer<'_>, buffer: &mut TokenBuffer) -> String {
    while !lexer.end_of_line() {
        match lexer.consume() {
            ' ' | '\t' => return buffer.take(),
            c => buffer.push(c),
        }
    }

    buffer.take()
}

/// Reads owner tokens up to the end of the line. Every single space splits.
fn parse_owners(lexer: &mut Lexer<'_>, buffer: &mut TokenBuffer) -> Vec<String> {
    let mut owners = Vec::new();

    while !lexer.end_of_line() {
        match lexer.consume() {
            ' ' => owners.push(buffer.take()),
            c => buffer.push(c),
        }
    }

    if !buffer.is_empty() {
        owners.push(buffer.take());
    }

    owners
}

/// Parses CODEOWNERS content into a lazy sequence of entries.
///
/// Empty and whitespace-only content yields no entries. Every call starts a
/// fresh pass over `content`.
pub fn parse_codeowners(content: &str) -> Entries<'_> {
    debug!("Parsing CODEOWNERS content ({} bytes)", content.len());
    Entries::new(content)
}
