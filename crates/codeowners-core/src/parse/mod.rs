//! Parser module for CODEOWNERS files.
//!
//! This module turns CODEOWNERS text into a lazy sequence of
//! [`Entry`](crate::Entry) values. Comments and blank lines are dropped.
//!
//! # Example
//!
//! ```rust
//! use codeowners_core::parse::parse_codeowners;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs    @rustacean
//! /docs/ @docs-team docs@example.com
//! "#;
//!
//! for entry in parse_codeowners(input) {
//!     println!("{} -> {:?}", entry.pattern, entry.owners);
//! }
//! ```

mod lexer;
mod parser;
mod token;

pub use parser::{Entries, parse_codeowners};

// Re-export the cursor for callers building their own line consumers
pub use lexer::Lexer;
