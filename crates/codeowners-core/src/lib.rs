//! CODEOWNERS Core
//!
//! A library for parsing and serializing GitHub CODEOWNERS files.
//!
//! # Features
//!
//! - **Parser**: Turn CODEOWNERS text into a lazy sequence of entries
//! - **Serializer**: Render entries back into CODEOWNERS text
//! - **Permissive Grammar**: Comments, blank lines, missing owners and extra
//!   whitespace are never errors
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_core::{Entry, parse_codeowners, serialize_codeowners};
//!
//! let input = r#"
//! # CODEOWNERS file
//! *       @global-owner1 @global-owner2
//! /docs/ @github/docs-team
//! "#;
//!
//! let entries: Vec<Entry> = parse_codeowners(input).collect();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1], Entry::new("/docs/", ["@github/docs-team"]));
//!
//! let output = serialize_codeowners(&entries);
//! assert_eq!(output, "* @global-owner1 @global-owner2\n/docs/ @github/docs-team\n");
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Lexer and parser for CODEOWNERS text
//! - [`serialize`]: Serializer for CODEOWNERS entries

mod entry;
pub mod parse;
pub mod serialize;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use entry::{Entry, ParseEntryError};
pub use parse::{Entries, parse_codeowners};
pub use serialize::{serialize_codeowners, write_codeowners};
