//! The rule value produced by parsing and consumed by serialization.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// A single CODEOWNERS rule: a path pattern and the owners responsible for it.
///
/// Both the pattern and the owners are opaque strings. Owner order is
/// preserved exactly as written, duplicates included, and the list may be
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// The path pattern (e.g., "*.rs", "/docs/", "apps/").
    pub pattern: String,
    /// The owners in order of appearance.
    pub owners: Vec<String>,
}

impl Entry {
    /// Creates a new entry from a pattern and a sequence of owners.
    pub fn new<P, I, O>(pattern: P, owners: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            owners: owners.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if at least one owner is listed.
    pub fn has_owners(&self) -> bool {
        !self.owners.is_empty()
    }
}

/// Renders the entry as a CODEOWNERS line without the line break.
///
/// An entry with no owners renders as the pattern followed by a single space.
impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pattern, self.owners.join(" "))
    }
}

/// Error returned when a text snippet does not hold exactly one rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEntryError {
    /// The text is empty, blank, or contains only comments.
    #[error("no CODEOWNERS rule found")]
    NoRule,

    /// The text contains more than one rule line.
    #[error("expected a single CODEOWNERS rule, found {count}")]
    MultipleRules {
        /// Number of rules found in the text.
        count: usize,
    },
}

impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = crate::parse::parse_codeowners(s);
        let first = entries.next().ok_or(ParseEntryError::NoRule)?;
        let rest = entries.count();
        if rest > 0 {
            return Err(ParseEntryError::MultipleRules { count: rest + 1 });
        }
        Ok(first)
    }
}
