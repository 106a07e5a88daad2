//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for parsed
//! entries and format checks.

use codeowners_core::Entry;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// JSON output of the `parse` subcommand.
#[derive(Debug, Serialize)]
pub struct JsonEntries<'a> {
    /// The parsed entries, in source order.
    pub entries: &'a [Entry],
    /// Number of entries.
    pub count: usize,
}

impl<'a> JsonEntries<'a> {
    /// Creates the output for the given entries.
    pub fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            count: entries.len(),
        }
    }
}

/// JSON output of the `format` subcommand.
#[derive(Debug, Serialize)]
pub struct JsonFormat {
    /// Where the input was read from.
    pub source: String,
    /// Whether the input was already in normalized form.
    pub formatted: bool,
    /// The normalized text, when printing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a single entry as `pattern -> owners`.
    pub fn write_entry(&mut self, entry: &Entry) -> std::io::Result<()> {
        let owners = if entry.has_owners() {
            entry.owners.join(" ")
        } else {
            "(no owners)".to_string()
        };

        if self.use_colors {
            let owners = if entry.has_owners() {
                owners.normal()
            } else {
                owners.yellow()
            };
            writeln!(self.writer, "  {} -> {}", entry.pattern.cyan().bold(), owners)?;
        } else {
            writeln!(self.writer, "  {} -> {}", entry.pattern, owners)?;
        }

        Ok(())
    }

    /// Writes all entries followed by a summary.
    pub fn write_entries(&mut self, entries: &[Entry]) -> std::io::Result<()> {
        for entry in entries {
            self.write_entry(entry)?;
        }

        let unowned = entries.iter().filter(|e| !e.has_owners()).count();
        self.write_summary(entries.len(), unowned)
    }

    /// Writes a summary of the parsed entries.
    pub fn write_summary(&mut self, total: usize, unowned: usize) -> std::io::Result<()> {
        writeln!(self.writer)?;

        let message = format!("✓ Found {} rule(s), {} without owners", total, unowned);
        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }

        Ok(())
    }

    /// Writes the outcome of a format check or rewrite.
    pub fn write_format_status(&mut self, source: &str, formatted: bool) -> std::io::Result<()> {
        if formatted {
            let message = format!("✓ {} is formatted", source);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!("✗ {} is not formatted", source);
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
