//! Serializer for CODEOWNERS files.
//!
//! Renders entries back into CODEOWNERS text, one line per entry. Comments,
//! blank lines and original separator widths are not preserved.

use crate::entry::Entry;
use log::debug;
use std::fmt::{self, Write};

/// Writes entries as CODEOWNERS lines to `writer`.
///
/// Each line is the pattern, a single space, the owners joined by single
/// spaces, and a `\n`.
pub fn write_codeowners<'a, W, I>(writer: &mut W, entries: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    Ok(())
}

/// Serializes entries into CODEOWNERS text.
pub fn serialize_codeowners<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = write_codeowners(&mut output, entries);
    debug!("Serialized CODEOWNERS content ({} bytes)", output.len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_codeowners;

    fn entry(pattern: &str, owners: &[&str]) -> Entry {
        Entry::new(pattern, owners.iter().copied())
    }

    #[test]
    fn serialize_no_entries() {
        assert_eq!(serialize_codeowners(&Vec::<Entry>::new()), "");
    }

    #[test]
    fn serialize_one_line() {
        let entries = [entry("*", &["@global-owner1", "@global-owner2"])];
        assert_eq!(
            serialize_codeowners(&entries),
            "* @global-owner1 @global-owner2\n"
        );
    }

    #[test]
    fn serialize_email_owner() {
        let entries = [entry("*.go", &["docs@example.com"])];
        assert_eq!(serialize_codeowners(&entries), "*.go docs@example.com\n");
    }

    #[test]
    fn serialize_multi_line() {
        let entries = vec![
            entry("*", &["@global-owner1", "@global-owner2"]),
            entry("*.js", &["@js-owner"]),
            entry("*.go", &["docs@example.com"]),
        ];
        assert_eq!(
            serialize_codeowners(&entries),
            "* @global-owner1 @global-owner2\n*.js @js-owner\n*.go docs@example.com\n"
        );
    }

    #[test]
    fn serialize_entry_without_owners_keeps_trailing_space() {
        let entries = [entry("/apps/github", &[])];
        assert_eq!(serialize_codeowners(&entries), "/apps/github \n");
    }

    #[test]
    fn write_appends_to_existing_output() {
        let mut output = String::from("# header\n");
        write_codeowners(&mut output, &[entry("apps/", &["@octocat"])]).unwrap();
        assert_eq!(output, "# header\napps/ @octocat\n");
    }

    #[test]
    fn round_trip_single_spaced_text() {
        let text = "* @global-owner1 @global-owner2\n*.js @js-owner\n/apps/github \n";
        let entries: Vec<Entry> = parse_codeowners(text).collect();
        assert_eq!(serialize_codeowners(&entries), text);
    }

    #[test]
    fn round_trip_crlf_normalizes_to_lf() {
        let text = "*.rs @a @b\r\n*.md @c\r\n";
        let entries: Vec<Entry> = parse_codeowners(text).collect();
        assert_eq!(serialize_codeowners(&entries), "*.rs @a @b\n*.md @c\n");
    }

    #[test]
    fn reparse_is_idempotent() {
        let text = "# owners\n\n*       @a @b\n*.js    @js\n\n/apps/github\n* @x  @y\n";
        let first: Vec<Entry> = parse_codeowners(text).collect();
        let serialized = serialize_codeowners(&first);
        let second: Vec<Entry> = parse_codeowners(&serialized).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn trailing_double_space_settles_after_one_round() {
        let first: Vec<Entry> = parse_codeowners("* @a  \n").collect();
        assert_eq!(first, vec![entry("*", &["@a", ""])]);

        let serialized = serialize_codeowners(&first);
        assert_eq!(serialized, "* @a \n");

        let second: Vec<Entry> = parse_codeowners(&serialized).collect();
        assert_eq!(second, vec![entry("*", &["@a"])]);

        // Stable from here on
        let third: Vec<Entry> = parse_codeowners(&serialize_codeowners(&second)).collect();
        assert_eq!(third, second);
    }
}
