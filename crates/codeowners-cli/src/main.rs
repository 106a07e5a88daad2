//! CODEOWNERS CLI
//!
//! A command-line tool for parsing and formatting GitHub CODEOWNERS files.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, FormatMode, Mode, ValidatedConfig};
use cli::output::{HumanOutput, JsonEntries, JsonFormat, write_json};
use codeowners_core::{Entry, parse_codeowners, serialize_codeowners};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(&args);

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the tool with the given arguments.
fn run(args: &Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Reading CODEOWNERS from {}", config.source);

    let content = match config.source.read() {
        Ok(content) => content,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let result = match config.mode {
        Mode::Parse => run_parse(&content, &config, &mut stdout, use_colors),
        Mode::Format(mode) => run_format(&content, mode, &config, &mut stdout, use_colors),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("Failed to write output: {}", e);
            ExitCode::StartupFailure
        }
    }
}

/// Lists the entries of `content`.
fn run_parse<W: Write>(
    content: &str,
    config: &ValidatedConfig,
    writer: &mut W,
    use_colors: bool,
) -> io::Result<ExitCode> {
    let entries: Vec<Entry> = parse_codeowners(content).collect();
    info!("Parsed {} entries from {}", entries.len(), config.source);

    if config.json_output {
        write_json(writer, &JsonEntries::new(&entries))?;
    } else {
        HumanOutput::new(writer, use_colors).write_entries(&entries)?;
    }

    Ok(ExitCode::Success)
}

/// Normalizes `content` and prints, checks or rewrites it.
fn run_format<W: Write>(
    content: &str,
    mode: FormatMode,
    config: &ValidatedConfig,
    writer: &mut W,
    use_colors: bool,
) -> io::Result<ExitCode> {
    let mut entries: Vec<Entry> = parse_codeowners(content).collect();
    let dropped_owners = trim_trailing_empty_owners(&mut entries);
    let dropped_lines = content.lines().count().saturating_sub(entries.len());
    let formatted = serialize_codeowners(&entries);
    let unchanged = formatted == content;
    debug!(
        "Formatted {} entries ({} -> {} bytes, unchanged={})",
        entries.len(),
        content.len(),
        formatted.len(),
        unchanged
    );

    let source = config.source.to_string();
    if mode != FormatMode::Check {
        if dropped_lines > 0 {
            warn!("{}: dropping {} comment or blank line(s)", source, dropped_lines);
        }
        if dropped_owners > 0 {
            warn!("{}: dropping {} trailing empty owner(s)", source, dropped_owners);
        }
    }

    let exit_code = match mode {
        FormatMode::Print => {
            if config.json_output {
                let output = JsonFormat {
                    source,
                    formatted: unchanged,
                    content: Some(formatted),
                };
                write_json(writer, &output)?;
            } else {
                writer.write_all(formatted.as_bytes())?;
            }
            ExitCode::Success
        }
        FormatMode::Check => {
            write_format_status(writer, source, unchanged, config.json_output, use_colors)?;
            if unchanged {
                ExitCode::Success
            } else {
                ExitCode::CheckFailed
            }
        }
        FormatMode::Write => {
            match config.source.path() {
                Some(path) if !unchanged => {
                    info!("Rewriting {}", path.display());
                    std::fs::write(path, &formatted)?;
                }
                _ => debug!("Nothing to write for {}", config.source),
            }
            write_format_status(writer, source, true, config.json_output, use_colors)?;
            ExitCode::Success
        }
    };

    Ok(exit_code)
}

/// Removes empty owners left at the end of each entry by trailing spaces.
///
/// Serialized output of the trimmed entries parses back to the same entries.
/// Returns the number of owners removed.
fn trim_trailing_empty_owners(entries: &mut [Entry]) -> usize {
    let mut removed = 0;
    for entry in entries {
        while entry.owners.last().is_some_and(String::is_empty) {
            entry.owners.pop();
            removed += 1;
        }
    }
    removed
}

fn write_format_status<W: Write>(
    writer: &mut W,
    source: String,
    formatted: bool,
    json_output: bool,
    use_colors: bool,
) -> io::Result<()> {
    if json_output {
        let output = JsonFormat {
            source,
            formatted,
            content: None,
        };
        write_json(writer, &output)
    } else {
        HumanOutput::new(writer, use_colors).write_format_status(&source, formatted)
    }
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let _ = HumanOutput::new(writer, use_colors).write_error(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::config::InputSource;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const UNFORMATTED: &str = "# owners\n\n*       @global-owner1 @global-owner2\n*.js    @js-owner\n/apps/github\n";
    const FORMATTED: &str = "* @global-owner1 @global-owner2\n*.js @js-owner\n/apps/github \n";

    fn config(source: InputSource, mode: Mode, json_output: bool) -> ValidatedConfig {
        ValidatedConfig {
            source,
            mode,
            json_output,
        }
    }

    #[test]
    fn test_parse_human() {
        let config = config(InputSource::Stdin, Mode::Parse, false);
        let mut buf = Vec::new();
        let code = run_parse(UNFORMATTED, &config, &mut buf, false).unwrap();

        assert_eq!(code, ExitCode::Success);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  *.js -> @js-owner\n"));
        assert!(text.contains("Found 3 rule(s), 1 without owners"));
    }

    #[test]
    fn test_parse_json() {
        let config = config(InputSource::Stdin, Mode::Parse, true);
        let mut buf = Vec::new();
        run_parse(UNFORMATTED, &config, &mut buf, false).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["entries"][2]["pattern"], "/apps/github");
    }

    #[test]
    fn test_format_print() {
        let config = config(InputSource::Stdin, Mode::Format(FormatMode::Print), false);
        let mut buf = Vec::new();
        let code =
            run_format(UNFORMATTED, FormatMode::Print, &config, &mut buf, false).unwrap();

        assert_eq!(code, ExitCode::Success);
        assert_eq!(String::from_utf8(buf).unwrap(), FORMATTED);
    }

    #[test]
    fn test_format_print_json() {
        let config = config(InputSource::Stdin, Mode::Format(FormatMode::Print), true);
        let mut buf = Vec::new();
        run_format(UNFORMATTED, FormatMode::Print, &config, &mut buf, false).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["source"], "<stdin>");
        assert_eq!(json["formatted"], false);
        assert_eq!(json["content"], FORMATTED);
    }

    #[test]
    fn test_format_check_fails_on_unformatted() {
        let config = config(InputSource::Stdin, Mode::Format(FormatMode::Check), false);
        let mut buf = Vec::new();
        let code =
            run_format(UNFORMATTED, FormatMode::Check, &config, &mut buf, false).unwrap();

        assert_eq!(code, ExitCode::CheckFailed);
        assert!(String::from_utf8(buf).unwrap().contains("is not formatted"));
    }

    #[test]
    fn test_format_check_passes_on_formatted() {
        let config = config(InputSource::Stdin, Mode::Format(FormatMode::Check), true);
        let mut buf = Vec::new();
        let code = run_format(FORMATTED, FormatMode::Check, &config, &mut buf, false).unwrap();

        assert_eq!(code, ExitCode::Success);
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["formatted"], true);
    }

    #[test]
    fn test_format_write_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("CODEOWNERS");
        fs::write(&path, UNFORMATTED).unwrap();

        let config = config(
            InputSource::File(path.clone()),
            Mode::Format(FormatMode::Write),
            false,
        );
        let mut buf = Vec::new();
        let code =
            run_format(UNFORMATTED, FormatMode::Write, &config, &mut buf, false).unwrap();

        assert_eq!(code, ExitCode::Success);
        assert_eq!(fs::read_to_string(&path).unwrap(), FORMATTED);
    }

    fn write_then_check(input: &str) -> (String, ExitCode) {
        let dir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("CODEOWNERS");
        fs::write(&path, input).unwrap();

        let write = config(
            InputSource::File(path.clone()),
            Mode::Format(FormatMode::Write),
            false,
        );
        let mut buf = Vec::new();
        run_format(input, FormatMode::Write, &write, &mut buf, false).unwrap();

        let rewritten = fs::read_to_string(&path).unwrap();
        let check = config(
            InputSource::File(path),
            Mode::Format(FormatMode::Check),
            false,
        );
        let mut buf = Vec::new();
        let code = run_format(&rewritten, FormatMode::Check, &check, &mut buf, false).unwrap();
        (rewritten, code)
    }

    #[test]
    fn test_format_write_then_check_trailing_double_space() {
        let (rewritten, code) = write_then_check("* @a  \n");
        assert_eq!(rewritten, "* @a\n");
        assert_eq!(code, ExitCode::Success);
    }

    #[test]
    fn test_format_write_then_check_commented_input() {
        let (rewritten, code) = write_then_check(UNFORMATTED);
        assert_eq!(rewritten, FORMATTED);
        assert_eq!(code, ExitCode::Success);
    }

    #[test]
    fn test_trim_trailing_empty_owners() {
        let mut entries: Vec<Entry> = parse_codeowners("* @a  \n*.rs @b  @c\n/docs   \n").collect();
        assert_eq!(trim_trailing_empty_owners(&mut entries), 1);
        assert_eq!(
            entries,
            vec![
                Entry::new("*", ["@a"]),
                Entry::new("*.rs", ["@b", "", "@c"]),
                Entry::new("/docs", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn test_write_error_plain() {
        let mut buf = Vec::new();
        write_error(&mut buf, "something failed", false);
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: something failed\n");
    }
}
