//! Configuration handling for the CLI.
//!
//! This module turns CLI arguments into a validated run configuration and
//! resolves where the CODEOWNERS text comes from.

use crate::cli::{Args, Command};
use std::fmt::{self, Display};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No CODEOWNERS file could be located.
    #[error("CODEOWNERS file not found: {0}")]
    MissingCodeowners(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Failed to read CODEOWNERS file.
    #[error("failed to read CODEOWNERS file: {0}")]
    ReadCodeowners(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration, unreadable input,
    /// or output failure).
    StartupFailure = 1,
    /// `format --check` found a file that is not formatted.
    CheckFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Where the CODEOWNERS text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Returns the file path, if the source is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }

    /// Reads the whole input, using `stdin` when the source is standard input.
    pub fn read_from<R: Read>(&self, mut stdin: R) -> Result<String, ConfigError> {
        match self {
            InputSource::Stdin => {
                let mut content = String::new();
                stdin.read_to_string(&mut content)?;
                Ok(content)
            }
            InputSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                ConfigError::ReadCodeowners(format!("'{}': {}", path.display(), e))
            }),
        }
    }

    /// Reads the whole input from the process's standard input or the file.
    pub fn read(&self) -> Result<String, ConfigError> {
        self.read_from(io::stdin().lock())
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What the `format` subcommand does with the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Print the normalized text.
    Print,
    /// Compare with the input and report.
    Check,
    /// Rewrite the input file.
    Write,
}

/// The operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List entries.
    Parse,
    /// Normalize the document.
    Format(FormatMode),
}

/// Validated and processed configuration for running the tool.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where to read the CODEOWNERS text from.
    pub source: InputSource,
    /// The operation to run.
    pub mode: Mode,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mode = match &args.command {
            Command::Parse(_) => Mode::Parse,
            Command::Format(format) if format.check => Mode::Format(FormatMode::Check),
            Command::Format(format) if format.write => Mode::Format(FormatMode::Write),
            Command::Format(_) => Mode::Format(FormatMode::Print),
        };

        let source = match args.command.input().file.as_deref() {
            Some(path) if path == Path::new("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
            None => InputSource::File(find_codeowners_file(&args.repository_path)?),
        };

        if mode == Mode::Format(FormatMode::Write) && source == InputSource::Stdin {
            return Err(ConfigError::Invalid(
                "--write cannot be used when reading from stdin".to_string(),
            ));
        }

        Ok(Self {
            source,
            mode,
            json_output: args.json,
        })
    }
}

/// Finds the CODEOWNERS file in the repository.
///
/// Searches in the following locations (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
pub fn find_codeowners_file(repo_path: &Path) -> Result<PathBuf, ConfigError> {
    let locations = [
        repo_path.join(".github/CODEOWNERS"),
        repo_path.join("CODEOWNERS"),
        repo_path.join("docs/CODEOWNERS"),
    ];

    locations
        .into_iter()
        .find(|path| path.is_file())
        .ok_or_else(|| {
            ConfigError::MissingCodeowners(format!(
                "searched '{}' in: .github/CODEOWNERS, CODEOWNERS, docs/CODEOWNERS",
                repo_path.display()
            ))
        })
}
