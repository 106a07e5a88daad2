//! CLI module for the CODEOWNERS tool.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CODEOWNERS tool - parses and formats GitHub CODEOWNERS files.
///
/// Reads a CODEOWNERS file (or stdin), then either lists its rules or
/// rewrites it in normalized form. Supports both human-readable and JSON
/// output formats.
#[derive(Parser, Debug)]
#[command(name = "codeowners")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root, searched when no file is given.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".", global = true)]
    pub repository_path: PathBuf,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the rules of a CODEOWNERS file.
    Parse(InputArgs),
    /// Print a CODEOWNERS file in normalized form.
    Format(FormatArgs),
}

/// Input selection shared by all subcommands.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InputArgs {
    /// CODEOWNERS file to read ('-' for stdin).
    /// Defaults to the file found in the repository.
    #[arg(env = "CODEOWNERS_FILE")]
    pub file: Option<PathBuf>,
}

/// Options for the `format` subcommand.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FormatArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with a failure code if the file is not already formatted.
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite the file in place, dropping comments, blank lines and
    /// trailing empty owners.
    #[arg(long, short = 'w')]
    pub write: bool,
}

impl Command {
    /// Returns the input arguments of this subcommand.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Parse(input) => input,
            Command::Format(format) => &format.input,
        }
    }
}
