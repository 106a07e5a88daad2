//! Generate CODEOWNERS benchmark fixtures.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [DIR] [--seed N] [--unowned-percent P]
//!
//! Each preset produces `<name>.codeowners` and `<name>.entries.json`, the
//! entries the document parses to.

use clap::Parser;
use codeowners_core::generate::{GeneratorConfig, generate, generate_entries};
use std::{fs, io, path::Path, path::PathBuf, process::ExitCode};

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[(&str, fn() -> GeneratorConfig)] = &[
    ("small", GeneratorConfig::small),
    ("medium", GeneratorConfig::medium),
    ("large", GeneratorConfig::large),
    ("xlarge", GeneratorConfig::xlarge),
];

#[derive(Parser, Debug)]
#[command(name = "generate-fixtures")]
struct Args {
    /// Directory the fixtures are written to.
    #[arg(default_value = "benches/fixtures")]
    output_dir: PathBuf,

    /// Seed for every preset instead of its built-in one.
    #[arg(long)]
    seed: Option<u64>,

    /// Share of rules without owners, in percent (capped at 100).
    #[arg(long)]
    unowned_percent: Option<u32>,
}

impl Args {
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(percent) = self.unowned_percent {
            config = config.with_unowned_percent(percent);
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> io::Result<()> {
    fs::create_dir_all(&args.output_dir)?;

    for (name, preset) in PRESETS {
        let config = args.apply(preset());
        write_fixture(&args.output_dir, name, &config)?;
    }

    Ok(())
}

fn write_fixture(dir: &Path, name: &str, config: &GeneratorConfig) -> io::Result<()> {
    let content = generate(config);
    let entries = generate_entries(config);

    let path = dir.join(format!("{name}.codeowners"));
    fs::write(&path, &content)?;

    let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
    fs::write(dir.join(format!("{name}.entries.json")), json)?;

    println!(
        "Generated {} ({} bytes, {} rules, {} unowned, up to {} comments)",
        path.display(),
        content.len(),
        entries.len(),
        entries.iter().filter(|e| !e.has_owners()).count(),
        config.num_comments
    );
    Ok(())
}
