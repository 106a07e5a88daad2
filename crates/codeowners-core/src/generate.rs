//! Random CODEOWNERS file generation for benchmarking and testing.
//!
//! Entries are generated first and then rendered with comments, blank lines
//! and padded separators, so the text always parses back to exactly the
//! generated entries.

use crate::entry::Entry;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Write;

/// Configuration for generating CODEOWNERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of section comments to intersperse.
    pub num_comments: usize,
    /// Maximum owners per rule (1-4 typical).
    pub max_owners_per_rule: usize,
    /// Percentage of rules generated without owners.
    pub unowned_percent: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 4,
            unowned_percent: 5,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional comments.
    ///
    /// Comments are set to ~20% of rules (minimum 0).
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    /// GitHub's limit is 3MB (~3_000_000 bytes).
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~50 bytes
        Self::new(bytes.saturating_div(50).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }

    /// Set the percentage of rules without owners (capped at 100).
    pub fn with_unowned_percent(mut self, percent: u32) -> Self {
        self.unowned_percent = percent.min(100);
        self
    }
}

mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*",
        "*.{ext}",
        "**/*.{ext}",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "/src/{dir}/",
        "/src/**/*.{ext}",
        "/{dir}/**/test_*.{ext}",
        "{dir}/",
        "docs/**/*.md",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "github", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Frontend", "Backend", "Infrastructure", "Documentation"];
}

/// Owner type distribution weights (must sum to 100).
const WEIGHT_USER: u32 = 50;
const WEIGHT_TEAM: u32 = 30;
// Remaining weight (20) goes to email

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

/// Widest run of spaces placed between a pattern and its first owner.
const MAX_SEPARATOR_WIDTH: usize = 8;

/// Generates random CODEOWNERS entries based on configuration.
pub fn generate_entries(config: &GeneratorConfig) -> Vec<Entry> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.num_rules)
        .map(|_| generate_entry(&mut rng, config))
        .collect()
}

fn generate_entry(rng: &mut StdRng, config: &GeneratorConfig) -> Entry {
    use vocabulary::*;

    let template = PATTERN_TEMPLATES[rng.random_range(0..PATTERN_TEMPLATES.len())];
    let ext = EXTENSIONS[rng.random_range(0..EXTENSIONS.len())];
    let dir = DIRECTORIES[rng.random_range(0..DIRECTORIES.len())];
    let pattern = template.replace("{ext}", ext).replace("{dir}", dir);

    if rng.random_ratio(config.unowned_percent.min(100), 100) {
        return Entry::new(pattern, Vec::<String>::new());
    }

    let num_owners = rng.random_range(1..=config.max_owners_per_rule.max(1));
    let owners: Vec<String> = (0..num_owners).map(|_| generate_owner(rng)).collect();
    Entry::new(pattern, owners)
}

/// Generate a random owner based on weighted distribution.
fn generate_owner(rng: &mut StdRng) -> String {
    use vocabulary::*;

    let roll = rng.random_range(0..100);

    if roll < WEIGHT_USER {
        format!("@{}", USERNAMES[rng.random_range(0..USERNAMES.len())])
    } else if roll < WEIGHT_USER + WEIGHT_TEAM {
        format!(
            "@{}/{}",
            ORGS[rng.random_range(0..ORGS.len())],
            TEAMS[rng.random_range(0..TEAMS.len())]
        )
    } else {
        format!(
            "{}@example.com",
            USERNAMES[rng.random_range(0..USERNAMES.len())]
        )
    }
}

/// Renders entries as a CODEOWNERS document with comments and padding.
fn render(entries: &[Entry], config: &GeneratorConfig) -> String {
    use vocabulary::*;

    // Separate stream so the entries do not depend on the rendering
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut output = String::with_capacity(entries.len() * 50);

    output.push_str("# Auto-generated CODEOWNERS for benchmarking\n\n");

    let mut comments_added = 0;
    for (idx, entry) in entries.iter().enumerate() {
        if comments_added < config.num_comments
            && idx > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            let section = SECTION_NAMES[rng.random_range(0..SECTION_NAMES.len())];
            let _ = write!(output, "\n# {} section\n", section);
            comments_added += 1;
        }

        output.push_str(&entry.pattern);
        if entry.has_owners() {
            let width = rng.random_range(1..=MAX_SEPARATOR_WIDTH);
            output.extend(std::iter::repeat_n(' ', width));
            output.push_str(&entry.owners.join(" "));
        }
        output.push('\n');
    }

    output
}

/// Generates a CODEOWNERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    render(&generate_entries(config), config)
}
