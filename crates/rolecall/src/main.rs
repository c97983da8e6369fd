//! Inspect, validate, and compose role-play experiment definitions.
//!
//! # Examples
//!
//! ```sh
//! # Summarize a definition file
//! rolecall show experiment.json
//!
//! # List the placeholders available to content authors
//! rolecall placeholders experiment.json
//!
//! # Build the experiment and confirm every prompt composes
//! rolecall validate experiment.json
//!
//! # Compose the prompts for the configured counts
//! rolecall compose experiment.json
//!
//! # Compose one role at fixed counts, plus the summarizer
//! rolecall compose experiment.json --role guard --counts guard=2,prisoner=1 --summarizer
//! ```

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use rolecall::prelude::*;
use tracing_subscriber::EnvFilter;

/// Inspect, validate, and compose role-play experiment definitions.
#[derive(Parser)]
#[command(name = "rolecall", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of an experiment definition
    Show { definition: PathBuf },
    /// List the placeholders available to content authors
    Placeholders { definition: PathBuf },
    /// Build the experiment and report whether every prompt composes
    Validate { definition: PathBuf },
    /// Compose system prompts for one or every agent-count combination
    Compose {
        definition: PathBuf,

        /// Compose only this role's prompt
        #[arg(long)]
        role: Option<String>,

        /// Also compose the summarizer prompt
        #[arg(long)]
        summarizer: bool,

        /// Override agent counts, e.g. `guard=2,prisoner=1`
        #[arg(long)]
        counts: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show { definition } => show(&definition),
        Command::Placeholders { definition } => placeholders(&definition),
        Command::Validate { definition } => validate(&definition),
        Command::Compose {
            definition,
            role,
            summarizer,
            counts,
        } => compose(&definition, role.as_deref(), summarizer, counts.as_deref()),
    }
}

fn load_and_build(path: &Path) -> Result<(ExperimentConfig, Experiment)> {
    let config = ExperimentConfig::load(path)?;
    let experiment = config.build(&EnglishLexicon)?;
    Ok((config, experiment))
}

fn show(path: &Path) -> Result<()> {
    let (config, experiment) = load_and_build(path)?;
    println!("Starting message: {}", experiment.starting_message);
    if !experiment.note.is_empty() {
        println!("Note: {}", experiment.note);
    }
    if !experiment.creator.is_empty() {
        println!("Creator: {}", experiment.creator);
    }
    for role in experiment.roles.values() {
        println!("\nRole: {}", role.name);
        for section in role.sorted_sections() {
            print!("  {}", indent(&section.to_string()));
        }
    }
    if !experiment.shared_sections.is_empty() {
        println!("\nShared sections:");
        for section in sorted(&experiment.shared_sections) {
            print!("  {}", indent(&section.to_string()));
        }
    }
    if !experiment.summarizer_sections.is_empty() {
        println!("\nSummarizer sections:");
        for section in sorted(&experiment.summarizer_sections) {
            print!("  {}", indent(&section.to_string()));
        }
    }
    if !config.counts.is_empty() {
        let maxima = config.maxima()?;
        let pairs: Vec<String> = maxima
            .iter()
            .map(|(role, count)| format!("{role}={count}"))
            .collect();
        println!("\nAgent counts: {}", pairs.join(", "));
    }
    Ok(())
}

fn placeholders(path: &Path) -> Result<()> {
    let (_, experiment) = load_and_build(path)?;
    for role in experiment.roles.values() {
        println!("Placeholders [{}]:", role.name);
        for placeholder in role.placeholders.values() {
            println!("- {}", placeholder.preview(&EnglishPluralizer));
        }
    }
    println!("Placeholders [shared]:");
    for placeholder in experiment.placeholders.values() {
        println!("- {}", placeholder.preview(&EnglishPluralizer));
    }
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let (config, experiment) = load_and_build(path)?;
    // Building already validates content; also prove every combination
    // composes for every role.
    for combination in combinations(&config.maxima()?, config.try_each_combination) {
        for role in experiment.roles.keys() {
            experiment.compose_role_prompt(role, &combination, &EnglishPluralizer)?;
        }
        if !experiment.summarizer_sections.is_empty() {
            experiment.compose_summarizer_prompt(&combination, &EnglishPluralizer)?;
        }
    }
    println!("ok: every prompt composes");
    Ok(())
}

fn compose(
    path: &Path,
    role_filter: Option<&str>,
    summarizer: bool,
    counts_override: Option<&str>,
) -> Result<()> {
    let (config, experiment) = load_and_build(path)?;
    let (maxima, sweep) = match counts_override {
        Some(raw) => (parse_counts(raw)?, false),
        None => (config.maxima()?, config.try_each_combination),
    };

    for combination in combinations(&maxima, sweep) {
        let label: Vec<String> = combination
            .iter()
            .map(|(role, count)| {
                if count.is_singular() {
                    format!("one {role}")
                } else {
                    format!("{} {}", count.as_word(), EnglishPluralizer.plural(role))
                }
            })
            .collect();
        println!("=== combination: {} ===", label.join(", "));
        for role in experiment.roles.keys() {
            if role_filter.is_some_and(|wanted| !wanted.eq_ignore_ascii_case(role)) {
                continue;
            }
            println!("--- {role} ---");
            println!(
                "{}",
                experiment.compose_role_prompt(role, &combination, &EnglishPluralizer)?
            );
        }
        if summarizer {
            println!("--- summarizer ---");
            println!(
                "{}",
                experiment.compose_summarizer_prompt(&combination, &EnglishPluralizer)?
            );
        }
    }
    Ok(())
}

/// Parse a `role=count,role=count` override.
fn parse_counts(raw: &str) -> Result<Vec<(String, AgentCount)>> {
    let mut counts = Vec::new();
    for pair in raw.split(',') {
        let (role, count) = pair.split_once('=').ok_or_else(|| {
            Error::Definition(format!("expected `role=count`, found `{pair}`"))
        })?;
        let parsed: u32 = count
            .trim()
            .parse()
            .map_err(|_| Error::Definition(format!("`{count}` is not a number")))?;
        counts.push((role.trim().to_lowercase(), AgentCount::new(parsed)?));
    }
    Ok(counts)
}

fn sorted(map: &std::collections::BTreeMap<String, Section>) -> Vec<&Section> {
    let mut sections: Vec<&Section> = map.values().collect();
    sections.sort();
    sections
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n  ")
}
