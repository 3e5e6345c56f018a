use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use asciifold_core::{check, Adjudicator, Decision, MapTable, NormalizeOptions, Normalizer};

mod culprits;
mod prompt;
mod report;
mod store;

#[derive(Parser)]
#[command(name = "asciifold")]
#[command(about = "Fold obfuscated Unicode text to canonical ASCII", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run text through the normalization pipeline
    Normalize {
        /// Text to normalize; reads stdin when omitted
        text: Option<String>,

        /// Keep non-ASCII leftovers in the output
        #[arg(long)]
        keep_leftovers: bool,

        /// Bypass the curated-table stage
        #[arg(long)]
        skip_map: bool,
    },

    /// Check the curated map for entries the pipeline already handles
    Check {
        /// Curated map JSON; defaults to the built-in table
        #[arg(long)]
        map: Option<PathBuf>,

        /// Override ledger file with prior conflict decisions
        #[arg(long, default_value = "map_overrides.json")]
        ledger: PathBuf,

        /// Where to write the cleaned table; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Where to write the human-readable report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Never prompt; leave genuine conflicts undecided
        #[arg(long)]
        no_prompt: bool,
    },

    /// Feed cases through the pipeline and report non-ASCII leftovers
    Culprits {
        /// File with one case per line; reads stdin when omitted
        cases: Option<PathBuf>,

        /// Where to write the log; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Normalize {
            text,
            keep_leftovers,
            skip_map,
        } => run_normalize(text, keep_leftovers, skip_map),
        Commands::Check {
            map,
            ledger,
            output,
            report,
            no_prompt,
        } => run_check(map, &ledger, output, report, no_prompt),
        Commands::Culprits { cases, output } => {
            culprits::run(cases.as_deref(), output.as_deref())
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default));
    builder.target(env_logger::Target::Stderr).init();
}

fn run_normalize(text: Option<String>, keep_leftovers: bool, skip_map: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let normalizer = Normalizer::new();
    let options = NormalizeOptions::default()
        .skip_hardcoded_mapping(skip_map)
        .remove_leftovers(!keep_leftovers);
    println!("{}", normalizer.normalize(&text, options));
    Ok(())
}

fn run_check(
    map: Option<PathBuf>,
    ledger_path: &Path,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
    no_prompt: bool,
) -> Result<()> {
    let table = match map {
        Some(path) => store::load_table(&path)?,
        None => MapTable::builtin(),
    };
    let ledger = store::load_ledger(ledger_path);

    let mut undecided = prompt::Undecided;
    let mut interactive = prompt::PromptAdjudicator;
    let adjudicator: &mut dyn Adjudicator = if no_prompt {
        &mut undecided
    } else {
        &mut interactive
    };

    let outcome = check(table, &ledger, adjudicator);
    log::info!(
        "check finished: {} units kept, {} conflicts, {} warnings",
        outcome.table.len(),
        outcome.conflicts.len(),
        outcome.warnings.len()
    );

    if let Some(path) = report_path {
        store::write_atomic(&path, &report::render(&outcome)?)?;
        log::info!("report written to {}", path.display());
    }

    match output {
        Some(path) => {
            store::save_table(&path, &outcome.table)?;
            log::info!("cleaned table written to {}", path.display());
        }
        None => println!("{}", outcome.table.to_json()?),
    }

    // New decisions are persisted only on explicit confirmation; an
    // interrupted run leaves the ledger exactly as it was loaded.
    if outcome.prompted && !no_prompt && prompt::confirm_save() {
        let mut ledger = ledger;
        for conflict in &outcome.conflicts {
            if conflict.decision == Some(Decision::Map) {
                ledger.record(conflict.source.clone(), conflict.result_by_map.clone());
            }
        }
        store::save_ledger(ledger_path, &ledger)?;
        log::info!("override ledger written to {}", ledger_path.display());
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}
