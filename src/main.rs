//! CLI entry point for sheaf

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sheaf::{MatchMode, RunConfig, RunSummary, Selection, print_summary, print_summary_json};

#[derive(Parser, Debug)]
#[command(name = "sheaf")]
#[command(about = "Bundle a tree of text files into one annotated document")]
#[command(version)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Concatenate files and directory trees, skipping excluded and binary files
    Concat {
        /// Files and directories to aggregate, in order
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Skip files and directories matching a glob (can be used multiple times)
        #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Concatenate files under a directory whose content contains the given terms
    Find {
        /// Directory to search
        dir: PathBuf,

        /// Literal, case-sensitive term a file must contain (can be used multiple times)
        #[arg(short = 't', long = "term", value_name = "TERM", required = true)]
        terms: Vec<String>,

        /// Keep files containing any of the terms instead of all of them
        #[arg(long = "any")]
        any: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file (overwritten)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,

    /// Print the run summary as JSON
    #[arg(long = "summary-json")]
    summary_json: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            // Skip reasons and directory banners are part of normal output
            0 => tracing_subscriber::EnvFilter::new("info"),
            1 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Translate the chosen subcommand into a run configuration.
fn build_config(command: Command) -> (RunConfig, bool) {
    match command {
        Command::Concat {
            paths,
            exclude,
            output,
        } => (
            RunConfig {
                sources: paths,
                output: output.output,
                selection: Selection::Exclude { patterns: exclude },
            },
            output.summary_json,
        ),
        Command::Find {
            dir,
            terms,
            any,
            output,
        } => {
            let mode = if any { MatchMode::Any } else { MatchMode::All };
            (
                RunConfig::matching(dir, terms, output.output).with_match_mode(mode),
                output.summary_json,
            )
        }
    }
}

fn execute(config: &RunConfig, summary_json: bool) -> anyhow::Result<()> {
    let summary: RunSummary = sheaf::run(config)
        .with_context(|| format!("aggregation into '{}' failed", config.output.display()))?;

    if summary_json {
        print_summary_json(&summary).context("failed to print summary")?;
    } else {
        print_summary(&summary).context("failed to print summary")?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let (config, summary_json) = build_config(cli.command);
    if let Err(e) = execute(&config, summary_json) {
        eprintln!("sheaf: {:#}", e);
        process::exit(1);
    }
}
