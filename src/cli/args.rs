//! Command-line arguments for the goldcase CLI (`clap` derive).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "goldcase",
    version,
    about = "Deterministic text transforms and their golden-fixture harness."
)]
pub struct GoldcaseArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply a registered transform to an input and print the result.
    Apply {
        /// Transform name, e.g. `some_function`.
        transform: String,
        /// Input text. May be empty.
        input: String,
    },
    /// List registered transforms.
    List,
    /// Discover and run fixture suites.
    Test {
        /// Directory containing YAML fixture files.
        path: Option<PathBuf>,
        /// Only run fixtures whose name contains this substring.
        #[arg(short, long)]
        filter: Option<String>,
        /// Emit a JSON report instead of the human one.
        #[arg(long)]
        json: bool,
        /// Run cases on a thread pool.
        #[arg(long)]
        parallel: bool,
        /// Run the built-in reference fixtures instead of discovering files.
        #[arg(long, conflicts_with = "path")]
        builtin: bool,
        /// YAML configuration file.
        #[arg(long, env = "GOLDCASE_CONFIG")]
        config: Option<PathBuf>,
        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
    },
}
