//! The goldcase command-line interface.
//!
//! Dispatches subcommands to the library. Library errors are rendered as
//! `miette` reports on stderr; the exit status is non-zero when a command
//! fails or any fixture does not pass.

pub mod args;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, GoldcaseArgs};
use crate::config::HarnessConfig;
use crate::harness::{self, report, LoadedFixture};
use crate::transform::{build_default_registry, TransformRegistry};
use crate::{logging, GoldcaseError};

/// Options for `goldcase test` after CLI parsing.
#[derive(Debug, Default)]
pub struct TestOptions {
    pub path: Option<PathBuf>,
    pub filter: Option<String>,
    pub json: bool,
    pub parallel: bool,
    pub builtin: bool,
    pub config: Option<PathBuf>,
    pub no_color: bool,
}

/// The main entry point for the CLI.
pub fn run() {
    let args = GoldcaseArgs::parse();
    logging::init(args.verbose);
    let registry = build_default_registry();

    let result = match args.command {
        Command::Apply { transform, input } => apply(&registry, &transform, &input),
        Command::List => {
            for name in registry.list() {
                println!("{}", name);
            }
            Ok(true)
        }
        Command::Test {
            path,
            filter,
            json,
            parallel,
            builtin,
            config,
            no_color,
        } => run_tests(
            &registry,
            TestOptions {
                path,
                filter,
                json,
                parallel,
                builtin,
                config,
                no_color,
            },
        ),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}

fn apply(registry: &TransformRegistry, transform: &str, input: &str) -> Result<bool, GoldcaseError> {
    let output = registry.apply(transform, input)?;
    println!("{}", output);
    Ok(true)
}

/// Builds the effective configuration: defaults, then the config file,
/// then CLI flags.
pub fn resolve_config(opts: &TestOptions) -> Result<HarnessConfig, GoldcaseError> {
    let mut config = match &opts.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(path) = &opts.path {
        config.test_root = path.clone();
    }
    if opts.filter.is_some() {
        config.filter = opts.filter.clone();
    }
    if opts.parallel {
        config.parallel = true;
    }
    if opts.no_color || opts.json {
        config.use_colors = false;
    }
    Ok(config)
}

/// Runs the fixture suite. Returns `Ok(false)` when any case failed or was
/// unresolved, or when no case passed.
pub fn run_tests(registry: &TransformRegistry, opts: TestOptions) -> Result<bool, GoldcaseError> {
    let config = resolve_config(&opts)?;
    let cases: Vec<LoadedFixture> = if opts.builtin {
        harness::in_memory("built-in", harness::built_in_fixtures())
    } else {
        harness::load_suite(&config.test_root)?
    };
    if !opts.json {
        println!("Found {} fixtures", cases.len());
    }

    let filter = config.normalized_filter();
    let (reports, summary) =
        harness::run_suite(registry, &cases, filter.as_deref(), config.parallel);

    if opts.json {
        let json = report::render_json(&reports)
            .map_err(|e| GoldcaseError::io("<stdout>", e.into()))?;
        println!("{}", json);
    } else if let Err(e) = report::print_reports(&reports, config.use_colors) {
        tracing::warn!(error = %e, "failed to write report");
    }
    Ok(summary.is_success())
}
