//! Golden-fixture harness.
//!
//! Binds a transform name to fixed `(input, expected)` pairs and reports a
//! verdict per case. Transforms are injected through a
//! [`TransformRegistry`](crate::transform::TransformRegistry), so the harness
//! runs against any conforming implementation.
//!
//! # Fixture Format
//!
//! ```yaml
//! - name: "should return expected output from some_function"
//!   transform: some_function
//!   input: "test input"
//!   expected: "expected output"
//!   skip: false   # optional
//!   only: false   # optional
//! ```
//!
//! # Example
//!
//! ```rust
//! use goldcase::harness::{run_suite, built_in_fixtures, in_memory};
//! use goldcase::transform::build_default_registry;
//!
//! let registry = build_default_registry();
//! let cases = in_memory("built-in", built_in_fixtures());
//! let (reports, summary) = run_suite(&registry, &cases, None, false);
//! assert_eq!(reports.len(), 2);
//! assert!(summary.is_success());
//! ```

pub mod discovery;
pub mod fixture;
pub mod report;
pub mod runner;

pub use discovery::{discover_fixture_files, in_memory, load_suite, LoadedFixture};
pub use fixture::{built_in_fixtures, load_fixtures, parse_fixtures, Fixture};
pub use report::{render_json, SuiteSummary};
pub use runner::{
    run_case, run_fixture, run_fixtures, run_fixtures_parallel, CaseOutcome, CaseReport,
};

use crate::transform::TransformRegistry;

/// Runs `cases` and summarises the verdicts.
pub fn run_suite(
    registry: &TransformRegistry,
    cases: &[LoadedFixture],
    filter: Option<&str>,
    parallel: bool,
) -> (Vec<CaseReport>, SuiteSummary) {
    let reports = if parallel {
        run_fixtures_parallel(registry, cases, filter)
    } else {
        run_fixtures(registry, cases, filter)
    };
    let summary = SuiteSummary::from_reports(&reports);
    tracing::info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        unresolved = summary.unresolved,
        "suite finished"
    );
    (reports, summary)
}
