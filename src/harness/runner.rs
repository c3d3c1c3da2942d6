//! Case execution.
//!
//! Each case moves Pending → Executed → {Pass, Fail}, or straight from
//! Pending to Skipped or Unresolved. A case is terminal after a single
//! comparison and never affects its siblings.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::discovery::LoadedFixture;
use super::fixture::Fixture;
use crate::transform::{TransformFn, TransformRegistry};
use crate::GoldcaseError;

/// Verdict for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Pass,
    /// Output differed from the expectation. Carries both for diffing.
    Fail { actual: String, expected: String },
    Skipped { reason: String },
    /// The named transform is not registered: a setup fault, not a mismatch.
    Unresolved { transform: String, message: String },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub file: String,
    pub name: String,
    pub transform: String,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

/// Calls `transform` once with `input` and compares with exact equality.
pub fn run_case(transform: TransformFn, input: &str, expected: &str) -> CaseOutcome {
    let actual = transform(input);
    if actual == expected {
        CaseOutcome::Pass
    } else {
        CaseOutcome::Fail {
            actual,
            expected: expected.to_string(),
        }
    }
}

/// Resolves the fixture's transform and runs it.
pub fn run_fixture(registry: &TransformRegistry, file: &str, fixture: &Fixture) -> CaseReport {
    let outcome = match registry.resolve(&fixture.transform) {
        Ok(func) => run_case(func, &fixture.input, &fixture.expected),
        Err(err) => unresolved(&fixture.transform, err),
    };
    match &outcome {
        CaseOutcome::Pass => debug!(case = %fixture.name, "pass"),
        CaseOutcome::Fail { .. } => debug!(case = %fixture.name, "fail"),
        CaseOutcome::Unresolved { .. } => {
            warn!(case = %fixture.name, transform = %fixture.transform, "unresolved transform")
        }
        CaseOutcome::Skipped { .. } => {}
    }
    report(file, fixture, outcome)
}

fn unresolved(transform: &str, err: GoldcaseError) -> CaseOutcome {
    let message = match &err {
        GoldcaseError::UnknownTransform { help: Some(help), .. } => format!("{err} ({help})"),
        _ => err.to_string(),
    };
    CaseOutcome::Unresolved {
        transform: transform.to_string(),
        message,
    }
}

fn report(file: &str, fixture: &Fixture, outcome: CaseOutcome) -> CaseReport {
    CaseReport {
        file: file.to_string(),
        name: fixture.name.clone(),
        transform: fixture.transform.clone(),
        outcome,
    }
}

/// Why a fixture is not run, if it is not.
///
/// `filter` is matched case-insensitively against the fixture name.
pub fn skip_reason(fixture: &Fixture, has_only: bool, filter: Option<&str>) -> Option<String> {
    if has_only && !fixture.only {
        return Some("Not marked 'only' in 'only' mode".to_string());
    }
    if fixture.skip {
        return Some("Marked 'skip'".to_string());
    }
    if let Some(f) = filter {
        if !fixture.name.to_lowercase().contains(&f.to_lowercase()) {
            return Some(format!("Filtered out by substring: {}", f));
        }
    }
    None
}

fn select(cases: &[LoadedFixture], filter: Option<&str>) -> Vec<(usize, Option<String>)> {
    let has_only = cases.iter().any(|c| c.fixture.only);
    cases
        .iter()
        .enumerate()
        .map(|(i, c)| (i, skip_reason(&c.fixture, has_only, filter)))
        .collect()
}

fn execute(
    registry: &TransformRegistry,
    case: &LoadedFixture,
    skip: Option<String>,
) -> CaseReport {
    match skip {
        Some(reason) => report(&case.file, &case.fixture, CaseOutcome::Skipped { reason }),
        None => run_fixture(registry, &case.file, &case.fixture),
    }
}

/// Runs every case in order. One case's failure never stops the rest.
pub fn run_fixtures(
    registry: &TransformRegistry,
    cases: &[LoadedFixture],
    filter: Option<&str>,
) -> Vec<CaseReport> {
    select(cases, filter)
        .into_iter()
        .map(|(i, skip)| execute(registry, &cases[i], skip))
        .collect()
}

/// Same contract as [`run_fixtures`], executed on the rayon pool. Reports
/// come back in input order.
pub fn run_fixtures_parallel(
    registry: &TransformRegistry,
    cases: &[LoadedFixture],
    filter: Option<&str>,
) -> Vec<CaseReport> {
    select(cases, filter)
        .into_par_iter()
        .map(|(i, skip)| execute(registry, &cases[i], skip))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::discovery::in_memory;
    use crate::harness::fixture::built_in_fixtures;
    use crate::transform::{build_default_registry, helper_function, some_function};

    #[test]
    fn test_scenarios_pass() {
        assert_eq!(
            run_case(some_function, "test input", "expected output"),
            CaseOutcome::Pass
        );
        assert_eq!(
            run_case(helper_function, "helper input", "helper output"),
            CaseOutcome::Pass
        );
    }

    #[test]
    fn test_one_character_off_fails() {
        let outcome = run_case(some_function, "test input", "expected output.");
        assert_eq!(
            outcome,
            CaseOutcome::Fail {
                actual: "expected output".to_string(),
                expected: "expected output.".to_string(),
            }
        );
    }

    #[test]
    fn test_no_trimming() {
        assert!(!run_case(helper_function, "helper input", "helper output ").is_pass());
    }

    #[test]
    fn test_unknown_transform_is_unresolved() {
        let registry = build_default_registry();
        let fixture = Fixture::new("ghost", "nonexistent", "a", "a");
        let report = run_fixture(&registry, "inline", &fixture);
        match report.outcome {
            CaseOutcome::Unresolved { transform, message } => {
                assert_eq!(transform, "nonexistent");
                assert!(message.contains("Unknown transform"));
            }
            other => panic!("expected Unresolved, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_does_not_stop_siblings() {
        let registry = build_default_registry();
        let mut fixtures = vec![Fixture::new("bad", "some_function", "test input", "nope")];
        fixtures.extend(built_in_fixtures());
        let reports = run_fixtures(&registry, &in_memory("inline", fixtures), None);
        assert_eq!(reports.len(), 3);
        assert!(!reports[0].outcome.is_pass());
        assert!(reports[1].outcome.is_pass());
        assert!(reports[2].outcome.is_pass());
    }

    #[test]
    fn test_only_and_skip_selection() {
        let registry = build_default_registry();
        let mut fixtures = built_in_fixtures();
        fixtures[1].only = true;
        let reports = run_fixtures(&registry, &in_memory("inline", fixtures.clone()), None);
        assert!(matches!(reports[0].outcome, CaseOutcome::Skipped { .. }));
        assert!(reports[1].outcome.is_pass());

        fixtures[1].only = false;
        fixtures[0].skip = true;
        let reports = run_fixtures(&registry, &in_memory("inline", fixtures), None);
        assert_eq!(
            reports[0].outcome,
            CaseOutcome::Skipped {
                reason: "Marked 'skip'".to_string()
            }
        );
    }

    #[test]
    fn test_filter_is_substring_match() {
        let registry = build_default_registry();
        let cases = in_memory("inline", built_in_fixtures());
        let reports = run_fixtures(&registry, &cases, Some("helper"));
        assert!(matches!(reports[0].outcome, CaseOutcome::Skipped { .. }));
        assert!(reports[1].outcome.is_pass());
    }

    #[test]
    fn test_filter_ignores_case() {
        let registry = build_default_registry();
        let cases = in_memory("inline", built_in_fixtures());
        let reports = run_fixtures(&registry, &cases, Some("Helper"));
        assert!(matches!(reports[0].outcome, CaseOutcome::Skipped { .. }));
        assert!(reports[1].outcome.is_pass());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let registry = build_default_registry();
        let mut fixtures = built_in_fixtures();
        fixtures.push(Fixture::new("mismatch", "helper_function", "x", "y"));
        fixtures.push(Fixture::new("unknown", "missing", "x", "x"));
        let cases = in_memory("inline", fixtures);
        assert_eq!(
            run_fixtures(&registry, &cases, None),
            run_fixtures_parallel(&registry, &cases, None)
        );
    }
}
