//! Reporting for harness runs: a coloured human report and a JSON document.

use std::io;

use difference::{Changeset, Difference};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::runner::{CaseOutcome, CaseReport};

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub unresolved: usize,
}

impl SuiteSummary {
    pub fn from_reports(reports: &[CaseReport]) -> Self {
        let mut summary = SuiteSummary {
            total: reports.len(),
            ..Default::default()
        };
        for r in reports {
            match r.outcome {
                CaseOutcome::Pass => summary.passed += 1,
                CaseOutcome::Fail { .. } => summary.failed += 1,
                CaseOutcome::Skipped { .. } => summary.skipped += 1,
                CaseOutcome::Unresolved { .. } => summary.unresolved += 1,
            }
        }
        summary
    }

    /// A run succeeds only when at least one case passed, nothing failed and
    /// every transform resolved.
    pub fn is_success(&self) -> bool {
        self.passed > 0 && self.failed == 0 && self.unresolved == 0
    }
}

/// Plain-text expected/actual block.
pub fn format_failure(expected: &str, actual: &str) -> String {
    format!(
        "Output did not match expected\n  Expected: {:?}\n  Actual:   {:?}",
        expected, actual
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cases: &'a [CaseReport],
    summary: SuiteSummary,
}

pub fn render_json(reports: &[CaseReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        cases: reports,
        summary: SuiteSummary::from_reports(reports),
    })
}

/// Writes the human report for `reports` to `out`.
pub fn write_reports<W: WriteColor>(out: &mut W, reports: &[CaseReport]) -> io::Result<()> {
    for r in reports {
        match &r.outcome {
            CaseOutcome::Pass => {
                tag(out, "PASS", Color::Green)?;
                writeln!(out, ": {} [{}]", r.name, r.file)?;
            }
            CaseOutcome::Fail { actual, expected } => {
                tag(out, "FAIL", Color::Red)?;
                writeln!(out, ": {} [{}] ({})", r.name, r.file, r.transform)?;
                for line in format_failure(expected, actual).lines() {
                    writeln!(out, "  {}", line)?;
                }
                writeln!(out, "  Diff:")?;
                write_diff(out, expected, actual)?;
            }
            CaseOutcome::Skipped { reason } => {
                tag(out, "SKIP", Color::Yellow)?;
                writeln!(out, ": {} [{}] ({})", r.name, r.file, reason)?;
            }
            CaseOutcome::Unresolved { message, .. } => {
                tag(out, "UNRESOLVED", Color::Magenta)?;
                writeln!(out, ": {} [{}]", r.name, r.file)?;
                writeln!(out, "  {}", message)?;
            }
        }
    }

    let s = SuiteSummary::from_reports(reports);
    writeln!(out)?;
    write!(out, "Test summary: total {}, ", s.total)?;
    tag(out, "passed", Color::Green)?;
    write!(out, " {}, ", s.passed)?;
    tag(out, "failed", Color::Red)?;
    write!(out, " {}, ", s.failed)?;
    tag(out, "skipped", Color::Yellow)?;
    write!(out, " {}, ", s.skipped)?;
    tag(out, "unresolved", Color::Magenta)?;
    writeln!(out, " {}", s.unresolved)?;
    Ok(())
}

/// Prints the human report to stdout.
pub fn print_reports(reports: &[CaseReport], use_colors: bool) -> io::Result<()> {
    let choice = if use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_reports(&mut stdout, reports)
}

fn tag<W: WriteColor>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

// Character-level diff: `-` marks text only in expected, `+` only in actual.
fn write_diff<W: WriteColor>(out: &mut W, expected: &str, actual: &str) -> io::Result<()> {
    let changeset = Changeset::new(expected, actual, "");
    write!(out, "    ")?;
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => {
                out.reset()?;
                write!(out, "{}", x)?;
            }
            Difference::Rem(x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "[-{}-]", x)?;
            }
            Difference::Add(x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{{+{}+}}", x)?;
            }
        }
    }
    out.reset()?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn case(name: &str, outcome: CaseOutcome) -> CaseReport {
        CaseReport {
            file: "inline".to_string(),
            name: name.to_string(),
            transform: "some_function".to_string(),
            outcome,
        }
    }

    fn sample() -> Vec<CaseReport> {
        vec![
            case("ok", CaseOutcome::Pass),
            case(
                "bad",
                CaseOutcome::Fail {
                    actual: "expected output".to_string(),
                    expected: "expected outputs".to_string(),
                },
            ),
            case(
                "later",
                CaseOutcome::Skipped {
                    reason: "Marked 'skip'".to_string(),
                },
            ),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let summary = SuiteSummary::from_reports(&sample());
        assert_eq!(
            summary,
            SuiteSummary {
                total: 3,
                passed: 1,
                failed: 1,
                skipped: 1,
                unresolved: 0,
            }
        );
        assert!(!summary.is_success());
    }

    #[test]
    fn test_unresolved_is_not_success() {
        let reports = vec![case(
            "ghost",
            CaseOutcome::Unresolved {
                transform: "x".to_string(),
                message: "Unknown transform 'x'".to_string(),
            },
        )];
        assert!(!SuiteSummary::from_reports(&reports).is_success());
    }

    #[test]
    fn test_skipped_only_is_not_success() {
        let reports = vec![case(
            "later",
            CaseOutcome::Skipped {
                reason: "Marked 'skip'".to_string(),
            },
        )];
        assert!(!SuiteSummary::from_reports(&reports).is_success());
    }

    #[test]
    fn test_empty_run_is_not_success() {
        let summary = SuiteSummary::from_reports(&[]);
        assert_eq!(summary.total, 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_passes_with_skips_is_success() {
        let mut reports = sample();
        reports.remove(1);
        assert!(SuiteSummary::from_reports(&reports).is_success());
    }

    #[test]
    fn test_human_report_shows_diff() {
        let mut out = NoColor::new(Vec::new());
        write_reports(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("PASS: ok [inline]"));
        assert!(text.contains("FAIL: bad [inline] (some_function)"));
        assert!(text.contains("Expected: \"expected outputs\""));
        assert!(text.contains("Actual:   \"expected output\""));
        assert!(text.contains("[-s-]"));
        assert!(text.contains("SKIP: later [inline] (Marked 'skip')"));
        assert!(text.contains("Test summary: total 3, passed 1, failed 1, skipped 1, unresolved 0"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["cases"][0]["status"], "pass");
        assert_eq!(value["cases"][1]["status"], "fail");
        assert_eq!(value["cases"][1]["actual"], "expected output");
    }
}
