use std::path::Path;

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

use crate::diagnostics::to_error_source;
use crate::transform::{HELPER_FUNCTION, SOME_FUNCTION};
use crate::GoldcaseError;

/// A single golden case: apply `transform` to `input`, expect `expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub name: String,
    pub transform: String,
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub only: bool,
}

impl Fixture {
    pub fn new(
        name: impl Into<String>,
        transform: impl Into<String>,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            transform: transform.into(),
            input: input.into(),
            expected: expected.into(),
            skip: false,
            only: false,
        }
    }
}

/// Parses a YAML list of fixtures. `origin` names the source in diagnostics.
pub fn parse_fixtures(origin: &str, content: &str) -> Result<Vec<Fixture>, GoldcaseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str::<Vec<Fixture>>(content).map_err(|e| {
        let span = e
            .location()
            .map(|loc| SourceSpan::from((loc.index().min(content.len().saturating_sub(1)), 1)));
        GoldcaseError::Fixture {
            message: e.to_string(),
            src: to_error_source(origin, content),
            span,
        }
    })
}

/// Reads and parses one fixture file.
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>, GoldcaseError> {
    let content = std::fs::read_to_string(path).map_err(|e| GoldcaseError::io(path, e))?;
    parse_fixtures(&path.display().to_string(), &content)
}

/// The two reference cases, available without any fixture files.
pub fn built_in_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new(
            "should return expected output from some_function",
            SOME_FUNCTION,
            "test input",
            "expected output",
        ),
        Fixture::new(
            "should correctly use helper_function",
            HELPER_FUNCTION,
            "helper input",
            "helper output",
        ),
    ]
}
