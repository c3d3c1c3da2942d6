//! Harness configuration.
//!
//! Defaults mirror a plain `goldcase test` invocation. A YAML file can
//! override any field, and CLI flags override the file.
//!
//! ```yaml
//! test_root: tests/suites
//! use_colors: false
//! parallel: true
//! filter: helper
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{err_msg, GoldcaseError};

/// Configuration for fixture discovery, execution, and reporting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub test_root: PathBuf,
    pub use_colors: bool,
    pub parallel: bool,
    /// Case-insensitive substring a fixture name must contain to run.
    pub filter: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_root: PathBuf::from("tests/suites"),
            use_colors: atty::is(atty::Stream::Stdout),
            parallel: false,
            filter: None,
        }
    }
}

impl HarnessConfig {
    /// Parses a configuration document. Missing fields take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, GoldcaseError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| err_msg!(Config, "{}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GoldcaseError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GoldcaseError::io(path, e))?;
        Self::from_yaml(&content)
    }

    /// The filter in the form the harness matches against.
    pub fn normalized_filter(&self) -> Option<String> {
        self.filter.as_ref().map(|f| f.to_lowercase())
    }

    fn validate(&self) -> Result<(), GoldcaseError> {
        if self.test_root.as_os_str().is_empty() {
            return Err(err_msg!(Config, "test_root must not be empty"));
        }
        if matches!(self.filter.as_deref(), Some(f) if f.trim().is_empty()) {
            return Err(err_msg!(Config, "filter must not be blank"));
        }
        Ok(())
    }
}
