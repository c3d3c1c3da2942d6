//! Unified, `miette`-based diagnostics for goldcase.
//!
//! Every failure that can escape a library call is a [`GoldcaseError`]. A
//! fixture whose output differs from its expectation is *not* an error: that
//! is reported as [`crate::harness::CaseOutcome::Fail`] and never crosses the
//! harness boundary.
//!
//! Construct message-only errors with [`err_msg!`](crate::err_msg).

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// Type-safe error classification, used by the CLI and by tests instead of
/// matching on rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A transform name could not be resolved in the registry.
    Setup,
    /// A fixture file could not be parsed.
    Fixture,
    /// Filesystem failure.
    Io,
    /// Invalid harness configuration.
    Config,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Setup => "Setup",
            ErrorType::Fixture => "Fixture",
            ErrorType::Io => "Io",
            ErrorType::Config => "Config",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum GoldcaseError {
    #[error("Unknown transform '{name}'")]
    #[diagnostic(code(goldcase::setup::unknown_transform))]
    UnknownTransform {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid fixture file: {message}")]
    #[diagnostic(code(goldcase::fixture))]
    Fixture {
        message: String,
        #[source_code]
        src: SourceArc,
        #[label("{message}")]
        span: Option<SourceSpan>,
    },

    #[error("Failed to read '{}'", path.display())]
    #[diagnostic(code(goldcase::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(goldcase::config))]
    Config { message: String },
}

impl GoldcaseError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            GoldcaseError::UnknownTransform { .. } => ErrorType::Setup,
            GoldcaseError::Fixture { .. } => ErrorType::Fixture,
            GoldcaseError::Io { .. } => ErrorType::Io,
            GoldcaseError::Config { .. } => ErrorType::Config,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GoldcaseError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Wraps file contents into a shared `NamedSource` for labelled diagnostics.
pub fn to_error_source(name: impl AsRef<str>, content: impl Into<String>) -> SourceArc {
    Arc::new(NamedSource::new(name.as_ref(), content.into()))
}

/// Constructs a message-only `GoldcaseError` variant.
///
/// Only variants with a single `message` field are accepted:
/// `err_msg!(Config, "bad value {}", v)`.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $msg:expr, $($arg:expr),+ $(,)?) => {
        $crate::GoldcaseError::$variant {
            message: format!($msg, $($arg),+),
        }
    };
    ($variant:ident, $msg:expr) => {
        $crate::GoldcaseError::$variant {
            message: format!("{}", $msg),
        }
    };
}
