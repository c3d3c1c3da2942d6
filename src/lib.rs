pub use crate::diagnostics::{ErrorType, GoldcaseError};

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod harness;
pub mod logging;
pub mod transform;

pub use crate::transform::{helper_function, some_function};
