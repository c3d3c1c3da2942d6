//! # Base Transform
//!
//! - **`some_function`**: rewrites `test` to `expected` and `input` to
//!   `output`, word by word.

use super::rewrite::{rewrite_words, RewriteTable};

const SOME_FUNCTION_TABLE: RewriteTable = &[("test", "expected"), ("input", "output")];

/// Maps `input` to its rewritten form.
///
/// Usage: `some_function("test input")` returns `"expected output"`.
///
/// Total and pure: any text, including the empty string, is accepted, and
/// the same input always yields the same output.
pub fn some_function(input: &str) -> String {
    rewrite_words(input, SOME_FUNCTION_TABLE)
}
