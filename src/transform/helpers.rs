//! # Helper Transform
//!
//! - **`helper_function`**: rewrites `input` to `output`. Independent of
//!   [`some_function`](super::base::some_function); the two share only the
//!   rewrite engine.

use super::rewrite::{rewrite_words, RewriteTable};

const HELPER_FUNCTION_TABLE: RewriteTable = &[("input", "output")];

/// Usage: `helper_function("helper input")` returns `"helper output"`.
pub fn helper_function(input: &str) -> String {
    rewrite_words(input, HELPER_FUNCTION_TABLE)
}
