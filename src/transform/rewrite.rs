//! Word-level rewrite engine shared by the built-in transforms.
//!
//! Input is split on Unicode word boundaries. Each segment that exactly
//! matches a table entry is replaced; everything else (unmatched words,
//! whitespace, punctuation) is copied through, so the rewrite is total and
//! layout-preserving.

use unicode_segmentation::UnicodeSegmentation;

/// A static rewrite table: `(from, to)` pairs matched case-sensitively
/// against whole word segments.
pub type RewriteTable = &'static [(&'static str, &'static str)];

/// Applies `table` to every word segment of `input`.
pub fn rewrite_words(input: &str, table: RewriteTable) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split_word_bounds() {
        out.push_str(lookup(segment, table).unwrap_or(segment));
    }
    out
}

fn lookup(segment: &str, table: RewriteTable) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == segment)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: RewriteTable = &[("cat", "dog"), ("red", "blue")];

    #[test]
    fn test_rewrites_whole_words_only() {
        assert_eq!(rewrite_words("red cat", TABLE), "blue dog");
        assert_eq!(rewrite_words("concat", TABLE), "concat");
        assert_eq!(rewrite_words("cats", TABLE), "cats");
    }

    #[test]
    fn test_preserves_layout_and_punctuation() {
        assert_eq!(rewrite_words("  cat,\tred!\n", TABLE), "  dog,\tblue!\n");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(rewrite_words("Cat RED", TABLE), "Cat RED");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rewrite_words("", TABLE), "");
    }

    #[test]
    fn test_empty_table_is_identity() {
        assert_eq!(rewrite_words("héllo wörld", &[]), "héllo wörld");
    }
}
