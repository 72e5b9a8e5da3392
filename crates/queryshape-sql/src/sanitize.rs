//! Statement text sanitizer
//!
//! Normalizes raw SQL text into a space-delimited token stream the
//! extractors can scan. Total over any input: sanitization never fails.

use crate::text::{collapse_spaces, replace_all, replace_between};

/// Sanitize raw SQL text.
///
/// Applied strictly in this order; later steps assume earlier noise is
/// already gone:
/// 1. block comments `/* .. */` become one space (non-nested, the nearest
///    `*/` closes the match)
/// 2. line comments `--` up to the next newline become one space (a
///    trailing newline is appended first so an end-of-text comment is
///    still bounded)
/// 3. newlines and tabs become spaces
/// 4. `(` and `)` get surrounding spaces so tokens never glue to a bracket
/// 5. space runs collapse to one, and one trailing space is appended as a
///    sentinel for downstream boundary matching
pub fn sanitize(text: &str) -> String {
    let no_block = replace_between(text, "/*", "*/", " ");

    let mut bounded = no_block;
    bounded.push('\n');
    let no_line = replace_between(&bounded, "--", "\n", " ");

    let no_ctrl: String = no_line
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();

    let padded = replace_all(&replace_all(&no_ctrl, "(", " ( "), ")", " ) ");

    let mut out = collapse_spaces(&padded);
    out.push(' ');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_block_comments() {
        assert_eq!(sanitize("SELECT x /* , y */ FROM t"), "SELECT x FROM t  ");
    }

    #[test]
    fn block_comment_is_non_nested() {
        // the nearest */ terminates the match even with an inner /*
        assert_eq!(sanitize("a /* x /* y */ b"), "a b  ");
    }

    #[test]
    fn strips_line_comments() {
        assert_eq!(sanitize("SELECT x -- comment\nFROM t"), "SELECT x FROM t  ");
        // comment at end of text is bounded by the implicit newline
        assert_eq!(sanitize("SELECT x FROM t -- tail"), "SELECT x FROM t  ");
    }

    #[test]
    fn replaces_control_characters() {
        assert_eq!(sanitize("a\nb\tc"), "a b c  ");
    }

    #[test]
    fn pads_parentheses() {
        assert_eq!(sanitize("f(x)"), "f ( x )  ");
    }

    #[test]
    fn collapses_spaces_and_appends_sentinel() {
        assert_eq!(sanitize("a     b"), "a b  ");
        assert!(sanitize("a").ends_with(' '));
    }

    #[test]
    fn total_over_any_input() {
        assert_eq!(sanitize(""), "  ");
        sanitize("/*");
        sanitize("--");
        sanitize("((((");
        sanitize(":");
    }
}
