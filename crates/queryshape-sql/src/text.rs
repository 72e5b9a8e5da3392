//! Low-level text scans shared by the pipeline stages
//!
//! Everything here is an explicit index-cursor loop with leftmost-match
//! semantics. No regex, no backtracking: each scan advances monotonically
//! through the input.

/// Replace every occurrence of `needle` with `replacement` in one
/// left-to-right pass.
///
/// The replacement text is never rescanned, so a replacement that contains
/// the needle (bracket padding does) cannot loop.
pub(crate) fn replace_all(text: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(needle) {
        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.push_str(rest);
    out
}

/// Replace every span bracketed by `prefix`..`suffix` (inclusive) with
/// `replacement`.
///
/// Leftmost/first-close semantics: take the first `prefix`, then the first
/// `suffix` after it, splice, and continue from the replacement point. This
/// is deliberately not a balanced-bracket matcher; a nested occurrence of
/// the same prefix inside a span is consumed by the outer match, and a
/// prefix with no following suffix is left untouched along with the rest of
/// the text.
pub(crate) fn replace_between(
    text: &str,
    prefix: &str,
    suffix: &str,
    replacement: &str,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(prefix) else {
            out.push_str(rest);
            break;
        };
        let after_prefix = &rest[start + prefix.len()..];
        let Some(end) = after_prefix.find(suffix) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(replacement);
        rest = &after_prefix[end + suffix.len()..];
    }
    out
}

/// Collapse every run of consecutive spaces into a single space.
pub(crate) fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

/// Find the next space-delimited word equal to `word` (ASCII
/// case-insensitive), scanning from byte offset `from`.
///
/// Returns the word's byte range. Assumes space-normalized text, which is
/// what the sanitizer produces.
pub(crate) fn find_word_ci(text: &str, word: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        while i < bytes.len() && bytes[i] == b' ' {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i] != b' ' {
            i += 1;
        }
        if start < i && text[start..i].eq_ignore_ascii_case(word) {
            return Some((start, i));
        }
    }
    None
}

/// Find the last occurrence of `needle` (ASCII case-insensitive).
pub(crate) fn rfind_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len())
        .rev()
        .find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}
