//! Named-parameter extraction
//!
//! Scans sanitized text (before subquery elimination, so placeholders
//! inside subqueries are still captured) for `:identifier` tokens.

use queryshape_core::{Diagnostic, DiagnosticCode, Dialect, Position, Severity};
use std::collections::BTreeSet;

/// Collect the set of distinct named-parameter identifiers.
///
/// Every `:` starts a run that ends at the next space; the sanitizer's
/// trailing sentinel space guarantees the run is bounded. Characters outside
/// the dialect's identifier class (trailing commas, closing parens) are
/// dropped from the run. A run with no identifier characters left is
/// reported as a diagnostic.
pub fn extract_parameters(text: &str, dialect: &Dialect) -> (BTreeSet<String>, Vec<Diagnostic>) {
    let mut parameters = BTreeSet::new();
    let mut diagnostics = Vec::new();

    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b':' {
            i += 1;
            continue;
        }
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end] != b' ' {
            end += 1;
        }
        let cleaned: String = text[start..end]
            .chars()
            .filter(|&c| dialect.is_parameter_char(c))
            .collect();
        if cleaned.is_empty() {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::EmptyParameterName,
                    Severity::Error,
                    format!("parameter placeholder at offset {i} has an empty identifier"),
                )
                .with_position(Position::ParameterOffset { offset: i }),
            );
        } else {
            parameters.insert(cleaned);
        }
        i = end;
    }

    (parameters, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;
    use pretty_assertions::assert_eq;

    fn params(sql: &str) -> Vec<String> {
        let (set, diagnostics) = extract_parameters(&sanitize(sql), &Dialect::default());
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
        set.into_iter().collect()
    }

    #[test]
    fn captures_simple_placeholder() {
        assert_eq!(params("SELECT x FROM t WHERE a = :p"), vec!["p"]);
    }

    #[test]
    fn trailing_punctuation_is_dropped() {
        // the comma glues to the run; only identifier characters survive
        assert_eq!(
            params("SELECT x FROM t WHERE a IN ( :p, :q )"),
            vec!["p", "q"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(params("SELECT x FROM t WHERE a = :p OR b = :p"), vec!["p"]);
    }

    #[test]
    fn captured_inside_subqueries() {
        assert_eq!(
            params("SELECT x FROM t WHERE id = (SELECT id FROM u WHERE name = :n)"),
            vec!["n"]
        );
    }

    #[test]
    fn bracketed_identifiers_allowed() {
        assert_eq!(
            params("SELECT x FROM t WHERE a = :ids[0]"),
            vec!["ids[0]"]
        );
    }

    #[test]
    fn no_placeholders_yields_empty_set() {
        assert!(params("SELECT x FROM t").is_empty());
    }

    #[test]
    fn empty_identifier_is_reported() {
        let (set, diagnostics) = extract_parameters(&sanitize("SELECT x FROM t WHERE a = :"), &Dialect::default());
        assert!(set.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::EmptyParameterName);
    }
}
