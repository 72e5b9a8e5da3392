//! Field extraction
//!
//! Isolates the SELECT..FROM span and resolves each comma-separated entry
//! to its effective output name (alias or bare column). Input is expected
//! to have been sanitized, subquery-stripped, and keyword-filtered.

use crate::text::{find_word_ci, rfind_ci};
use queryshape_core::{Diagnostic, DiagnosticCode, Position, Severity};
use std::collections::BTreeSet;

/// Extract the set of effective output field names.
///
/// The span runs from the first case-insensitive space-delimited `SELECT`
/// word to the first `FROM` word after it. No `SELECT`, or no `FROM` after
/// it, degrades to an empty set. An entry that resolves to an empty name is
/// reported as a diagnostic and not admitted into the set.
pub fn extract_fields(text: &str) -> (BTreeSet<String>, Vec<Diagnostic>) {
    let mut fields = BTreeSet::new();
    let mut diagnostics = Vec::new();

    let Some((_, select_end)) = find_word_ci(text, "SELECT", 0) else {
        return (fields, diagnostics);
    };
    let Some((from_start, _)) = find_word_ci(text, "FROM", select_end) else {
        return (fields, diagnostics);
    };

    let span = &text[select_end..from_start];
    for (index, piece) in span.split(',').enumerate() {
        let name = resolve_field_name(piece);
        if name.is_empty() {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::EmptyFieldName,
                    Severity::Error,
                    format!("SELECT-list entry {index} resolved to an empty name"),
                )
                .with_position(Position::FieldEntry { index }),
            );
        } else {
            fields.insert(name);
        }
    }

    (fields, diagnostics)
}

/// Resolve one SELECT-list entry to its effective output name.
///
/// Everything after the last case-insensitive ` AS ` token wins; otherwise
/// the suffix after the last `.` or space (so `table.column` yields
/// `column` and `expr alias` yields `alias`). Residual spaces and single
/// quotes are trimmed off the result.
fn resolve_field_name(piece: &str) -> String {
    let trimmed = piece.trim_matches(' ');
    let name = match rfind_ci(trimmed, " as ") {
        Some(pos) => &trimmed[pos + 4..],
        None => match trimmed.rfind(['.', ' ']) {
            Some(cut) => &trimmed[cut + 1..],
            None => trimmed,
        },
    };
    name.trim_matches([' ', '\'']).to_string()
}
