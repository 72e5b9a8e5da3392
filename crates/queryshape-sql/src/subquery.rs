//! Subquery elimination
//!
//! Removes parenthesized sub-expressions from sanitized text so nested
//! SELECTs do not leak their own fields into the outer field list. Applied
//! only on the field-derivation path: named parameters inside subqueries
//! must still be collected, so parameter extraction runs on the unstripped
//! text.

use crate::text::replace_between;

/// Replace each `( .. )` span (parentheses included) with a single space.
///
/// Leftmost/first-close semantics, same as comment stripping: a group whose
/// first `)` is not its true close (i.e. a group containing its own nested
/// parentheses) is under-stripped, leaving a stray `)` behind. Known
/// structural limitation; callers must not rely on balanced matching.
pub fn strip_subqueries(text: &str) -> String {
    replace_between(text, "(", ")", " ")
}
