//! SELECT noise-keyword filter
//!
//! Removes modifier keywords that may legally follow SELECT but are not
//! field names, so they cannot be mis-parsed as output columns.

use crate::text::replace_all;
use queryshape_core::Dialect;

/// Remove every space-padded whole-word occurrence of the dialect's noise
/// keywords.
///
/// Matching checks the fully-uppercased and fully-lowercased spelling of
/// each keyword only. Mixed-case input such as `Distinct` is not matched;
/// that gap is part of the documented contract, not something to fold away.
pub fn strip_keywords(text: &str, dialect: &Dialect) -> String {
    let mut out = text.to_string();
    for keyword in &dialect.select_noise_keywords {
        let upper = format!(" {} ", keyword.to_ascii_uppercase());
        let lower = format!(" {} ", keyword.to_ascii_lowercase());
        out = replace_all(&out, &upper, " ");
        out = replace_all(&out, &lower, " ");
    }
    out
}
