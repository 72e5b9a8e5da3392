//! SQL text analysis
//!
//! This crate derives a query schema (output field names + required named
//! parameters) from the raw text of a SQL statement, without parsing SQL
//! and without a database connection. It handles:
//! - Stripping comments, control characters, and bracket glue (sanitizer)
//! - Eliminating parenthesized subqueries from the field list
//! - Filtering SELECT noise keywords (DISTINCT and friends)
//! - Resolving aliased and qualified field names
//! - Collecting `:name` placeholder identifiers

pub mod derive;
pub mod fields;
pub mod keywords;
pub mod params;
pub mod sanitize;
pub mod subquery;

mod text;

pub use derive::{Derivation, MalformedQuery, QueryAnalyzer};
pub use fields::extract_fields;
pub use keywords::strip_keywords;
pub use params::extract_parameters;
pub use sanitize::sanitize;
pub use subquery::strip_subqueries;
