//! Schema derivation
//!
//! Ties the pipeline stages together: one call takes raw statement text and
//! produces the query schema plus any malformed-input diagnostics.

use crate::fields::extract_fields;
use crate::keywords::strip_keywords;
use crate::params::extract_parameters;
use crate::sanitize::sanitize;
use crate::subquery::strip_subqueries;
use queryshape_core::{Diagnostic, Dialect, QuerySchema};
use serde::Serialize;

/// Derives query schemas for a fixed dialect
///
/// Stateless apart from the dialect tables; one analyzer can serve any
/// number of derivations, and derivations for independent statements never
/// affect each other.
#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    dialect: Dialect,
}

impl QueryAnalyzer {
    /// Create an analyzer with the default (MySQL) dialect
    pub fn new() -> Self {
        Self {
            dialect: Dialect::default(),
        }
    }

    /// Create an analyzer with a specific dialect
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this analyzer derives against
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Derive the query schema from raw statement text.
    ///
    /// Total over any input: absence of matches degrades to empty result
    /// sets, and malformed entries surface as diagnostics rather than
    /// panics or errors.
    pub fn derive(&self, sql: &str) -> Derivation {
        let sanitized = sanitize(sql);

        // fields see subquery-stripped, keyword-filtered text; parameters
        // must see the unstripped text so placeholders inside subqueries
        // are still captured
        let field_text = strip_keywords(&strip_subqueries(&sanitized), &self.dialect);
        let (fields, mut diagnostics) = extract_fields(&field_text);
        let (parameters, param_diagnostics) = extract_parameters(&sanitized, &self.dialect);
        diagnostics.extend(param_diagnostics);

        let mut schema = QuerySchema::new();
        for field in fields {
            schema.add_field(field);
        }
        for parameter in parameters {
            schema.add_parameter(parameter);
        }

        tracing::debug!(
            fields = schema.fields.len(),
            parameters = schema.parameters.len(),
            diagnostics = diagnostics.len(),
            "derived query schema"
        );

        Derivation {
            schema,
            diagnostics,
        }
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of one derivation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    /// The derived schema (malformed entries excluded)
    pub schema: QuerySchema,

    /// Malformed-input conditions found along the way
    pub diagnostics: Vec<Diagnostic>,
}

impl Derivation {
    /// Whether derivation produced no error diagnostics
    pub fn is_clean(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Take the schema, refusing malformed input.
    ///
    /// Callers that must not silently drop malformed entries (the
    /// query-execution wrapper does this at statement preparation) use this
    /// instead of reading `schema` directly.
    pub fn into_schema(self) -> Result<QuerySchema, MalformedQuery> {
        if self.is_clean() {
            Ok(self.schema)
        } else {
            Err(MalformedQuery {
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Statement text produced error diagnostics during derivation
#[derive(Debug, Clone, thiserror::Error)]
#[error("statement is malformed: {} diagnostic(s)", .diagnostics.len())]
pub struct MalformedQuery {
    /// The diagnostics that made the derivation unusable
    pub diagnostics: Vec<Diagnostic>,
}
