//! Query schema types

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Placeholder value type for a derived output field
///
/// Schema derivation is purely lexical: it knows which fields a statement
/// produces but nothing about their SQL column types. Type inference from a
/// database catalog happens (if at all) in a different layer, so every field
/// is typed `Any` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Unknown/any - the only type this layer can assign
    Any,
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Any
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "ANY"),
        }
    }
}

/// The schema derived from one SQL statement's text
///
/// `fields` has mapping semantics: duplicate output names collapse to one
/// entry and order is not significant. `parameters` is the deduplicated set
/// of named placeholders the statement requires at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySchema {
    /// Effective output field names of the SELECT clause
    pub fields: BTreeMap<String, FieldType>,

    /// Named parameters the statement requires
    pub parameters: BTreeSet<String>,
}

impl QuerySchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            parameters: BTreeSet::new(),
        }
    }

    /// Add an output field (duplicates collapse)
    pub fn add_field(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into(), FieldType::Any);
    }

    /// Add a required parameter (duplicates collapse)
    pub fn add_parameter(&mut self, name: impl Into<String>) {
        self.parameters.insert(name.into());
    }

    /// Check whether a field name exists in the schema
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Check whether a parameter name is required by the schema
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    /// Field names in deterministic order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|k| k.as_str()).collect()
    }

    /// Parameter names in deterministic order
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|k| k.as_str()).collect()
    }
}

impl Default for QuerySchema {
    fn default() -> Self {
        Self::new()
    }
}
