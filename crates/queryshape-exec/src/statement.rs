//! Prepared statements and schema-enforced rows
//!
//! A `PreparedQuery` derives its schema once at construction and enforces
//! it on both sides of the driver call: the bound parameter map must match
//! the derived parameter set exactly, and result rows only expose the
//! derived field set.

use crate::driver::{DatabaseDriver, DriverError, DriverRow};
use queryshape_core::QuerySchema;
use queryshape_sql::{MalformedQuery, QueryAnalyzer};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Execution wrapper errors
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Derivation reported malformed statement text
    #[error(transparent)]
    Malformed(#[from] MalformedQuery),

    /// A required parameter was not bound
    #[error("parameter `{0}` is required but was not bound")]
    MissingParameter(String),

    /// A bound parameter is not declared by the statement
    #[error("parameter `{0}` is not declared by the statement")]
    UnexpectedParameter(String),

    /// The driver failed
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// find_one on a statement that returned no rows
    #[error("statement returned no rows")]
    NoRows,
}

/// Reading a field off a result row failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The field is not part of the statement's derived schema
    #[error("field `{0}` is not part of the query schema")]
    UnknownField(String),
}

/// A statement with a derived schema, bound to a driver
pub struct PreparedQuery<D> {
    sql: String,
    schema: Arc<QuerySchema>,
    driver: D,
}

impl<D: DatabaseDriver> PreparedQuery<D> {
    /// Prepare a statement: derive its schema and refuse malformed text.
    ///
    /// Fails fast so a statement with an empty field or parameter name can
    /// never reach the driver.
    pub fn new(
        sql: impl Into<String>,
        analyzer: &QueryAnalyzer,
        driver: D,
    ) -> Result<Self, ExecError> {
        let sql = sql.into();
        let schema = analyzer.derive(&sql).into_schema()?;
        tracing::debug!(
            fields = schema.fields.len(),
            parameters = schema.parameters.len(),
            "prepared statement"
        );
        Ok(Self {
            sql,
            schema: Arc::new(schema),
            driver,
        })
    }

    /// The statement text as prepared
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The derived schema
    pub fn schema(&self) -> &QuerySchema {
        &self.schema
    }

    /// Execute and return all result rows
    pub async fn find(&self, params: &HashMap<String, Value>) -> Result<Vec<Row>, ExecError> {
        self.check_binding(params)?;
        let rows = self.driver.execute(&self.sql, params).await?;
        Ok(rows
            .into_iter()
            .map(|values| Row::new(Arc::clone(&self.schema), values))
            .collect())
    }

    /// Execute and return the first result row
    pub async fn find_one(&self, params: &HashMap<String, Value>) -> Result<Row, ExecError> {
        self.find(params)
            .await?
            .into_iter()
            .next()
            .ok_or(ExecError::NoRows)
    }

    /// The bound key set must equal the derived parameter set exactly.
    fn check_binding(&self, params: &HashMap<String, Value>) -> Result<(), ExecError> {
        for name in self.schema.parameter_names() {
            if !params.contains_key(name) {
                return Err(ExecError::MissingParameter(name.to_string()));
            }
        }
        for key in params.keys() {
            if !self.schema.has_parameter(key) {
                return Err(ExecError::UnexpectedParameter(key.clone()));
            }
        }
        Ok(())
    }
}

static NULL: Value = Value::Null;

/// One result row, readable only through the derived field set
///
/// Extra columns a driver happens to return are invisible; fields the
/// driver omitted read as null.
#[derive(Debug, Clone)]
pub struct Row {
    schema: Arc<QuerySchema>,
    values: DriverRow,
}

impl Row {
    fn new(schema: Arc<QuerySchema>, values: DriverRow) -> Self {
        Self { schema, values }
    }

    /// Read a field by its derived name
    pub fn get(&self, field: &str) -> Result<&Value, ReadError> {
        if !self.schema.has_field(field) {
            return Err(ReadError::UnknownField(field.to_string()));
        }
        Ok(self.values.get(field).unwrap_or(&NULL))
    }

    /// The readable field names of this row
    pub fn field_names(&self) -> Vec<&str> {
        self.schema.field_names()
    }
}
