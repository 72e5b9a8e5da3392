//! Database driver trait
//!
//! The execution wrapper delegates statement execution and row
//! materialization to a driver. Drivers know nothing about derived schemas;
//! enforcement happens in the wrapper before and after the driver call.

use serde_json::Value;
use std::collections::HashMap;

/// One row as a driver returns it: column name to value
pub type DriverRow = HashMap<String, Value>;

/// Errors a driver can surface
#[derive(Debug, Clone, thiserror::Error)]
pub enum DriverError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Trait for database drivers that can execute a prepared statement
#[async_trait::async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Get the driver name (e.g. "MySQL", "Mock")
    fn name(&self) -> &'static str;

    /// Execute a statement with the given named parameters and return the
    /// result rows
    async fn execute(
        &self,
        sql: &str,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<DriverRow>, DriverError>;

    /// Test the connection to the database
    ///
    /// Useful for validating configuration before executing statements.
    async fn test_connection(&self) -> Result<(), DriverError>;
}
