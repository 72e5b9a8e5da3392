//! Mock database driver for testing
//!
//! Returns predefined rows without connecting to any database. Useful for
//! unit testing the schema-enforcement logic, and for demos without real
//! credentials. Also records every executed statement so tests can assert
//! on what reached the driver.

use crate::driver::{DatabaseDriver, DriverError, DriverRow};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Mock driver with canned rows and simulated failures
///
/// Cloning shares state, so a test can keep a handle for assertions while
/// the wrapper owns another.
pub struct MockDriver {
    /// Rows returned by every execute call
    rows: Arc<RwLock<Vec<DriverRow>>>,

    /// Statements and parameter maps seen by execute, in order
    executed: Arc<RwLock<Vec<(String, HashMap<String, Value>)>>>,

    /// Simulate connection failure
    fail_connection: bool,

    /// Simulate query failure with this message
    fail_query: Option<String>,
}

impl MockDriver {
    /// Create a mock driver that returns no rows
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            executed: Arc::new(RwLock::new(Vec::new())),
            fail_connection: false,
            fail_query: None,
        }
    }

    /// Create a mock driver with canned result rows
    pub fn with_rows(rows: Vec<DriverRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            executed: Arc::new(RwLock::new(Vec::new())),
            fail_connection: false,
            fail_query: None,
        }
    }

    /// Append a canned result row
    pub async fn push_row(&self, row: DriverRow) {
        self.rows.write().await.push(row);
    }

    /// Configure to fail all connection tests
    pub fn with_connection_failure(mut self) -> Self {
        self.fail_connection = true;
        self
    }

    /// Configure every execute call to fail with the given message
    pub fn with_query_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_query = Some(message.into());
        self
    }

    /// Statements executed so far, in order
    pub async fn executed_statements(&self) -> Vec<(String, HashMap<String, Value>)> {
        self.executed.read().await.clone()
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockDriver {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            executed: Arc::clone(&self.executed),
            fail_connection: self.fail_connection,
            fail_query: self.fail_query.clone(),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseDriver for MockDriver {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn execute(
        &self,
        sql: &str,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<DriverRow>, DriverError> {
        if let Some(message) = &self.fail_query {
            return Err(DriverError::QueryFailed(message.clone()));
        }
        self.executed
            .write()
            .await
            .push((sql.to_string(), params.clone()));
        Ok(self.rows.read().await.clone())
    }

    async fn test_connection(&self) -> Result<(), DriverError> {
        if self.fail_connection {
            Err(DriverError::ConnectionFailed(
                "simulated connection failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
