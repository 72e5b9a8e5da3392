//! Schema-aware query execution wrapper
//!
//! Consumes a derived query schema to restrict what callers may do at the
//! execution boundary: a statement can only be bound with exactly the
//! parameters it declares, and only the fields it selects can be read off a
//! result row. Actual statement execution is delegated to a
//! [`DatabaseDriver`] implementation; this crate ships only a mock driver.

pub mod driver;
pub mod mock;
pub mod statement;

pub use driver::{DatabaseDriver, DriverError, DriverRow};
pub use mock::MockDriver;
pub use statement::{ExecError, PreparedQuery, ReadError, Row};
