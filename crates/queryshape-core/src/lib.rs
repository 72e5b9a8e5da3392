//! QueryShape Core
//!
//! Core domain model with stable, versioned types.
//! Never rename diagnostic codes - they are part of the public API.

pub mod diagnostic;
pub mod dialect;
pub mod schema;

pub use diagnostic::{Diagnostic, DiagnosticCode, Position, Severity};
pub use dialect::{Dialect, DialectError};
pub use schema::{FieldType, QuerySchema};
