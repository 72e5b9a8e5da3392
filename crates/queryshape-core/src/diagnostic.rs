//! Diagnostic codes and malformed-input reporting
//!
//! IMPORTANT: Diagnostic codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Diagnostic code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// A SELECT-list entry resolved to an empty output name
    /// (e.g. a trailing comma produced an empty piece)
    EmptyFieldName,

    /// A `:` placeholder token had no identifier characters left
    /// after filtering to the allowed class
    EmptyParameterName,
}

impl DiagnosticCode {
    /// Get the diagnostic code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyFieldName => "EMPTY_FIELD_NAME",
            Self::EmptyParameterName => "EMPTY_PARAMETER_NAME",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// Warning - should be reviewed but not blocking
    Warn,

    /// Error - the offending name was not admitted into the schema
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where in the statement a diagnostic points
///
/// Positions are best-effort and refer to the sanitized text, not the raw
/// input, since derivation runs after sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Position {
    /// Zero-based ordinal of a comma-separated SELECT-list entry
    FieldEntry { index: usize },

    /// Byte offset of a `:` placeholder in the sanitized text
    ParameterOffset { offset: usize },
}

/// A diagnostic message with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code
    pub code: DiagnosticCode,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Offending position (best-effort)
    pub position: Option<Position>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal fields
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            position: None,
        }
    }

    /// Set the position
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_code_stability() {
        assert_eq!(DiagnosticCode::EmptyFieldName.as_str(), "EMPTY_FIELD_NAME");
        assert_eq!(
            DiagnosticCode::EmptyParameterName.as_str(),
            "EMPTY_PARAMETER_NAME"
        );
    }

    #[test]
    fn diagnostic_serialization() {
        let diag = Diagnostic::new(
            DiagnosticCode::EmptyFieldName,
            Severity::Error,
            "SELECT-list entry 2 resolved to an empty name",
        )
        .with_position(Position::FieldEntry { index: 2 });

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("EMPTY_FIELD_NAME"));
        assert!(json.contains("error"));
        assert!(json.contains("field_entry"));
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }
}
