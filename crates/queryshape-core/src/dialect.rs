//! Dialect configuration (queryshape.toml)
//!
//! The noise-keyword table and the parameter identifier character class are
//! immutable configuration passed into the derivation pipeline, so multiple
//! dialect variants can coexist in one process.

use serde::{Deserialize, Serialize};

/// Lexical dialect settings consumed by the derivation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Keywords that may legally follow SELECT but are not field names
    /// (result-size and caching hints, DISTINCT and friends)
    #[serde(default)]
    pub select_noise_keywords: Vec<String>,

    /// Characters allowed in a parameter identifier in addition to
    /// ASCII letters and digits
    #[serde(default = "default_parameter_extra_chars")]
    pub parameter_extra_chars: String,
}

fn default_parameter_extra_chars() -> String {
    "_[]".to_string()
}

impl Dialect {
    /// MySQL dialect: the modifiers MySQL accepts between SELECT and the
    /// field list
    pub fn mysql() -> Self {
        Self {
            select_noise_keywords: [
                "ALL",
                "DISTINCT",
                "DISTINCTROW",
                "HIGH_PRIORITY",
                "STRAIGHT_JOIN",
                "SQL_SMALL_RESULT",
                "SQL_BIG_RESULT",
                "SQL_BUFFER_RESULT",
                "SQL_NO_CACHE",
                "SQL_CALC_FOUND_ROWS",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            parameter_extra_chars: default_parameter_extra_chars(),
        }
    }

    /// Whether a character may appear in a parameter identifier
    pub fn is_parameter_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.parameter_extra_chars.contains(c)
    }

    /// Load a dialect from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, DialectError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| DialectError::IoError(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Load a dialect from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self, DialectError> {
        toml::from_str(toml).map_err(|e| DialectError::ParseError(e.to_string()))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::mysql()
    }
}

/// Dialect loading errors
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_keyword_table() {
        let dialect = Dialect::mysql();
        assert!(dialect
            .select_noise_keywords
            .contains(&"DISTINCT".to_string()));
        assert_eq!(dialect.select_noise_keywords.len(), 10);
    }

    #[test]
    fn parameter_char_class() {
        let dialect = Dialect::default();
        assert!(dialect.is_parameter_char('a'));
        assert!(dialect.is_parameter_char('Z'));
        assert!(dialect.is_parameter_char('7'));
        assert!(dialect.is_parameter_char('_'));
        assert!(dialect.is_parameter_char('['));
        assert!(dialect.is_parameter_char(']'));
        assert!(!dialect.is_parameter_char(','));
        assert!(!dialect.is_parameter_char(')'));
        assert!(!dialect.is_parameter_char(' '));
    }

    #[test]
    fn dialect_toml_roundtrip() {
        let dialect = Dialect::mysql();
        let toml = toml::to_string(&dialect).unwrap();
        let parsed = Dialect::from_toml(&toml).unwrap();
        assert_eq!(dialect, parsed);
    }

    #[test]
    fn dialect_toml_defaults() {
        let parsed = Dialect::from_toml("select_noise_keywords = [\"DISTINCT\"]").unwrap();
        assert_eq!(parsed.parameter_extra_chars, "_[]");
    }
}
