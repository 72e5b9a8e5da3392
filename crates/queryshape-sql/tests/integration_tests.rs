//! Integration tests for schema derivation

use pretty_assertions::assert_eq;
use queryshape_core::DiagnosticCode;
use queryshape_sql::QueryAnalyzer;

const RUNNING_EXAMPLE: &str = r#"
  SELECT DISTINCT
    p.name,
    p.age AS nenrei,
    (SELECT 1 AS dummy FROM DUAL) count
  FROM
    person as p
  WHERE
    country_id = (SELECT country_id FROM country WHERE name = :country_name)
    AND age > :age
"#;

#[test]
fn running_example_fields_and_parameters() {
    let analyzer = QueryAnalyzer::new();
    let derivation = analyzer.derive(RUNNING_EXAMPLE);

    assert!(derivation.is_clean());
    assert_eq!(
        derivation.schema.field_names(),
        vec!["count", "name", "nenrei"]
    );
    assert_eq!(
        derivation.schema.parameter_names(),
        vec!["age", "country_name"]
    );

    // neither the table column behind an alias nor a subquery's own field
    // may appear
    assert!(!derivation.schema.has_field("age"));
    assert!(!derivation.schema.has_field("dummy"));
}

#[test]
fn derivation_is_idempotent() {
    let analyzer = QueryAnalyzer::new();
    let first = analyzer.derive(RUNNING_EXAMPLE);
    let second = analyzer.derive(RUNNING_EXAMPLE);
    assert_eq!(first, second);
}

#[test]
fn comments_are_excluded() {
    let analyzer = QueryAnalyzer::new();
    let derivation = analyzer.derive("SELECT x /* , y */ FROM t");
    assert_eq!(derivation.schema.field_names(), vec!["x"]);

    let derivation = analyzer.derive("SELECT x -- , y\nFROM t");
    assert_eq!(derivation.schema.field_names(), vec!["x"]);
}

#[test]
fn alias_resolution() {
    let analyzer = QueryAnalyzer::new();
    let fields = |sql: &str| analyzer.derive(sql).schema.field_names().join(",");

    assert_eq!(fields("SELECT a.b AS c FROM t"), "c");
    assert_eq!(fields("SELECT a.b FROM t"), "b");
    assert_eq!(fields("SELECT a FROM t"), "a");
}

#[test]
fn parameter_deduplication() {
    let analyzer = QueryAnalyzer::new();
    let derivation = analyzer.derive("SELECT x FROM t WHERE a = :p OR b = :p");
    assert_eq!(derivation.schema.parameter_names(), vec!["p"]);
}

#[test]
fn trailing_comma_is_malformed() {
    let analyzer = QueryAnalyzer::new();
    let derivation = analyzer.derive("SELECT x, FROM t");

    assert_eq!(derivation.schema.field_names(), vec!["x"]);
    assert_eq!(derivation.diagnostics.len(), 1);
    assert_eq!(
        derivation.diagnostics[0].code,
        DiagnosticCode::EmptyFieldName
    );
}

#[test]
fn statements_without_from_degrade_to_empty() {
    let analyzer = QueryAnalyzer::new();
    for sql in ["", "SELECT", "SELECT x", "WHERE a = 1", "/* only */"] {
        let derivation = analyzer.derive(sql);
        assert!(derivation.schema.fields.is_empty(), "input: {sql:?}");
    }
}

#[test]
fn one_failed_derivation_does_not_affect_another() {
    let analyzer = QueryAnalyzer::new();
    let bad = analyzer.derive("SELECT x, FROM t");
    assert!(!bad.is_clean());

    let good = analyzer.derive("SELECT x FROM t");
    assert!(good.is_clean());
    assert_eq!(good.schema.field_names(), vec!["x"]);
}
