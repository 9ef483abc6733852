//! Integration tests for the PostgreSQL type mapping
//!
//! These tests go through the public dialect surface the way an emitter would:
//! native type name -> scalar -> definitions/imports.

use schemagen_core::{Adapter, GeneratorDialect, NamedType, TypeNode, union_of};
use schemagen_postgres::{
    PostgresAdapterOptions, PostgresDialect, PostgresDialectOptions, postgres_adapter,
};
use schemagen_types::postgres::{DateParser, NumericParser, TimestampParser};

// =============================================================================
// Helper Functions
// =============================================================================

fn id(name: &'static str) -> TypeNode {
    TypeNode::identifier(name)
}

fn number_or_string() -> TypeNode {
    union_of![id("number"), id("string")].into()
}

fn date_or_string() -> TypeNode {
    union_of![id("Date"), id("string")].into()
}

fn adapter_with(options: PostgresAdapterOptions) -> Adapter {
    postgres_adapter(&options)
}

// =============================================================================
// Closure of every scalar
// =============================================================================

#[test]
fn test_every_scalar_resolves_to_known_names() {
    let adapter = adapter_with(PostgresAdapterOptions::default());

    for (native_type, node) in adapter.scalars() {
        let deps = adapter.dependencies(node);
        assert!(
            deps.unresolved.is_empty(),
            "{native_type} has unresolved names {:?}",
            deps.unresolved
        );
        for name in &deps.definitions {
            assert!(adapter.definition(name).is_some());
        }
    }
}

#[test]
fn test_unknown_native_type_uses_default_scalar() {
    let adapter = adapter_with(PostgresAdapterOptions::default());
    assert_eq!(adapter.resolve_scalar("citext"), &id("string"));
    assert_eq!(adapter.resolve_scalar("geometry"), adapter.default_scalar());
}

// =============================================================================
// Idempotence and option independence
// =============================================================================

#[test]
fn test_identical_options_build_equal_adapters() {
    let options = PostgresAdapterOptions::new()
        .numeric_parser(NumericParser::Number)
        .timestamp_parser(TimestampParser::String);

    assert_eq!(postgres_adapter(&options), postgres_adapter(&options));
    assert_eq!(
        PostgresDialect::default().adapter(),
        PostgresDialect::default().adapter()
    );
}

#[test]
fn test_numeric_parser_changes_only_numeric() {
    let baseline = adapter_with(PostgresAdapterOptions::default());
    let changed = adapter_with(PostgresAdapterOptions::new().numeric_parser(NumericParser::Number));

    assert_ne!(changed.definition("Numeric"), baseline.definition("Numeric"));
    assert_eq!(changed.definition("Timestamp"), baseline.definition("Timestamp"));
    assert_eq!(changed.scalar("date"), baseline.scalar("date"));
    assert_eq!(changed.scalars(), baseline.scalars());
}

#[test]
fn test_timestamp_parser_changes_only_timestamp() {
    let baseline = adapter_with(PostgresAdapterOptions::default());
    let changed =
        adapter_with(PostgresAdapterOptions::new().timestamp_parser(TimestampParser::String));

    assert_ne!(changed.definition("Timestamp"), baseline.definition("Timestamp"));
    assert_eq!(changed.definition("Numeric"), baseline.definition("Numeric"));
    assert_eq!(changed.scalars(), baseline.scalars());
}

#[test]
fn test_date_parser_changes_only_date_scalar() {
    let baseline = adapter_with(PostgresAdapterOptions::default());
    let changed = adapter_with(PostgresAdapterOptions::new().date_parser(DateParser::String));

    assert_ne!(changed.scalar("date"), baseline.scalar("date"));
    assert_eq!(changed.definitions(), baseline.definitions());
    for (native_type, node) in baseline.scalars() {
        if native_type != "date" {
            assert_eq!(changed.scalar(native_type), Some(node));
        }
    }
}

// =============================================================================
// Numeric
// =============================================================================

#[test]
fn test_numeric_default_reads_strings() {
    let adapter = adapter_with(PostgresAdapterOptions::default());
    let numeric = adapter.resolve(adapter.resolve_scalar("numeric"));

    assert_eq!(Some(numeric), adapter.definition("Numeric"));
    assert_eq!(numeric.select_type(), &id("string"));
    assert_eq!(numeric.insert_type(), &number_or_string());
    assert_eq!(numeric.update_type(), &number_or_string());
}

#[test]
fn test_numeric_parser_number() {
    let adapter = adapter_with(PostgresAdapterOptions::new().numeric_parser(NumericParser::Number));
    let numeric = adapter.resolve(adapter.resolve_scalar("numeric"));

    assert_eq!(numeric.select_type(), &id("number"));
    assert_eq!(numeric.insert_type(), &number_or_string());
    assert_eq!(numeric.update_type(), &number_or_string());
}

#[test]
fn test_numeric_parser_number_or_string_collapses() {
    let adapter = adapter_with(
        PostgresAdapterOptions::new().numeric_parser(NumericParser::NumberOrString),
    );
    let numeric = adapter.resolve(adapter.resolve_scalar("numeric"));

    assert_eq!(numeric.select_type(), &number_or_string());
    assert_eq!(numeric.insert_type(), numeric.select_type());
    assert_eq!(numeric.update_type(), numeric.insert_type());
}

// =============================================================================
// Dates and timestamps
// =============================================================================

#[test]
fn test_date_defaults_to_timestamp_definition() {
    let adapter = adapter_with(PostgresAdapterOptions::default());
    assert_eq!(adapter.scalar("date"), Some(&id("Timestamp")));

    let timestamp = adapter.resolve(adapter.resolve_scalar("date"));
    assert_eq!(timestamp.select_type(), &id("Date"));
    assert_eq!(timestamp.insert_type(), &date_or_string());
    assert_eq!(timestamp.update_type(), &date_or_string());
}

#[test]
fn test_date_parser_string() {
    let adapter = adapter_with(PostgresAdapterOptions::new().date_parser(DateParser::String));
    assert_eq!(adapter.scalar("date"), Some(&id("string")));
    assert_eq!(adapter.scalar("timestamp"), Some(&id("Timestamp")));
}

#[test]
fn test_timestamp_parser_string() {
    let adapter =
        adapter_with(PostgresAdapterOptions::new().timestamp_parser(TimestampParser::String));

    for native_type in ["timestamp", "timestamptz", "date"] {
        let timestamp = adapter.resolve(adapter.resolve_scalar(native_type));
        assert_eq!(timestamp.select_type(), &id("string"));
        assert_eq!(timestamp.insert_type(), &date_or_string());
    }
}

// =============================================================================
// JSON, structures and imports
// =============================================================================

#[test]
fn test_json_and_jsonb_share_definition() {
    let adapter = adapter_with(PostgresAdapterOptions::default());

    assert_eq!(adapter.scalar("json"), adapter.scalar("jsonb"));
    assert_eq!(adapter.scalar("json"), Some(&id("Json")));

    let value = adapter.resolve(adapter.resolve_scalar("jsonb"));
    let TypeNode::Union(union) = value else {
        panic!("JsonValue should be a union, got {value:?}");
    };
    let members: Vec<_> = union
        .members()
        .iter()
        .filter_map(TypeNode::as_identifier)
        .collect();
    assert_eq!(members, vec!["JsonArray", "JsonObject", "JsonPrimitive"]);

    let deps = adapter.dependencies(adapter.resolve_scalar("json"));
    assert!(deps.unresolved.is_empty());
    assert!(deps.imports.is_empty());
}

#[test]
fn test_geometric_objects() {
    let adapter = adapter_with(PostgresAdapterOptions::default());

    let TypeNode::Object(circle) = adapter.resolve(adapter.resolve_scalar("circle")) else {
        panic!("Circle should be an object");
    };
    let names: Vec<_> = circle.properties().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["x", "y", "radius"]);

    let TypeNode::Object(point) = adapter.resolve(adapter.resolve_scalar("point")) else {
        panic!("Point should be an object");
    };
    assert_eq!(point.get("y"), Some(&id("number")));
    assert_eq!(point.len(), 2);
}

#[test]
fn test_interval_requires_import() {
    let adapter = adapter_with(PostgresAdapterOptions::default());

    assert!(matches!(
        adapter.lookup("IPostgresInterval"),
        Some(NamedType::Import(module)) if module.specifier() == "postgres-interval"
    ));

    let deps = adapter.dependencies(adapter.resolve_scalar("interval"));
    assert_eq!(
        deps.imports.keys().copied().collect::<Vec<_>>(),
        vec!["IPostgresInterval"]
    );
}

#[test]
fn test_int8_accepts_bigint_on_write() {
    let adapter = adapter_with(PostgresAdapterOptions::default());
    let int8 = adapter.resolve(adapter.resolve_scalar("int8"));

    assert_eq!(int8.select_type(), &id("string"));
    assert_eq!(
        int8.insert_type(),
        &TypeNode::from(union_of![id("string"), id("number"), id("bigint")])
    );
}

// =============================================================================
// Dialect composition
// =============================================================================

#[test]
fn test_dialect_adapter_matches_standalone_adapter() {
    let dialect = PostgresDialect::new(
        PostgresDialectOptions::new()
            .numeric_parser(NumericParser::NumberOrString)
            .domains(true),
    );
    let standalone = adapter_with(
        PostgresAdapterOptions::new().numeric_parser(NumericParser::NumberOrString),
    );

    assert_eq!(dialect.adapter(), &standalone);
}
