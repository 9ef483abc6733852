//! PostgreSQL type mappings
//!
//! The scalar table follows what the `pg` driver hands back: anything without
//! a registered type parser arrives as a string, and any value can be sent as
//! a string. Entries were found through experimentation in Adminer and in the
//! `pg` source; they are policy, not something the catalog can tell us.

use schemagen_core::{Adapter, AdapterBuilder, ColumnType, ObjectExpression, TypeNode, union_of};
use schemagen_types::Dialect;
use schemagen_types::postgres::{DateParser, NumericParser, TimestampParser};

pub const CIRCLE: &str = "Circle";
pub const INT8: &str = "Int8";
pub const INTERVAL: &str = "Interval";
pub const NUMERIC: &str = "Numeric";
pub const POINT: &str = "Point";
pub const TIMESTAMP: &str = "Timestamp";
pub const POSTGRES_INTERVAL: &str = "IPostgresInterval";

/// Parser-behavior options that change the type mapping
///
/// Unset options keep the driver's default behavior. Each option picks
/// exactly one alternative shape for the entry it controls, and the options
/// never touch the same entry, so the order they are applied in is irrelevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PostgresAdapterOptions {
    /// Controls `scalars["date"]`
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub date_parser: Option<DateParser>,
    /// Controls `definitions["Numeric"]`
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub numeric_parser: Option<NumericParser>,
    /// Controls `definitions["Timestamp"]`
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub timestamp_parser: Option<TimestampParser>,
}

impl PostgresAdapterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn date_parser(mut self, parser: DateParser) -> Self {
        self.date_parser = Some(parser);
        self
    }

    #[must_use]
    pub fn numeric_parser(mut self, parser: NumericParser) -> Self {
        self.numeric_parser = Some(parser);
        self
    }

    #[must_use]
    pub fn timestamp_parser(mut self, parser: TimestampParser) -> Self {
        self.timestamp_parser = Some(parser);
        self
    }
}

/// Build the PostgreSQL adapter for `options`
///
/// Starts from the default registry and rewrites only the entries whose option
/// selects a non-default representation. Every call returns independent
/// registries.
#[must_use]
pub fn postgres_adapter(options: &PostgresAdapterOptions) -> Adapter {
    let mut builder = default_registry();

    if let Some(parser) = options.date_parser.filter(|p| !p.is_default()) {
        schemagen_core::schemagen_trace_override!("scalars.date", parser);
        builder = builder.scalar("date", date_scalar(parser));
    }

    if let Some(parser) = options.numeric_parser.filter(|p| !p.is_default()) {
        schemagen_core::schemagen_trace_override!("definitions.Numeric", parser);
        builder = builder.definition(NUMERIC, numeric_definition(parser));
    }

    if let Some(parser) = options.timestamp_parser.filter(|p| !p.is_default()) {
        schemagen_core::schemagen_trace_override!("definitions.Timestamp", parser);
        builder = builder.definition(TIMESTAMP, timestamp_definition(parser));
    }

    builder.build()
}

/// Registry for a driver with no parser options configured
fn default_registry() -> AdapterBuilder {
    Adapter::builder(Dialect::PostgreSQL)
        .default_scalar(TypeNode::identifier("string"))
        .default_schemas(["public"])
        .definition(
            CIRCLE,
            ObjectExpression::new()
                .with_property("x", TypeNode::identifier("number"))
                .with_property("y", TypeNode::identifier("number"))
                .with_property("radius", TypeNode::identifier("number")),
        )
        .definition(
            INT8,
            ColumnType::read_write(
                TypeNode::identifier("string"),
                union_of![
                    TypeNode::identifier("string"),
                    TypeNode::identifier("number"),
                    TypeNode::identifier("bigint"),
                ],
            ),
        )
        .definition(
            INTERVAL,
            ColumnType::read_write(
                TypeNode::identifier(POSTGRES_INTERVAL),
                union_of![
                    TypeNode::identifier(POSTGRES_INTERVAL),
                    TypeNode::identifier("number"),
                    TypeNode::identifier("string"),
                ],
            ),
        )
        .json_definitions()
        .definition(NUMERIC, numeric_definition(NumericParser::default()))
        .definition(
            POINT,
            ObjectExpression::new()
                .with_property("x", TypeNode::identifier("number"))
                .with_property("y", TypeNode::identifier("number")),
        )
        .definition(TIMESTAMP, timestamp_definition(TimestampParser::default()))
        .import(POSTGRES_INTERVAL, "postgres-interval")
        .scalars_as(
            &[
                "bit",
                // "character" in Adminer
                "bpchar",
                "box",
                "cidr",
                "inet",
                "line",
                "lseg",
                "macaddr",
                "money",
                "path",
                "polygon",
                "text",
                "time",
                "tsquery",
                "tsvector",
                "txid_snapshot",
                "uuid",
                // "bit varying" in Adminer
                "varbit",
                // "character varying" in Adminer
                "varchar",
                "xml",
            ],
            "string",
        )
        // float4/float8 are "real"/"double precision" in Adminer; the int and
        // oid parsers come from the `pg` source.
        .scalars_as(&["float4", "float8", "int2", "int4", "oid"], "number")
        .scalar("bool", TypeNode::identifier("boolean"))
        .scalar("bytea", TypeNode::identifier("Buffer"))
        .scalar("circle", TypeNode::identifier(CIRCLE))
        .scalar("date", date_scalar(DateParser::default()))
        // "bigint" in Adminer
        .scalar("int8", TypeNode::identifier(INT8))
        .scalar("interval", TypeNode::identifier(INTERVAL))
        .scalars_as(&["json", "jsonb"], "Json")
        .scalar("numeric", TypeNode::identifier(NUMERIC))
        .scalar("point", TypeNode::identifier(POINT))
        .scalars_as(&["timestamp", "timestamptz"], TIMESTAMP)
}

fn date_scalar(parser: DateParser) -> TypeNode {
    match parser {
        DateParser::Timestamp => TypeNode::identifier(TIMESTAMP),
        DateParser::String => TypeNode::identifier("string"),
    }
}

fn numeric_definition(parser: NumericParser) -> ColumnType {
    let write = union_of![TypeNode::identifier("number"), TypeNode::identifier("string")];
    match parser {
        NumericParser::String => ColumnType::read_write(TypeNode::identifier("string"), write),
        NumericParser::Number => ColumnType::read_write(TypeNode::identifier("number"), write),
        NumericParser::NumberOrString => ColumnType::select_only(write),
    }
}

fn timestamp_definition(parser: TimestampParser) -> ColumnType {
    let write = union_of![TypeNode::identifier("Date"), TypeNode::identifier("string")];
    match parser {
        TimestampParser::Timestamp => ColumnType::read_write(TypeNode::identifier("Date"), write),
        TimestampParser::String => ColumnType::read_write(TypeNode::identifier("string"), write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_or_string() -> TypeNode {
        union_of![TypeNode::identifier("number"), TypeNode::identifier("string")].into()
    }

    #[test]
    fn test_default_registry_is_valid() {
        let adapter = postgres_adapter(&PostgresAdapterOptions::default());
        assert_eq!(adapter.validate(), Ok(()));
        assert_eq!(adapter.scalars().len(), 37);
        assert_eq!(adapter.default_schemas(), vec!["public"]);
        assert_eq!(adapter.default_scalar(), &TypeNode::identifier("string"));
    }

    #[test]
    fn test_every_option_combination_is_valid() {
        for date in DateParser::ALL {
            for numeric in NumericParser::ALL {
                for timestamp in TimestampParser::ALL {
                    let options = PostgresAdapterOptions::new()
                        .date_parser(*date)
                        .numeric_parser(*numeric)
                        .timestamp_parser(*timestamp);
                    assert_eq!(postgres_adapter(&options).validate(), Ok(()));
                }
            }
        }
    }

    #[test]
    fn test_numeric_definitions() {
        let string = numeric_definition(NumericParser::String);
        assert_eq!(string.select_type(), &TypeNode::identifier("string"));
        assert_eq!(string.insert_type(), &number_or_string());

        let number = numeric_definition(NumericParser::Number);
        assert_eq!(number.select_type(), &TypeNode::identifier("number"));
        assert_eq!(number.update_type(), &number_or_string());

        let either = numeric_definition(NumericParser::NumberOrString);
        assert_eq!(either.select_type(), &number_or_string());
        assert_eq!(either.insert_type(), &number_or_string());
        assert_eq!(either.update_type(), &number_or_string());
    }

    #[test]
    fn test_explicit_default_equals_unset() {
        let explicit = PostgresAdapterOptions::new()
            .date_parser(DateParser::Timestamp)
            .numeric_parser(NumericParser::String)
            .timestamp_parser(TimestampParser::Timestamp);

        assert_eq!(
            postgres_adapter(&explicit),
            postgres_adapter(&PostgresAdapterOptions::default())
        );
    }
}
