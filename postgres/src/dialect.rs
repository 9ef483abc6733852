//! PostgreSQL generator dialect

use std::borrow::Cow;

use schemagen_core::{Adapter, GeneratorDialect, IntrospectorDialect, IntrospectorOptions};
use schemagen_types::Dialect;
use schemagen_types::postgres::{DateParser, NumericParser, TimestampParser};

#[cfg(feature = "serde")]
use schemagen_types::serde_helpers::cow_option_vec_from_strings;

use crate::adapter::{PostgresAdapterOptions, postgres_adapter};

/// Everything a user can configure for a PostgreSQL run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PostgresDialectOptions {
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub date_parser: Option<DateParser>,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "cow_option_vec_from_strings",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default_schemas: Option<Vec<Cow<'static, str>>>,
    pub domains: bool,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub numeric_parser: Option<NumericParser>,
    pub partitions: bool,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::config::lenient_parser",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub timestamp_parser: Option<TimestampParser>,
}

impl PostgresDialectOptions {
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

    #[must_use]
    pub fn default_schemas<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.default_schemas = Some(schemas.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn domains(mut self, enabled: bool) -> Self {
        self.domains = enabled;
        self
    }

    #[must_use]
    pub fn partitions(mut self, enabled: bool) -> Self {
        self.partitions = enabled;
        self
    }

    /// Split into the introspector's and the adapter's share
    #[must_use]
    pub fn split(self) -> (IntrospectorOptions, PostgresAdapterOptions) {
        let introspector = IntrospectorOptions {
            default_schemas: self.default_schemas,
            domains: self.domains,
            partitions: self.partitions,
        };
        let adapter = PostgresAdapterOptions {
            date_parser: self.date_parser,
            numeric_parser: self.numeric_parser,
            timestamp_parser: self.timestamp_parser,
        };
        (introspector, adapter)
    }
}

/// PostgreSQL dialect: introspection options plus its own adapter
///
/// The parser options are kept as well, because the introspector's driver
/// connection has to be set up with the same parsers the adapter assumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresDialect {
    introspector: IntrospectorOptions,
    parsers: PostgresAdapterOptions,
    adapter: Adapter,
}

impl PostgresDialect {
    #[must_use]
    pub fn new(options: PostgresDialectOptions) -> Self {
        let (introspector, parsers) = options.split();
        let adapter = postgres_adapter(&parsers);
        Self {
            introspector,
            parsers,
            adapter,
        }
    }

    /// Parser options the driver connection must be configured with
    #[must_use]
    pub fn parser_options(&self) -> &PostgresAdapterOptions {
        &self.parsers
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new(PostgresDialectOptions::default())
    }
}

impl GeneratorDialect for PostgresDialect {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSQL
    }

    fn adapter(&self) -> &Adapter {
        &self.adapter
    }
}

impl IntrospectorDialect for PostgresDialect {
    fn introspector_options(&self) -> &IntrospectorOptions {
        &self.introspector
    }
}
