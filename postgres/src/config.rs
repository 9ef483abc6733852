//! Lenient deserialization of parser options
//!
//! An unrecognized parser value is not an error: it is logged and treated as
//! unset, which keeps the driver's default mapping.

use schemagen_types::postgres::{DateParser, NumericParser, TimestampParser};
use serde::{Deserialize, Deserializer};

use crate::dialect::PostgresDialectOptions;

pub(crate) trait ParserOption: Sized {
    const OPTION: &'static str;

    fn parse(value: &str) -> Option<Self>;
}

macro_rules! impl_parser_option {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ParserOption for $ty {
                const OPTION: &'static str = <$ty>::OPTION;

                fn parse(value: &str) -> Option<Self> {
                    <$ty>::parse(value)
                }
            }
        )+
    };
}

impl_parser_option!(DateParser, NumericParser, TimestampParser);

pub(crate) fn lenient_parser<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ParserOption,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let parsed = T::parse(&raw);
        if parsed.is_none() {
            schemagen_core::schemagen_trace_ignored!(T::OPTION, raw);
        }
        parsed
    }))
}

impl PostgresDialectOptions {
    /// Parse options from TOML text
    ///
    /// ```
    /// use schemagen_postgres::PostgresDialectOptions;
    /// use schemagen_types::postgres::NumericParser;
    ///
    /// let options = PostgresDialectOptions::from_toml_str(r#"numericParser = "number""#).unwrap();
    /// assert_eq!(options.numeric_parser, Some(NumericParser::Number));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, schemagen_core::ConfigError> {
        schemagen_core::config::from_toml_str(content)
    }
}
