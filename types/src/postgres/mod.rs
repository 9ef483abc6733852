//! PostgreSQL type definitions
//!
//! - [`DateParser`] - how the driver hands back `date` values
//! - [`NumericParser`] - how the driver hands back `numeric` values
//! - [`TimestampParser`] - how the driver hands back `timestamp`/`timestamptz` values

mod parser;

pub use parser::{DateParser, NumericParser, ParserParseError, TimestampParser};
