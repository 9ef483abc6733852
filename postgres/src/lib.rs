//! PostgreSQL support for schemagen
//!
//! This crate provides the PostgreSQL adapter (native type names from
//! `pg_type.typname` to target type expressions) and the dialect that pairs it
//! with introspection options.
//!
//! ```
//! use schemagen_core::{GeneratorDialect, TypeNode};
//! use schemagen_postgres::{PostgresDialect, PostgresDialectOptions};
//! use schemagen_types::postgres::DateParser;
//!
//! let options = PostgresDialectOptions::new().date_parser(DateParser::String);
//! let dialect = PostgresDialect::new(options);
//! assert_eq!(
//!     dialect.adapter().resolve_scalar("date"),
//!     &TypeNode::identifier("string")
//! );
//! ```

pub mod adapter;
#[cfg(feature = "serde")]
mod config;
pub mod dialect;

pub use adapter::{PostgresAdapterOptions, postgres_adapter};
pub use dialect::{PostgresDialect, PostgresDialectOptions};
