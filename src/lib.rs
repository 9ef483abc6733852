//! # schemagen
//!
//! Dialect-driven type mapping for database schema code generation.
//!
//! A dialect's [`Adapter`] maps the native column type names its catalog
//! reports onto target-language type expressions. An emitter looks a column's
//! type up with [`Adapter::resolve_scalar`], follows named types through
//! [`Adapter::definition`], and imports whatever [`Adapter::dependencies`]
//! lists under `imports`.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemagen::prelude::*;
//! use schemagen::postgres::{PostgresDialect, PostgresDialectOptions};
//! use schemagen::types::postgres::NumericParser;
//!
//! let dialect = PostgresDialect::new(
//!     PostgresDialectOptions::new().numeric_parser(NumericParser::Number),
//! );
//! let adapter = dialect.adapter();
//!
//! let numeric = adapter.resolve(adapter.resolve_scalar("numeric"));
//! assert_eq!(numeric.select_type(), &TypeNode::identifier("number"));
//! ```
//!
//! ## Database Support
//!
//! | Database   | Crate                | Feature Flag |
//! |------------|----------------------|--------------|
//! | PostgreSQL | `schemagen-postgres` | `postgres`   |
//! | SQLite     | `schemagen-sqlite`   | `sqlite`     |

// =============================================================================
// Root-level exports
// =============================================================================

/// Database dialect enum
pub use schemagen_types::Dialect;

pub use schemagen_core::{
    Adapter, AdapterBuilder, Dependencies, GeneratorDialect, IntrospectorDialect,
    IntrospectorOptions, NamedType, union_of,
};

/// Type-expression AST
pub use schemagen_core::ast;

/// Shared JSON definitions
pub use schemagen_core::definitions;

/// Dialect-independent option and identification types
pub use schemagen_types as types;

/// Error types
pub mod error {
    #[cfg(feature = "serde")]
    pub use schemagen_core::ConfigError;
    pub use schemagen_core::{AdapterError, AstError};
}

/// PostgreSQL adapter and dialect
#[cfg(feature = "postgres")]
pub use schemagen_postgres as postgres;

/// SQLite adapter and dialect
#[cfg(feature = "sqlite")]
pub use schemagen_sqlite as sqlite;

/// Adapter for `dialect` with default options
///
/// Returns `None` when the dialect's crate is not enabled.
#[must_use]
pub fn default_adapter(dialect: Dialect) -> Option<Adapter> {
    match dialect {
        #[cfg(feature = "postgres")]
        Dialect::PostgreSQL => Some(schemagen_postgres::postgres_adapter(
            &schemagen_postgres::PostgresAdapterOptions::default(),
        )),
        #[cfg(feature = "sqlite")]
        Dialect::SQLite => Some(schemagen_sqlite::sqlite_adapter()),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use schemagen_core::prelude::*;
}
