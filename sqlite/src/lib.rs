//! SQLite support for schemagen

pub mod adapter;
pub mod dialect;

pub use adapter::sqlite_adapter;
pub use dialect::SqliteDialect;
