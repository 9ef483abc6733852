//! Core of the schemagen type-mapping layer
//!
//! - [`ast`] - the type-expression nodes an emitter renders
//! - [`definitions`] - the shared JSON value definitions
//! - [`Adapter`] - per-dialect registry of scalars, definitions and imports
//! - [`GeneratorDialect`] / [`IntrospectorDialect`] - dialect seams

pub mod adapter;
pub mod ast;
#[cfg(feature = "serde")]
pub mod config;
pub mod definitions;
pub mod dialect;
pub mod error;
pub mod tracing;

pub use adapter::{Adapter, AdapterBuilder, Dependencies, NamedType, Registry};
pub use ast::{
    ArrayExpression, ColumnType, Identifier, ModuleReference, ObjectExpression, Property,
    RecordExpression, TypeNode, UnionExpression, is_builtin,
};
pub use dialect::{Dialect, GeneratorDialect, IntrospectorDialect, IntrospectorOptions};
#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use error::{AdapterError, AstError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::ast::{ColumnType, ObjectExpression, TypeNode};
    pub use crate::union_of;
    pub use crate::{Adapter, Dialect, GeneratorDialect, IntrospectorDialect};
}
