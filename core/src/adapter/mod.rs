//! Per-dialect type-mapping registry
//!
//! An [`Adapter`] answers three questions for the emitter: which type
//! expression a native column type maps to (`scalars`), what a named type
//! used by those expressions looks like (`definitions`), and which module a
//! non-structural name has to be imported from (`imports`).
//!
//! Adapters are produced by an [`AdapterBuilder`], which is the only place the
//! registries can change. Dialect crates start the builder from their default
//! registry, apply the user's parser options, and call
//! [`build`](AdapterBuilder::build). Every build owns fresh registries, so two
//! adapters never share mutable state.

mod builder;
mod resolve;
mod validate;

use std::borrow::Cow;
use std::collections::BTreeMap;

use schemagen_types::Dialect;
#[cfg(feature = "serde")]
use schemagen_types::serde_helpers::cow_vec_from_strings;

use crate::ast::{ModuleReference, TypeNode};

pub use builder::AdapterBuilder;
pub use resolve::{Dependencies, NamedType};

/// Name-keyed registry with deterministic iteration order
pub type Registry<T> = BTreeMap<Cow<'static, str>, T>;

/// Type-mapping registry for one dialect
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Adapter {
    dialect: Dialect,
    default_scalar: TypeNode,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_vec_from_strings"))]
    default_schemas: Vec<Cow<'static, str>>,
    scalars: Registry<TypeNode>,
    definitions: Registry<TypeNode>,
    imports: Registry<ModuleReference>,
}

impl Adapter {
    /// Start an empty registry for `dialect`
    #[must_use]
    pub fn builder(dialect: Dialect) -> AdapterBuilder {
        AdapterBuilder::new(dialect)
    }

    #[inline]
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Type used for native types without a scalar entry
    #[inline]
    #[must_use]
    pub fn default_scalar(&self) -> &TypeNode {
        &self.default_scalar
    }

    /// Catalog schemas in scope when the user names none
    #[must_use]
    pub fn default_schemas(&self) -> Vec<&str> {
        self.default_schemas.iter().map(|s| s.as_ref()).collect()
    }

    /// Scalar mapping for a native type name
    #[must_use]
    pub fn scalar(&self, native_type: &str) -> Option<&TypeNode> {
        self.scalars.get(native_type)
    }

    #[must_use]
    pub fn scalars(&self) -> &Registry<TypeNode> {
        &self.scalars
    }

    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&TypeNode> {
        self.definitions.get(name)
    }

    #[must_use]
    pub fn definitions(&self) -> &Registry<TypeNode> {
        &self.definitions
    }

    #[must_use]
    pub fn import(&self, name: &str) -> Option<&ModuleReference> {
        self.imports.get(name)
    }

    #[must_use]
    pub fn imports(&self) -> &Registry<ModuleReference> {
        &self.imports
    }
}
