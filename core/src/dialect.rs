//! Dialect seams
//!
//! A generator dialect couples an [`Adapter`] with the options the external
//! schema introspector reads. Neither trait carries logic of its own.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use schemagen_types::serde_helpers::cow_option_vec_from_strings;

use crate::Adapter;

/// Re-export the unified Dialect enum from schemagen-types
pub use schemagen_types::Dialect;

/// Options consumed by the schema introspector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IntrospectorOptions {
    /// Catalog schemas to read; the adapter's defaults when unset
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "cow_option_vec_from_strings",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default_schemas: Option<Vec<Cow<'static, str>>>,
    /// Introspect domain types
    pub domains: bool,
    /// Introspect partitions as tables
    pub partitions: bool,
}

impl IntrospectorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// The user's schemas if any were given, otherwise `fallback`
    #[must_use]
    pub fn schemas_or<'a>(&'a self, fallback: Vec<&'a str>) -> Vec<&'a str> {
        match &self.default_schemas {
            Some(schemas) => schemas.iter().map(|s| s.as_ref()).collect(),
            None => fallback,
        }
    }
}

/// A dialect the code generator can map types for
pub trait GeneratorDialect {
    fn dialect(&self) -> Dialect;

    /// The dialect's own, fully configured adapter
    fn adapter(&self) -> &Adapter;
}

/// A dialect the schema introspector can read
pub trait IntrospectorDialect {
    fn introspector_options(&self) -> &IntrospectorOptions;

    /// Catalog schemas in scope for this run
    fn schemas(&self) -> Vec<&str>
    where
        Self: GeneratorDialect,
    {
        self.introspector_options()
            .schemas_or(self.adapter().default_schemas())
    }
}
