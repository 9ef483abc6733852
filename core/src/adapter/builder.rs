use std::borrow::Cow;

use schemagen_types::Dialect;

use super::{Adapter, Registry};
use crate::ast::{ModuleReference, TypeNode};
use crate::definitions::json_definitions;

/// Construction stage of an [`Adapter`]
///
/// Inserting under an existing name replaces the entry; that is how parser
/// options override a dialect's defaults.
#[derive(Debug, Clone)]
pub struct AdapterBuilder {
    dialect: Dialect,
    default_scalar: TypeNode,
    default_schemas: Vec<Cow<'static, str>>,
    scalars: Registry<TypeNode>,
    definitions: Registry<TypeNode>,
    imports: Registry<ModuleReference>,
}

impl AdapterBuilder {
    /// Empty registries; the default scalar starts as `unknown`
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            default_scalar: TypeNode::identifier("unknown"),
            default_schemas: Vec::new(),
            scalars: Registry::new(),
            definitions: Registry::new(),
            imports: Registry::new(),
        }
    }

    #[must_use]
    pub fn default_scalar(mut self, node: impl Into<TypeNode>) -> Self {
        self.default_scalar = node.into();
        self
    }

    #[must_use]
    pub fn default_schemas<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.default_schemas = schemas.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn scalar(
        mut self,
        native_type: impl Into<Cow<'static, str>>,
        node: impl Into<TypeNode>,
    ) -> Self {
        self.scalars.insert(native_type.into(), node.into());
        self
    }

    /// Map several native types that share one target identifier
    #[must_use]
    pub fn scalars_as(mut self, native_types: &[&'static str], target: &'static str) -> Self {
        for native_type in native_types {
            self.scalars
                .insert(Cow::Borrowed(*native_type), TypeNode::identifier(target));
        }
        self
    }

    #[must_use]
    pub fn definition(
        mut self,
        name: impl Into<Cow<'static, str>>,
        node: impl Into<TypeNode>,
    ) -> Self {
        self.definitions.insert(name.into(), node.into());
        self
    }

    /// Register the shared JSON value hierarchy
    #[must_use]
    pub fn json_definitions(mut self) -> Self {
        for (name, node) in json_definitions() {
            self.definitions.insert(Cow::Borrowed(name), node);
        }
        self
    }

    #[must_use]
    pub fn import(
        mut self,
        name: impl Into<Cow<'static, str>>,
        specifier: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.imports.insert(name.into(), ModuleReference::new(specifier));
        self
    }

    #[must_use]
    pub fn build(self) -> Adapter {
        crate::schemagen_trace_adapter!(
            self.dialect,
            self.scalars.len(),
            self.definitions.len(),
            self.imports.len()
        );

        Adapter {
            dialect: self.dialect,
            default_scalar: self.default_scalar,
            default_schemas: self.default_schemas,
            scalars: self.scalars,
            definitions: self.definitions,
            imports: self.imports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_insert_replaces_entry() {
        let adapter = AdapterBuilder::new(Dialect::PostgreSQL)
            .scalar("date", TypeNode::identifier("Timestamp"))
            .scalar("date", TypeNode::identifier("string"))
            .build();

        assert_eq!(adapter.scalars().len(), 1);
        assert_eq!(adapter.scalar("date"), Some(&TypeNode::identifier("string")));
    }

    #[test]
    fn test_scalars_as() {
        let adapter = AdapterBuilder::new(Dialect::SQLite)
            .scalars_as(&["integer", "real"], "number")
            .build();

        assert_eq!(adapter.scalar("integer"), Some(&TypeNode::identifier("number")));
        assert_eq!(adapter.scalar("real"), Some(&TypeNode::identifier("number")));
        assert_eq!(adapter.scalar("text"), None);
    }

    #[test]
    fn test_defaults() {
        let adapter = AdapterBuilder::new(Dialect::SQLite).build();
        assert_eq!(adapter.default_scalar(), &TypeNode::identifier("unknown"));
        assert!(adapter.default_schemas().is_empty());
        assert!(adapter.definitions().is_empty());
    }

    #[test]
    fn test_json_definitions_registered() {
        let adapter = AdapterBuilder::new(Dialect::PostgreSQL)
            .json_definitions()
            .build();
        for name in ["Json", "JsonArray", "JsonObject", "JsonPrimitive", "JsonValue"] {
            assert!(adapter.definition(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_import() {
        let adapter = AdapterBuilder::new(Dialect::PostgreSQL)
            .import("IPostgresInterval", "postgres-interval")
            .build();
        assert_eq!(
            adapter.import("IPostgresInterval").map(ModuleReference::specifier),
            Some("postgres-interval")
        );
    }
}
