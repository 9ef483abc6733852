//! SQLite generator dialect

use schemagen_core::{Adapter, GeneratorDialect, IntrospectorDialect, IntrospectorOptions};
use schemagen_types::Dialect;

use crate::adapter::sqlite_adapter;

/// SQLite dialect: introspection options plus its own adapter
///
/// SQLite has no parser-behavior options, so the whole option set goes to the
/// introspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteDialect {
    introspector: IntrospectorOptions,
    adapter: Adapter,
}

impl SqliteDialect {
    #[must_use]
    pub fn new(options: IntrospectorOptions) -> Self {
        Self {
            introspector: options,
            adapter: sqlite_adapter(),
        }
    }

    /// Parse introspection options from TOML text
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, schemagen_core::ConfigError> {
        Ok(Self::new(schemagen_core::config::from_toml_str(content)?))
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new(IntrospectorOptions::default())
    }
}

impl GeneratorDialect for SqliteDialect {
    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }

    fn adapter(&self) -> &Adapter {
        &self.adapter
    }
}

impl IntrospectorDialect for SqliteDialect {
    fn introspector_options(&self) -> &IntrospectorOptions {
        &self.introspector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialect() {
        let dialect = SqliteDialect::default();
        assert_eq!(dialect.dialect(), Dialect::SQLite);
        assert!(dialect.schemas().is_empty());
        assert_eq!(dialect.adapter(), &sqlite_adapter());
    }

    #[test]
    fn test_introspector_options_pass_through() {
        let dialect = SqliteDialect::new(IntrospectorOptions::new().default_schemas(["main"]));
        assert_eq!(dialect.schemas(), vec!["main"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let dialect = SqliteDialect::from_toml_str("defaultSchemas = [\"main\"]").unwrap();
        assert_eq!(dialect.schemas(), vec!["main"]);
    }
}
