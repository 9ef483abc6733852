//! TOML configuration of dialect options
//!
//! Callers hand in the configuration text; reading files is left to them.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid TOML or does not fit the options shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Deserialize dialect options from TOML text
pub fn from_toml_str<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntrospectorOptions;

    #[test]
    fn test_introspector_options_from_toml() {
        let options: IntrospectorOptions = from_toml_str(
            r#"
            defaultSchemas = ["public", "audit"]
            domains = true
            "#,
        )
        .unwrap();

        assert_eq!(options.schemas_or(Vec::new()), vec!["public", "audit"]);
        assert!(options.domains);
        assert!(!options.partitions);
    }

    #[test]
    fn test_malformed_toml() {
        let err = from_toml_str::<IntrospectorOptions>("domains = ").unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_wrong_value_type() {
        assert!(from_toml_str::<IntrospectorOptions>("partitions = \"yes\"").is_err());
    }
}
