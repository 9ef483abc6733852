//! Serde helpers for Cow<'static, str> deserialization
//!
//! These helpers allow AST and registry types to use `Cow<'static, str>` while
//! still being deserializable from JSON or TOML (where strings become `Cow::Owned`).

#[allow(unused_imports)]
use crate::alloc_prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};

/// Deserialize a String into Cow<'static, str>
#[cfg(feature = "serde")]
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize Vec<String> into Vec<Cow<'static, str>>
#[cfg(feature = "serde")]
pub fn cow_vec_from_strings<'de, D>(deserializer: D) -> Result<Vec<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let vec: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(vec.into_iter().map(Cow::Owned).collect())
}

/// Deserialize Option<Vec<String>> into Option<Vec<Cow<'static, str>>>
#[cfg(feature = "serde")]
pub fn cow_option_vec_from_strings<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<Cow<'static, str>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(opt.map(|vec| vec.into_iter().map(Cow::Owned).collect()))
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "cow_from_string")]
        name: Cow<'static, str>,
        #[serde(default, deserialize_with = "cow_option_vec_from_strings")]
        schemas: Option<Vec<Cow<'static, str>>>,
    }

    #[test]
    fn test_owned_after_deserialize() {
        let named: Named =
            serde_json::from_str(r#"{"name":"Json","schemas":["public","audit"]}"#).unwrap();
        assert!(matches!(named.name, Cow::Owned(_)));
        assert_eq!(named.name, "Json");
        assert_eq!(
            named.schemas,
            Some(vec![Cow::Borrowed("public"), Cow::Borrowed("audit")])
        );
    }

    #[test]
    fn test_missing_optional_vec() {
        let named: Named = serde_json::from_str(r#"{"name":"Point"}"#).unwrap();
        assert_eq!(named.schemas, None);
    }
}
