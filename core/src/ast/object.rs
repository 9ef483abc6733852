use std::borrow::Cow;

#[cfg(feature = "serde")]
use schemagen_types::serde_helpers::cow_from_string;

use super::TypeNode;
use crate::error::AstError;

/// One field of an object type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    name: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: TypeNode,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, ty: impl Into<TypeNode>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn ty(&self) -> &TypeNode {
        &self.ty
    }
}

/// A structural record type with uniquely named properties
///
/// Properties keep their insertion order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawObjectExpression"))]
pub struct ObjectExpression {
    properties: Vec<Property>,
}

impl ObjectExpression {
    /// An object type with no properties
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a property list, rejecting duplicate names
    pub fn try_new(properties: Vec<Property>) -> Result<Self, AstError> {
        for (idx, property) in properties.iter().enumerate() {
            if properties[..idx].iter().any(|p| p.name == property.name) {
                return Err(AstError::DuplicateProperty(property.name.to_string()));
            }
        }
        Ok(Self { properties })
    }

    /// Add a property, replacing any existing property with the same name
    ///
    /// A replaced property keeps its original position.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<Cow<'static, str>>,
        ty: impl Into<TypeNode>,
    ) -> Self {
        let property = Property::new(name, ty);
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property's type by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(Property::ty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawObjectExpression {
    properties: Vec<Property>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawObjectExpression> for ObjectExpression {
    type Error = AstError;

    fn try_from(raw: RawObjectExpression) -> Result<Self, Self::Error> {
        ObjectExpression::try_new(raw.properties)
    }
}
