use super::TypeNode;
use crate::error::AstError;

/// An alternation of one or more types
///
/// Member order is kept for deterministic rendering; it carries no ranking.
/// Use [`union_of!`](crate::union_of) for literal unions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawUnionExpression"))]
pub struct UnionExpression {
    members: Vec<TypeNode>,
}

impl UnionExpression {
    /// Build from a first member and any number of further members
    #[must_use]
    pub fn with_first(first: TypeNode, rest: Vec<TypeNode>) -> Self {
        let mut members = Vec::with_capacity(rest.len() + 1);
        members.push(first);
        members.extend(rest);
        Self { members }
    }

    /// Build from a runtime member list
    pub fn try_new(members: Vec<TypeNode>) -> Result<Self, AstError> {
        if members.is_empty() {
            return Err(AstError::EmptyUnion);
        }
        Ok(Self { members })
    }

    #[must_use]
    pub fn members(&self) -> &[TypeNode] {
        &self.members
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawUnionExpression {
    members: Vec<TypeNode>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawUnionExpression> for UnionExpression {
    type Error = AstError;

    fn try_from(raw: RawUnionExpression) -> Result<Self, Self::Error> {
        UnionExpression::try_new(raw.members)
    }
}
