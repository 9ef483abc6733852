use super::TypeNode;

/// Per-direction type of one column
///
/// Some drivers hand values back in a different shape than they accept, and
/// some columns take a wider literal form on write than they return on read.
/// An omitted insert type falls back to the select type and an omitted update
/// type falls back to the insert type. The fallback is applied at construction,
/// so all three slots are always concrete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "RawColumnType", rename_all = "camelCase")
)]
pub struct ColumnType {
    select_type: Box<TypeNode>,
    insert_type: Box<TypeNode>,
    update_type: Box<TypeNode>,
}

impl ColumnType {
    #[must_use]
    pub fn new(
        select: impl Into<TypeNode>,
        insert: Option<TypeNode>,
        update: Option<TypeNode>,
    ) -> Self {
        let select = select.into();
        let insert = insert.unwrap_or_else(|| select.clone());
        let update = update.unwrap_or_else(|| insert.clone());
        Self {
            select_type: Box::new(select),
            insert_type: Box::new(insert),
            update_type: Box::new(update),
        }
    }

    /// Same type in every direction
    #[must_use]
    pub fn select_only(select: impl Into<TypeNode>) -> Self {
        Self::new(select, None, None)
    }

    /// One type on read, another shared by insert and update
    #[must_use]
    pub fn read_write(select: impl Into<TypeNode>, write: impl Into<TypeNode>) -> Self {
        Self::new(select, Some(write.into()), None)
    }

    #[inline]
    #[must_use]
    pub fn select_type(&self) -> &TypeNode {
        &self.select_type
    }

    #[inline]
    #[must_use]
    pub fn insert_type(&self) -> &TypeNode {
        &self.insert_type
    }

    #[inline]
    #[must_use]
    pub fn update_type(&self) -> &TypeNode {
        &self.update_type
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawColumnType {
    select_type: TypeNode,
    #[serde(default)]
    insert_type: Option<TypeNode>,
    #[serde(default)]
    update_type: Option<TypeNode>,
}

#[cfg(feature = "serde")]
impl From<RawColumnType> for ColumnType {
    fn from(raw: RawColumnType) -> Self {
        ColumnType::new(raw.select_type, raw.insert_type, raw.update_type)
    }
}
