use std::borrow::Cow;

#[cfg(feature = "serde")]
use schemagen_types::serde_helpers::cow_from_string;

use super::{ColumnType, ObjectExpression, UnionExpression, is_builtin};

/// A node of the type-expression AST
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum TypeNode {
    /// A bare type reference: a builtin, a definition or an import
    Identifier(Identifier),
    /// A type that lives in an external module
    ModuleReference(ModuleReference),
    /// A structural record type
    Object(ObjectExpression),
    /// An alternation of types
    Union(UnionExpression),
    /// An array of one element type
    Array(ArrayExpression),
    /// A string-keyed map of one value type
    Record(RecordExpression),
    /// The select/insert/update triple of one column
    ColumnType(ColumnType),
}

impl TypeNode {
    /// Shorthand for an [`Identifier`] node
    #[must_use]
    pub fn identifier(name: impl Into<Cow<'static, str>>) -> Self {
        TypeNode::Identifier(Identifier::new(name))
    }

    /// Shorthand for a [`ModuleReference`] node
    #[must_use]
    pub fn module(specifier: impl Into<Cow<'static, str>>) -> Self {
        TypeNode::ModuleReference(ModuleReference::new(specifier))
    }

    /// Shorthand for an [`ArrayExpression`] node
    #[must_use]
    pub fn array(element: impl Into<TypeNode>) -> Self {
        TypeNode::Array(ArrayExpression::new(element))
    }

    /// Shorthand for a [`RecordExpression`] node
    #[must_use]
    pub fn record(value: impl Into<TypeNode>) -> Self {
        TypeNode::Record(RecordExpression::new(value))
    }

    /// The identifier name, if this is an [`Identifier`] node
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            TypeNode::Identifier(id) => Some(id.name()),
            _ => None,
        }
    }

    /// The column-type triple, if this is a [`ColumnType`] node
    #[must_use]
    pub fn as_column_type(&self) -> Option<&ColumnType> {
        match self {
            TypeNode::ColumnType(column) => Some(column),
            _ => None,
        }
    }

    /// Type observed when reading a row
    ///
    /// For anything but a column type this is the node itself.
    #[must_use]
    pub fn select_type(&self) -> &TypeNode {
        match self {
            TypeNode::ColumnType(column) => column.select_type(),
            other => other,
        }
    }

    /// Type accepted when inserting a row
    #[must_use]
    pub fn insert_type(&self) -> &TypeNode {
        match self {
            TypeNode::ColumnType(column) => column.insert_type(),
            other => other,
        }
    }

    /// Type accepted when updating a row
    #[must_use]
    pub fn update_type(&self) -> &TypeNode {
        match self {
            TypeNode::ColumnType(column) => column.update_type(),
            other => other,
        }
    }

    /// Calls `f` on this node and every node below it, parents first
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a TypeNode)) {
        f(self);
        match self {
            TypeNode::Identifier(_) | TypeNode::ModuleReference(_) => {}
            TypeNode::Object(object) => {
                for property in object.properties() {
                    property.ty().visit(f);
                }
            }
            TypeNode::Union(union) => {
                for member in union.members() {
                    member.visit(f);
                }
            }
            TypeNode::Array(array) => array.element().visit(f),
            TypeNode::Record(record) => record.value().visit(f),
            TypeNode::ColumnType(column) => {
                column.select_type().visit(f);
                column.insert_type().visit(f);
                column.update_type().visit(f);
            }
        }
    }

    /// Every identifier name in this tree, in visiting order
    ///
    /// Names appear once per occurrence.
    #[must_use]
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.visit(&mut |node| {
            if let TypeNode::Identifier(id) = node {
                names.push(id.name());
            }
        });
        names
    }

    /// Returns `true` if every identifier in this tree is a builtin
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.referenced_names().into_iter().all(is_builtin)
    }
}

/// A bare type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    name: Cow<'static, str>,
}

impl Identifier {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Const constructor for static registries
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A type imported from an external module
///
/// Only the module specifier is stored; the imported symbol is the key the
/// reference is registered under in an adapter's imports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleReference {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    specifier: Cow<'static, str>,
}

impl ModuleReference {
    #[must_use]
    pub fn new(specifier: impl Into<Cow<'static, str>>) -> Self {
        Self {
            specifier: specifier.into(),
        }
    }

    /// Module path to import from, e.g. `postgres-interval`
    #[inline]
    #[must_use]
    pub fn specifier(&self) -> &str {
        &self.specifier
    }
}

/// `T[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayExpression {
    element: Box<TypeNode>,
}

impl ArrayExpression {
    #[must_use]
    pub fn new(element: impl Into<TypeNode>) -> Self {
        Self {
            element: Box::new(element.into()),
        }
    }

    #[must_use]
    pub fn element(&self) -> &TypeNode {
        &self.element
    }
}

/// `{ [key: string]: T }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordExpression {
    value: Box<TypeNode>,
}

impl RecordExpression {
    #[must_use]
    pub fn new(value: impl Into<TypeNode>) -> Self {
        Self {
            value: Box::new(value.into()),
        }
    }

    #[must_use]
    pub fn value(&self) -> &TypeNode {
        &self.value
    }
}

impl From<Identifier> for TypeNode {
    fn from(id: Identifier) -> Self {
        TypeNode::Identifier(id)
    }
}

impl From<ModuleReference> for TypeNode {
    fn from(module: ModuleReference) -> Self {
        TypeNode::ModuleReference(module)
    }
}

impl From<ObjectExpression> for TypeNode {
    fn from(object: ObjectExpression) -> Self {
        TypeNode::Object(object)
    }
}

impl From<UnionExpression> for TypeNode {
    fn from(union: UnionExpression) -> Self {
        TypeNode::Union(union)
    }
}

impl From<ArrayExpression> for TypeNode {
    fn from(array: ArrayExpression) -> Self {
        TypeNode::Array(array)
    }
}

impl From<RecordExpression> for TypeNode {
    fn from(record: RecordExpression) -> Self {
        TypeNode::Record(record)
    }
}

impl From<ColumnType> for TypeNode {
    fn from(column: ColumnType) -> Self {
        TypeNode::ColumnType(column)
    }
}
