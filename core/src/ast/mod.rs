//! Type-expression AST
//!
//! A closed set of node kinds describing target-language type syntax. Nodes are
//! plain immutable values: they carry no rendering logic, and the emitter
//! pattern-matches on [`TypeNode`] to print them. Sharing one node between
//! several registry entries is expected; cloning is always safe.

mod column_type;
mod node;
mod object;
mod union;

pub use column_type::ColumnType;
pub use node::{ArrayExpression, Identifier, ModuleReference, RecordExpression, TypeNode};
pub use object::{ObjectExpression, Property};
pub use union::UnionExpression;

/// Target-language builtin type names
///
/// Identifiers with these names never need a definition or an import.
pub const BUILTINS: &[&str] = &[
    "bigint", "boolean", "Buffer", "Date", "null", "number", "string", "unknown",
];

/// Returns `true` if `name` is a target-language builtin type
#[inline]
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Builds a [`UnionExpression`] from one or more members.
///
/// The member count is checked at compile time, so the result always satisfies
/// the non-empty invariant. Members may be anything convertible into a
/// [`TypeNode`].
///
/// ```
/// use schemagen_core::{TypeNode, union_of};
///
/// let union = union_of![TypeNode::identifier("number"), TypeNode::identifier("string")];
/// assert_eq!(union.members().len(), 2);
/// ```
#[macro_export]
macro_rules! union_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::ast::UnionExpression::with_first(
            ::core::convert::Into::<$crate::ast::TypeNode>::into($first),
            ::std::vec![$(::core::convert::Into::<$crate::ast::TypeNode>::into($rest)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        assert!(is_builtin("string"));
        assert!(is_builtin("Buffer"));
        assert!(!is_builtin("buffer"));
        assert!(!is_builtin("Json"));
    }

    #[test]
    fn test_union_macro_accepts_mixed_members() {
        let union = union_of![
            Identifier::new("Date"),
            TypeNode::identifier("string"),
        ];
        assert_eq!(
            union.members(),
            &[TypeNode::identifier("Date"), TypeNode::identifier("string")]
        );
    }
}
