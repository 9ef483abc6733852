use thiserror::Error;

/// Errors raised by the fallible AST constructors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A union expression needs at least one member
    #[error("Union expression must have at least one member")]
    EmptyUnion,

    /// Two properties of one object expression share a name
    #[error("Duplicate property in object expression: {0}")]
    DuplicateProperty(String),
}

/// Defects in an adapter's registries
///
/// These describe a broken dialect definition rather than bad user input, and
/// are reported by [`Adapter::validate`](crate::Adapter::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// An identifier names neither a builtin, a definition, nor an import
    #[error("Dangling reference in {entry}: {name}")]
    DanglingReference {
        /// Registry entry holding the reference, e.g. `scalars.numeric`
        entry: String,
        /// The unresolved identifier
        name: String,
    },

    /// A chain of bare identifier definitions loops back on itself
    #[error("Alias cycle through definition: {0}")]
    AliasCycle(String),

    /// A name is registered both as a definition and as an import
    #[error("Name is both a definition and an import: {0}")]
    AmbiguousName(String),
}

/// Result type for adapter validation
pub type Result<T> = std::result::Result<T, AdapterError>;
