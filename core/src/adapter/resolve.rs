use std::collections::{BTreeMap, BTreeSet};

use super::Adapter;
use crate::ast::{ModuleReference, TypeNode, is_builtin};

/// What a type name refers to within an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedType<'a> {
    /// A target-language builtin
    Builtin,
    /// A structural definition
    Definition(&'a TypeNode),
    /// A type imported from an external module
    Import(&'a ModuleReference),
}

/// Named types a node needs declared or imported, transitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies<'a> {
    /// Definition names, including those reached through other definitions
    pub definitions: BTreeSet<&'a str>,
    /// Imported names and their modules
    pub imports: BTreeMap<&'a str, &'a ModuleReference>,
    /// Names that resolve to nothing
    pub unresolved: BTreeSet<&'a str>,
}

impl Adapter {
    /// Type expression for a native type, falling back to the default scalar
    #[must_use]
    pub fn resolve_scalar(&self, native_type: &str) -> &TypeNode {
        self.scalar(native_type).unwrap_or(&self.default_scalar)
    }

    /// Look a type name up: definitions first, then imports, then builtins
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<NamedType<'_>> {
        if let Some(node) = self.definitions.get(name) {
            Some(NamedType::Definition(node))
        } else if let Some(module) = self.imports.get(name) {
            Some(NamedType::Import(module))
        } else if is_builtin(name) {
            Some(NamedType::Builtin)
        } else {
            None
        }
    }

    /// Follow identifier aliases through the definitions
    ///
    /// Stops at the first node that is not an identifier naming a definition.
    /// Alias cycles stop after visiting every definition once.
    #[must_use]
    pub fn resolve<'a>(&'a self, node: &'a TypeNode) -> &'a TypeNode {
        let mut current = node;
        let mut hops = 0;
        while let Some(name) = current.as_identifier() {
            match self.definitions.get(name) {
                Some(next) if hops < self.definitions.len() => {
                    current = next;
                    hops += 1;
                }
                _ => break,
            }
        }
        current
    }

    /// Every definition and import `node` reaches
    #[must_use]
    pub fn dependencies<'a>(&'a self, node: &'a TypeNode) -> Dependencies<'a> {
        let mut deps = Dependencies::default();
        let mut pending = vec![node];

        while let Some(next) = pending.pop() {
            for name in next.referenced_names() {
                if is_builtin(name) || deps.definitions.contains(name) {
                    continue;
                }
                if let Some((key, definition)) = self.definitions.get_key_value(name) {
                    deps.definitions.insert(key.as_ref());
                    pending.push(definition);
                } else if let Some((key, module)) = self.imports.get_key_value(name) {
                    deps.imports.insert(key.as_ref(), module);
                } else {
                    deps.unresolved.insert(name);
                }
            }
        }

        deps
    }
}
