use std::collections::BTreeSet;

use super::Adapter;
use crate::ast::{TypeNode, is_builtin};
use crate::error::{AdapterError, Result};

impl Adapter {
    /// Check the registries for defects in the dialect definition
    ///
    /// Every identifier reachable from the default scalar, the scalars and the
    /// definitions must name a builtin, a definition or an import. No name may
    /// be both a definition and an import, and bare identifier definitions may
    /// not alias each other in a loop.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self
            .definitions
            .keys()
            .find(|name| self.imports.contains_key(name.as_ref()))
        {
            return Err(AdapterError::AmbiguousName(name.to_string()));
        }

        self.check_references("defaultScalar", &self.default_scalar)?;
        for (native_type, node) in &self.scalars {
            self.check_references(&format!("scalars.{native_type}"), node)?;
        }
        for (name, node) in &self.definitions {
            self.check_references(&format!("definitions.{name}"), node)?;
        }

        for name in self.definitions.keys() {
            self.check_alias_chain(name)?;
        }

        Ok(())
    }

    fn check_references(&self, entry: &str, node: &TypeNode) -> Result<()> {
        for name in node.referenced_names() {
            let known = is_builtin(name)
                || self.definitions.contains_key(name)
                || self.imports.contains_key(name);
            if !known {
                return Err(AdapterError::DanglingReference {
                    entry: entry.to_string(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_alias_chain(&self, start: &str) -> Result<()> {
        let mut seen = BTreeSet::new();
        let mut current = start;
        while let Some(next) = self
            .definitions
            .get(current)
            .and_then(TypeNode::as_identifier)
        {
            if !seen.insert(current) {
                return Err(AdapterError::AliasCycle(start.to_string()));
            }
            current = next;
        }
        Ok(())
    }
}
