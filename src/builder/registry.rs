//! Builder registry - strategy lookup by configuration kind.
//!
//! Key principle: registry construction never fails and performs no I/O.
//! A strategy is selected once, when build configuration is read, and the
//! same builder instance serves every invocation of that strategy.

use std::collections::HashMap;

use crate::builder::imported_shared::ImportedSharedBuilder;
use crate::builder::{Builder, BuilderKind};

/// Registry of available builder strategies.
pub struct BuilderRegistry {
    builders: HashMap<BuilderKind, Box<dyn Builder>>,
}

impl BuilderRegistry {
    /// Create a new registry with all built-in strategies.
    pub fn new() -> Self {
        let mut registry = BuilderRegistry {
            builders: HashMap::new(),
        };

        registry.register(Box::new(ImportedSharedBuilder::new()));

        registry
    }

    /// Register a builder strategy.
    pub fn register(&mut self, builder: Box<dyn Builder>) {
        self.builders.insert(builder.kind(), builder);
    }

    /// Get the builder for a configuration kind.
    pub fn get(&self, kind: BuilderKind) -> Option<&dyn Builder> {
        self.builders.get(&kind).map(|b| b.as_ref())
    }

    /// Get all registered strategy kinds.
    pub fn kinds(&self) -> impl Iterator<Item = BuilderKind> + '_ {
        self.builders.keys().copied()
    }

    /// Get the number of registered strategies.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Check if a strategy is registered.
    pub fn contains(&self, kind: BuilderKind) -> bool {
        self.builders.contains_key(&kind)
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = BuilderRegistry::new();
        assert!(!registry.is_empty());
        assert!(registry.contains(BuilderKind::ImportedShared));
    }

    #[test]
    fn test_registry_get() {
        let registry = BuilderRegistry::new();

        let builder = registry.get(BuilderKind::ImportedShared);
        assert!(builder.is_some());
        assert_eq!(builder.unwrap().kind(), BuilderKind::ImportedShared);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = BuilderRegistry::new();
        let initial = registry.len();

        registry.register(Box::new(ImportedSharedBuilder::new()));
        assert_eq!(registry.len(), initial);
    }
}
