//! Emitter registry for discovery and selection
//!
//! This module provides a centralized registry for all available emitters.
//! Emitters can be registered and retrieved by name.

use crate::emitter::Emitter;
use crate::emitters::{CssVariablesEmitter, NestedObjectEmitter};
use crate::error::EmitError;
use dtok_core::tokens::Buckets;
use std::collections::HashMap;

/// Registry of artifact emitters
///
/// # Examples
///
/// ```ignore
/// let registry = EmitterRegistry::with_defaults();
/// let artifact = registry.emit(&buckets, "nested-object")?;
/// ```
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EmitterRegistry {
            emitters: HashMap::new(),
        }
    }

    /// Register an emitter
    ///
    /// If an emitter with the same name already exists, it will be replaced.
    pub fn register<E: Emitter + 'static>(&mut self, emitter: E) {
        self.emitters
            .insert(emitter.name().to_string(), Box::new(emitter));
    }

    /// Get an emitter by name
    pub fn get(&self, name: &str) -> Option<&dyn Emitter> {
        self.emitters.get(name).map(|e| e.as_ref())
    }

    /// Check if an emitter exists
    pub fn has(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// Serialize buckets using the named emitter
    pub fn emit(&self, buckets: &Buckets, name: &str) -> Result<String, EmitError> {
        let emitter = self
            .get(name)
            .ok_or_else(|| EmitError::EmitterNotFound(name.to_string()))?;
        emitter.emit(buckets)
    }

    /// List all available emitter names (sorted)
    pub fn list_emitters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.emitters.keys().cloned().collect();
        names.sort();
        names
    }

    /// List (name, description) pairs for all emitters (sorted by name)
    pub fn describe_emitters(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .emitters
            .values()
            .map(|e| (e.name().to_string(), e.description().to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// Create a registry with the default emitters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NestedObjectEmitter);
        registry.register(CssVariablesEmitter);
        registry
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
