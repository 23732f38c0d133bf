//! Dialect registry
//!
//! Hosts pick a dialect by its declared name (e.g. `"Oracle"`), usually from
//! job configuration, then call the trait methods on whatever comes back.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::dialect::{DatabaseDialect, GenericDialect, OracleDialect};

/// A dialect as stored in the registry, shareable across host tasks.
pub type SharedDialect = Arc<dyn DatabaseDialect + Send + Sync>;

/// Name-keyed lookup of [`DatabaseDialect`] implementations.
///
/// [`DialectRegistry::new`] pre-registers the built-in dialects; hosts with
/// their own can add them with [`register`](Self::register) or start from
/// [`empty`](Self::empty).
pub struct DialectRegistry {
    dialects: HashMap<String, SharedDialect>,
}

impl DialectRegistry {
    /// Creates a registry with the built-in dialects (Generic, Oracle).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(GenericDialect));
        registry.register(Arc::new(OracleDialect));
        registry
    }

    /// Creates a registry with no dialects.
    pub fn empty() -> Self {
        Self {
            dialects: HashMap::new(),
        }
    }

    /// Registers a dialect under its own [`name`](DatabaseDialect::name),
    /// replacing any previous entry with that name.
    pub fn register(&mut self, dialect: SharedDialect) {
        debug!(dialect = dialect.name(), "registering dialect");
        self.dialects.insert(dialect.name().to_string(), dialect);
    }

    /// Looks up a dialect by exact name.
    pub fn get(&self, name: &str) -> Option<SharedDialect> {
        let dialect = self.dialects.get(name).cloned();
        debug!(dialect = name, found = dialect.is_some(), "dialect lookup");
        dialect
    }

    /// Registered dialect names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
