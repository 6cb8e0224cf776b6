//! Identifier-keyed dispatch tables.
//!
//! Each entity family owns two registries: one mapping identifiers to
//! parsers, one to SQL translators. They share the identifier namespace (see
//! [`crate::filter::ident`]) but are populated and consulted independently —
//! a filter usable only in memory needs no translator entry.
//!
//! The process-wide instances live behind `LazyLock` statics in the `parse`
//! and `translate` modules: population runs exactly once on first access,
//! and every later access is a plain `&'static` read, so concurrent request
//! threads never touch a lock.

use std::collections::HashMap;

use sea_orm::Condition;

use crate::errors::FilterError;
use crate::models::RawParams;

/// Parses untyped raw operands into a typed filter value.
pub type ParseFn<F> = fn(&RawParams<'_>) -> Result<F, FilterError>;

/// Compiles a typed filter value into a relational predicate fragment.
pub type TranslateFn<F> = fn(&F) -> Result<Condition, FilterError>;

/// A read-heavy dispatch table from filter kind identifier to an entry.
#[derive(Debug)]
pub struct Registry<T> {
    entries: HashMap<&'static str, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an entry for `identifier`. The first registration wins;
    /// repeating one is a no-op, keeping population idempotent.
    pub fn register(&mut self, identifier: &'static str, entry: T) {
        self.entries.entry(identifier).or_insert(entry);
    }

    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&T> {
        self.entries.get(identifier)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut registry: Registry<i32> = Registry::new();
        registry.register("height", 1);
        registry.register("height", 2);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("height"), Some(&1));
    }

    #[test]
    fn lookup_miss_is_none() {
        let registry: Registry<i32> = Registry::new();
        assert!(registry.lookup("bogus").is_none());
        assert!(registry.is_empty());
    }
}
