//! Fact pools stored in the caller's session blob.
//!
//! The host platform hands over an untyped key/value store that lives for one
//! conversation. [`ConversationData`] is the seam to that store and
//! [`SessionFactStore`] is the only code that reads or writes pool keys in it.

use crate::catalog::FactCatalog;
use crate::category::Category;
use crate::error::StoreError;
use crate::fact::FactPool;
use crate::policy::PoolSnapshot;
use factdeck_core::Result;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A conversation-scoped key/value store supplied by the caller.
///
/// The caller owns persistence across turns; the store is only borrowed for
/// the duration of one request.
pub trait ConversationData {
    /// Returns the value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<&JsonValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: JsonValue);
}

impl ConversationData for serde_json::Map<String, JsonValue> {
    fn value(&self, key: &str) -> Option<&JsonValue> {
        self.get(key)
    }

    fn set_value(&mut self, key: &str, value: JsonValue) {
        self.insert(key.to_string(), value);
    }
}

impl<S: BuildHasher> ConversationData for HashMap<String, JsonValue, S> {
    fn value(&self, key: &str) -> Option<&JsonValue> {
        self.get(key)
    }

    fn set_value(&mut self, key: &str, value: JsonValue) {
        self.insert(key.to_string(), value);
    }
}

/// Typed access to the three fact pools of a session.
pub struct SessionFactStore<'a, D: ConversationData + ?Sized> {
    data: &'a mut D,
    catalog: &'a FactCatalog,
}

impl<'a, D: ConversationData + ?Sized> SessionFactStore<'a, D> {
    /// Wraps a session blob.
    pub fn new(data: &'a mut D, catalog: &'a FactCatalog) -> Self {
        Self { data, catalog }
    }

    /// Seeds all three pools from the catalog if none of them exist yet.
    ///
    /// Does nothing when any pool is already present, so a conversation in
    /// progress is never reset. Returns true if the pools were seeded.
    pub fn ensure_initialized(&mut self) -> bool {
        if Category::ALL.iter().any(|&category| self.stored(category).is_some()) {
            return false;
        }

        for category in Category::ALL {
            let pool = self.catalog.initial_pool(category);
            self.set_pool(category, &pool);
        }
        true
    }

    /// Reads the remaining facts of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool has not been initialized or does not hold
    /// a list of fact ids.
    pub fn pool(&self, category: Category) -> Result<FactPool, StoreError> {
        let stored = self
            .stored(category)
            .ok_or(StoreError::Uninitialized { category })?;

        serde_json::from_value(stored.clone()).map_err(|e| {
            StoreError::Malformed {
                category,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Replaces the stored pool of a category.
    pub fn set_pool(&mut self, category: Category, pool: &FactPool) {
        let value = pool
            .iter()
            .map(|fact| JsonValue::String(fact.to_string()))
            .collect();
        self.data.set_value(category.as_str(), JsonValue::Array(value));
    }

    /// Reads all three pools at once.
    ///
    /// # Errors
    ///
    /// Returns an error if any pool is missing or malformed.
    pub fn snapshot(&self) -> Result<PoolSnapshot, StoreError> {
        Ok(PoolSnapshot {
            history: self.pool(Category::History)?,
            headquarters: self.pool(Category::Headquarters)?,
            cats: self.pool(Category::Cats)?,
        })
    }

    // A null value counts as absent.
    fn stored(&self, category: Category) -> Option<&JsonValue> {
        self.data
            .value(category.as_str())
            .filter(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::FactId;
    use serde_json::json;

    type Blob = serde_json::Map<String, JsonValue>;

    #[test]
    fn fresh_session_is_seeded_with_all_pools() {
        let mut blob = Blob::new();
        let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        assert!(store.ensure_initialized());

        let snapshot = store.snapshot().expect("all pools present");
        assert_eq!(snapshot.history.len(), 4);
        assert_eq!(snapshot.headquarters.len(), 3);
        assert_eq!(snapshot.cats.len(), 3);
        assert_eq!(blob.len(), 3);
    }

    #[test]
    fn initialization_is_idempotent() {
        let mut blob = Blob::new();
        let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());
        store.ensure_initialized();
        store.set_pool(Category::History, &FactPool::default());
        let before = store.snapshot().expect("initialized");

        assert!(!store.ensure_initialized());

        assert_eq!(store.snapshot().expect("initialized"), before);
        assert!(before.history.is_empty());
    }

    #[test]
    fn any_existing_pool_blocks_seeding() {
        let mut blob = Blob::new();
        blob.insert("cats".to_string(), json!(["cat_fact_2"]));
        let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        assert!(!store.ensure_initialized());

        let err = store.pool(Category::History).unwrap_err();
        assert!(err.to_string().contains("before session initialization"));
        assert_eq!(
            store.pool(Category::Cats).expect("cats present"),
            FactPool::new(vec![FactId::from("cat_fact_2")])
        );
    }

    #[test]
    fn null_values_count_as_absent() {
        let mut blob = Blob::new();
        blob.insert("history".to_string(), JsonValue::Null);
        let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        assert!(store.ensure_initialized());
        assert_eq!(store.pool(Category::History).expect("seeded").len(), 4);
    }

    #[test]
    fn read_before_init_fails() {
        let mut blob = Blob::new();
        let store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        assert!(store.pool(Category::Headquarters).is_err());
        assert!(store.snapshot().is_err());
    }

    #[test]
    fn malformed_pool_is_reported() {
        let mut blob = Blob::new();
        blob.insert("history".to_string(), json!("google_history_fact_1"));
        blob.insert("headquarters".to_string(), json!([]));
        blob.insert("cats".to_string(), json!([]));
        let store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        let err = store.pool(Category::History).unwrap_err();
        assert!(err.to_string().contains("'history' is malformed"));
    }

    #[test]
    fn set_pool_writes_plain_string_lists() {
        let mut blob = Blob::new();
        {
            let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());
            store.set_pool(
                Category::Headquarters,
                &FactPool::new(vec![FactId::from("google_headquarters_fact_2")]),
            );
        }
        assert_eq!(blob["headquarters"], json!(["google_headquarters_fact_2"]));
    }

    #[test]
    fn hash_map_backend_behaves_the_same() {
        let mut blob: HashMap<String, JsonValue> = HashMap::new();
        let mut store = SessionFactStore::new(&mut blob, FactCatalog::standard());

        store.ensure_initialized();

        assert_eq!(store.pool(Category::Cats).expect("seeded").len(), 3);
    }
}
