//! In-memory `DataStore` with failure injection.
//!
//! Applies `ListOptions` exactly as the hosted service does and counts
//! calls, so controller tests can assert "exactly one request" without a
//! network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::query::{Collection, ListOptions};
use crate::store::DataStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every call fails, as if the service were unreachable.
    pub fn unreachable() -> Self {
        let store = Self::new();
        store.set_fail_reads(true);
        store.set_fail_writes(true);
        store
    }

    /// Append a record to `collection` as-is, bypassing write rules.
    pub async fn insert<T: Serialize>(&self, collection: Collection, record: &T) -> Result<(), ApiError> {
        let value = serde_json::to_value(record).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.collections
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(value);
        Ok(())
    }

    pub async fn records(&self, collection: Collection) -> Vec<Value> {
        self.collections
            .lock()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list(&self, collection: Collection, options: &ListOptions) -> Result<Vec<Value>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("memory store: reads disabled".to_string()));
        }
        let records = self.records(collection).await;
        Ok(options.apply(records))
    }

    async fn create(&self, collection: Collection, fields: Value) -> Result<Value, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if !collection.accepts_writes() {
            return Err(ApiError::ReadOnlyCollection(collection));
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("memory store: writes disabled".to_string()));
        }
        let Value::Object(mut record) = fields else {
            return Err(ApiError::SerializationError(
                "record must be a JSON object".to_string(),
            ));
        };
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        record.insert("id".to_string(), Value::String(format!("{collection}-{id}")));
        let record = Value::Object(record);
        self.collections
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_applies_filter_and_counts_calls() {
        let store = MemoryStore::new();
        store
            .insert(Collection::Procedures, &json!({"slug": "facelift"}))
            .await
            .unwrap();
        store
            .insert(Collection::Procedures, &json!({"slug": "rhinoplasty"}))
            .await
            .unwrap();

        let out = store
            .list(
                Collection::Procedures,
                &ListOptions::new().filter_eq("slug", "facelift"),
            )
            .await
            .unwrap();
        assert_eq!(out, vec![json!({"slug": "facelift"})]);
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_collection_lists_empty() {
        let store = MemoryStore::new();
        let out = store
            .list(Collection::BlogPosts, &ListOptions::new())
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists() {
        let store = MemoryStore::new();
        let created = store
            .create(Collection::Consultations, json!({"name": "Neema"}))
            .await
            .unwrap();
        assert_eq!(created["id"], "consultations-1");
        assert_eq!(store.records(Collection::Consultations).await, vec![created]);
    }

    #[tokio::test]
    async fn create_rejects_read_only_and_non_objects() {
        let store = MemoryStore::new();
        let err = store
            .create(Collection::BlogPosts, json!({"title": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReadOnlyCollection(_)));

        let err = store
            .create(Collection::Consultations, json!("just a string"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SerializationError(_)));
    }

    #[tokio::test]
    async fn unreachable_store_fails_everything() {
        let store = MemoryStore::unreachable();
        assert!(store
            .list(Collection::Testimonials, &ListOptions::new())
            .await
            .is_err());
        assert!(store
            .create(Collection::Consultations, json!({}))
            .await
            .is_err());
        assert!(store.records(Collection::Consultations).await.is_empty());
    }
}
