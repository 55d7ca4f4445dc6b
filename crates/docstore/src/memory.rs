//! In-process document store for tests.
//!
//! [`MemoryStore`] follows the ordering rules of the REST store (newest
//! `created_at` first, documents without `created_at` excluded from
//! ordered reads) and can be switched into a failing mode to stand in for
//! an unreachable backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Collection, Document, Fields, Query};
use crate::error::StoreError;
use crate::probe::StoreConnector;
use crate::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    next_id: AtomicU64,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under a caller-chosen key.
    pub async fn insert(&self, collection: Collection, id: &str, fields: Fields) {
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(Document {
                id: id.to_string(),
                fields,
            });
    }

    /// Every document in `collection`, in insertion order.
    pub async fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store set to fail".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        let mut docs: Vec<Document> = self
            .documents(query.collection)
            .await
            .into_iter()
            .filter(|d| d.created_at().is_some() && query.matches(d))
            .collect();
        docs.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        if let Some(limit) = query.limit {
            docs.truncate(limit as usize);
        }
        Ok(docs)
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        self.check()?;
        Ok(self
            .documents(collection)
            .await
            .into_iter()
            .find(|d| d.id == id))
    }

    async fn add(&self, collection: Collection, fields: Fields) -> Result<String, StoreError> {
        self.check()?;
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.insert(collection, &id, fields).await;
        Ok(id)
    }
}

/// Connector handing out a fixed store, or failing as unconfigured.
pub struct StaticConnector {
    store: Option<Arc<dyn DocumentStore>>,
    attempts: Arc<AtomicUsize>,
}

impl StaticConnector {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            store: None,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of `connect` calls.
    pub fn attempts(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.attempts)
    }
}

#[async_trait]
impl StoreConnector for StaticConnector {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.store
            .clone()
            .ok_or_else(|| StoreError::NotConfigured("no primary store in this environment".into()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::document::FieldValue;

    fn fields(name: &str, minutes_ago: i64, featured: bool) -> Fields {
        let mut f = Fields::new();
        f.insert("name".into(), name.into());
        f.insert(
            "created_at".into(),
            FieldValue::Timestamp(Utc::now() - Duration::minutes(minutes_ago)),
        );
        f.insert("featured".into(), featured.into());
        f
    }

    #[tokio::test]
    async fn query_orders_newest_first_and_limits() {
        let store = MemoryStore::new();
        store.insert(Collection::Projects, "a", fields("old", 30, true)).await;
        store.insert(Collection::Projects, "b", fields("new", 10, true)).await;
        store.insert(Collection::Projects, "c", fields("mid", 20, false)).await;

        let all = store.query(&Query::all(Collection::Projects)).await.unwrap();
        let ids: Vec<_> = all.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        let featured = store
            .query(&Query::flagged(Collection::Projects, "featured", 1))
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "b");
    }

    #[tokio::test]
    async fn documents_without_created_at_are_not_ordered_results() {
        let store = MemoryStore::new();
        store.insert(Collection::Projects, "x", Fields::new()).await;
        assert!(store.query(&Query::all(Collection::Projects)).await.unwrap().is_empty());
        assert!(store.get(Collection::Projects, "x").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn add_assigns_keys() {
        let store = MemoryStore::new();
        let a = store.add(Collection::Contacts, Fields::new()).await.unwrap();
        let b = store.add(Collection::Contacts, Fields::new()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.documents(Collection::Contacts).await.len(), 2);
    }

    #[tokio::test]
    async fn failing_store_errors() {
        let store = MemoryStore::new();
        store.set_failing(true);
        assert!(store.query(&Query::all(Collection::Projects)).await.is_err());
        assert!(store.get(Collection::Projects, "a").await.is_err());
        assert!(store.add(Collection::Contacts, Fields::new()).await.is_err());
    }
}
