//! Primary document store client.
//!
//! Site content is authoritative in a Firestore-style document database
//! organised into one flat collection per entity kind. This crate provides
//! the schema-less [`Document`] representation, the [`DocumentStore`]
//! trait with its REST implementation, and the [`PrimaryProbe`] that
//! lazily connects once and remembers the outcome.

pub mod config;
pub mod document;
pub mod error;
pub mod firestore;
pub mod probe;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

use async_trait::async_trait;

pub use config::FirestoreConfig;
pub use document::{Collection, Document, FieldValue, Fields, Query, CREATED_AT};
pub use error::StoreError;
pub use firestore::{FirestoreConnector, FirestoreStore};
pub use probe::{PrimaryProbe, StoreConnector};

/// Read/insert access to the primary document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run `query`, returning documents ordered by `created_at` descending.
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError>;

    /// Fetch a single document. A missing document is `Ok(None)`.
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError>;

    /// Insert a document with a backend-assigned key, returning that key.
    async fn add(&self, collection: Collection, fields: Fields) -> Result<String, StoreError>;
}
