//! Read-through access to one kind of content.

use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;
use sriweb_core::content::clamp_featured_limit;
use sriweb_core::types::DbId;
use sriweb_db::ContentMirror;
use sriweb_docstore::{PrimaryProbe, Query};

use super::{ContentKind, Source};

fn record<K: ContentKind>(source: Source<K::Row>) -> K::Record {
    source.into()
}

/// Reads records of kind `K`, primary first, mirror as a full substitute.
pub struct ContentReader<K> {
    probe: Arc<PrimaryProbe>,
    mirror: Arc<dyn ContentMirror>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ContentKind> ContentReader<K> {
    pub fn new(probe: Arc<PrimaryProbe>, mirror: Arc<dyn ContentMirror>) -> Self {
        Self {
            probe,
            mirror,
            _kind: PhantomData,
        }
    }

    /// Every record, newest first.
    pub async fn get_all(&self) -> Vec<K::Record> {
        if let Some(records) = self.from_primary(&Query::all(K::COLLECTION)).await {
            return records;
        }
        self.from_mirror(K::mirror_all(self.mirror.as_ref())).await
    }

    /// Featured records, newest first, at most `limit` (default 6, clamped
    /// to `1..=24`).
    pub async fn get_featured(&self, limit: Option<i64>) -> Vec<K::Record> {
        let limit = clamp_featured_limit(limit);
        let query = Query::flagged(K::COLLECTION, K::FEATURED_FIELD, limit as u32);

        let mut records = match self.from_primary(&query).await {
            Some(records) => records,
            None => {
                self.from_mirror(K::mirror_featured(self.mirror.as_ref(), limit))
                    .await
            }
        };
        records.truncate(limit as usize);
        records
    }

    /// Featured records other than `id`, at most `limit`.
    pub async fn get_featured_excluding(&self, id: &str, limit: i64) -> Vec<K::Record> {
        let mut records = self.get_featured(Some(limit + 1)).await;
        records.retain(|r| K::record_id(r) != id);
        records.truncate(limit.max(0) as usize);
        records
    }

    /// The record with key `id` in whichever backend has it.
    ///
    /// Mirror keys are integers, so any other `id` is absent there.
    pub async fn get_by_id(&self, id: &str) -> Option<K::Record> {
        if let Some(store) = self.probe.handle().await {
            match store.get(K::COLLECTION, id).await {
                Ok(Some(doc)) => return Some(record::<K>(Source::Document(doc))),
                Ok(None) => {
                    tracing::debug!(kind = K::LABEL, id, "Not in primary store, trying mirror");
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        kind = K::LABEL,
                        id,
                        "Primary store lookup failed, trying mirror"
                    );
                }
            }
        }

        let Ok(db_id) = id.parse::<DbId>() else {
            tracing::debug!(kind = K::LABEL, id, "Key is not a mirror id");
            return None;
        };
        match K::mirror_find(self.mirror.as_ref(), db_id).await {
            Ok(row) => row.map(|r| record::<K>(Source::Row(r))),
            Err(e) => {
                tracing::error!(error = %e, kind = K::LABEL, id, "Mirror lookup failed");
                None
            }
        }
    }

    /// Records from the primary, or `None` when the mirror should answer
    /// instead.
    async fn from_primary(&self, query: &Query) -> Option<Vec<K::Record>> {
        let store = self.probe.handle().await?;
        match store.query(query).await {
            Ok(docs) if !docs.is_empty() => Some(
                docs.into_iter()
                    .map(|d| record::<K>(Source::Document(d)))
                    .collect(),
            ),
            Ok(_) => {
                tracing::debug!(kind = K::LABEL, "Primary store has no records, using mirror");
                None
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = K::LABEL,
                    "Primary store query failed, using mirror"
                );
                None
            }
        }
    }

    async fn from_mirror(
        &self,
        rows: BoxFuture<'_, Result<Vec<K::Row>, sqlx::Error>>,
    ) -> Vec<K::Record> {
        match rows.await {
            Ok(rows) => rows
                .into_iter()
                .map(|r| record::<K>(Source::Row(r)))
                .collect(),
            Err(e) => {
                tracing::error!(error = %e, kind = K::LABEL, "Mirror query failed");
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
