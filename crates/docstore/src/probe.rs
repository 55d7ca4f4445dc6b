//! Availability probe for the primary document store.
//!
//! The probe connects lazily on first use and memoizes the outcome: a
//! successful connection is shared by every later caller, and a failed one
//! is not retried until [`PrimaryProbe::reset`] starts a new episode. The
//! failure is logged once per episode.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::DocumentStore;

/// Produces a connected [`DocumentStore`].
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>, StoreError>;
}

enum Slot {
    Untried,
    Ready(Arc<dyn DocumentStore>),
    Failed,
}

/// Lazily-initialised, memoized handle to the primary store.
///
/// Designed to be created once at startup, wrapped in `Arc`, and shared by
/// the content services.
pub struct PrimaryProbe {
    connector: Box<dyn StoreConnector>,
    slot: RwLock<Slot>,
}

impl PrimaryProbe {
    pub fn new(connector: impl StoreConnector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            slot: RwLock::new(Slot::Untried),
        }
    }

    /// The connected store, or `None` if the primary is unavailable.
    ///
    /// Connects on the first call of an episode; concurrent first callers
    /// wait for that single attempt.
    pub async fn handle(&self) -> Option<Arc<dyn DocumentStore>> {
        {
            let slot = self.slot.read().await;
            match &*slot {
                Slot::Ready(store) => return Some(Arc::clone(store)),
                Slot::Failed => return None,
                Slot::Untried => {}
            }
        }

        let mut slot = self.slot.write().await;
        // Another caller may have finished connecting while we waited.
        match &*slot {
            Slot::Ready(store) => return Some(Arc::clone(store)),
            Slot::Failed => return None,
            Slot::Untried => {}
        }

        match self.connector.connect().await {
            Ok(store) => {
                tracing::info!("Primary document store connected");
                *slot = Slot::Ready(Arc::clone(&store));
                Some(store)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Primary document store unavailable, serving from the relational mirror"
                );
                *slot = Slot::Failed;
                None
            }
        }
    }

    /// Whether the primary store is configured and connected.
    pub async fn is_primary_available(&self) -> bool {
        self.handle().await.is_some()
    }

    /// Forget the memoized outcome so the next call connects again.
    pub async fn reset(&self) {
        *self.slot.write().await = Slot::Untried;
    }
}
