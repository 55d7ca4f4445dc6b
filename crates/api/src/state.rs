use std::sync::Arc;

use sriweb_docstore::PrimaryProbe;

use crate::content::ContentServices;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Relational mirror connection pool.
    pub pool: sriweb_db::DbPool,
    /// Memoized handle to the primary document store.
    pub probe: Arc<PrimaryProbe>,
    /// Read-through and write-backup services over both backends.
    pub content: Arc<ContentServices>,
}
