//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /               -> list
/// GET    /featured       -> featured
/// GET    /categories     -> categories
/// GET    /{id}           -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/featured", get(project::featured))
        .route("/categories", get(project::categories))
        .route("/{id}", get(project::get_by_id))
}
