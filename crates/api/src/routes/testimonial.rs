//! Route definitions for the `/testimonials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /               -> list
/// GET    /featured       -> featured
/// GET    /{id}           -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list))
        .route("/featured", get(testimonial::featured))
        .route("/{id}", get(testimonial::get_by_id))
}
