use axum::routing::post;
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Form submission routes, merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(inquiry::contact))
        .route("/service-inquiry", post(inquiry::service_inquiry))
        .route("/newsletter", post(inquiry::newsletter))
}
