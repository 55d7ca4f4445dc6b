use axum::routing::get;
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/company`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(company::get))
}
