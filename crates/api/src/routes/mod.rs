pub mod company;
pub mod health;
pub mod inquiry;
pub mod project;
pub mod testimonial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list
/// /projects/featured                 featured (?limit=)
/// /projects/{id}                     project + related
///
/// /testimonials                      list
/// /testimonials/featured             featured (?limit=)
/// /testimonials/{id}                 get_by_id
///
/// /contact                           contact form (POST)
/// /service-inquiry                   service inquiry form (POST)
/// /newsletter                        newsletter signup (POST)
///
/// /company                           company profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/testimonials", testimonial::router())
        .merge(inquiry::router())
        .nest("/company", company::router())
}
