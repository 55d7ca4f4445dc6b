//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use sriweb_core::error::CoreError;

use crate::content::TestimonialRecord;
use crate::error::{AppError, AppResult};
use crate::query::FeaturedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/testimonials
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<TestimonialRecord>>> {
    let testimonials = state.content.testimonials.get_all().await;
    Json(DataResponse { data: testimonials })
}

/// GET /api/v1/testimonials/featured?limit=
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Json<DataResponse<Vec<TestimonialRecord>>> {
    let testimonials = state.content.testimonials.get_featured(params.limit).await;
    Json(DataResponse { data: testimonials })
}

/// GET /api/v1/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<TestimonialRecord>>> {
    let testimonial = state
        .content
        .testimonials
        .get_by_id(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}
