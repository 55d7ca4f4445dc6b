use axum::extract::State;
use axum::Json;
use sriweb_core::company::CompanyProfile;
use sriweb_db::repositories::CompanyInfoRepo;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/company
///
/// The stored company info, or the built-in profile when none is stored or
/// the mirror cannot be read.
pub async fn get(State(state): State<AppState>) -> Json<DataResponse<CompanyProfile>> {
    let profile = match CompanyInfoRepo::get(&state.pool).await {
        Ok(Some(info)) => info.into(),
        Ok(None) => CompanyProfile::default(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load company info, using defaults");
            CompanyProfile::default()
        }
    };
    Json(DataResponse { data: profile })
}
