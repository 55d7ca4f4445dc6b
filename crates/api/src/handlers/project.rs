//! Handlers for the `/projects` resource.
//!
//! Reads go through the read-through service, so the same JSON shape comes
//! back whichever backend answered.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use sriweb_core::content::RELATED_PROJECTS_LIMIT;
use sriweb_core::error::CoreError;
use sriweb_db::models::category::ProjectCategory;
use sriweb_db::repositories::ProjectCategoryRepo;

use crate::content::ProjectRecord;
use crate::error::{AppError, AppResult};
use crate::query::FeaturedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A project with other featured projects to show beside it.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: ProjectRecord,
    pub related_projects: Vec<ProjectRecord>,
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<ProjectRecord>>> {
    let projects = state.content.projects.get_all().await;
    Json(DataResponse { data: projects })
}

/// GET /api/v1/projects/featured?limit=
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Json<DataResponse<Vec<ProjectRecord>>> {
    let projects = state.content.projects.get_featured(params.limit).await;
    Json(DataResponse { data: projects })
}

/// GET /api/v1/projects/categories
///
/// Categories only live in the mirror; an unreadable mirror gives an empty
/// list, like the project listing it sits beside.
pub async fn categories(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<ProjectCategory>>> {
    let categories = ProjectCategoryRepo::list(&state.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load project categories");
            Vec::new()
        });
    Json(DataResponse { data: categories })
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = state
        .content
        .projects
        .get_by_id(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.clone(),
        }))?;
    let related_projects = state
        .content
        .projects
        .get_featured_excluding(&project.id, RELATED_PROJECTS_LIMIT)
        .await;

    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            related_projects,
        },
    }))
}
