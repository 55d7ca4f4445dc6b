//! Project entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sriweb_core::content::ProjectStatus;
use sriweb_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// `status` is kept as stored text; the `ck_projects_status` constraint
/// limits it to the [`ProjectStatus`] values.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub status: String,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    /// Defaults to `planning` if omitted.
    pub status: Option<ProjectStatus>,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<ProjectStatus>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub featured: Option<bool>,
}
