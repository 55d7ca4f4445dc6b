//! Repository for the `projects` table.

use sqlx::PgPool;
use sriweb_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, status, description, image_url, completion_date, \
                       category_id, featured, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` the row defaults to `planning`; `featured`
    /// defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, location, status, description, image_url, completion_date, category_id, featured)
             VALUES ($1, $2, COALESCE($3, 'planning'), $4, $5, $6, $7, COALESCE($8, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.completion_date)
            .bind(input.category_id)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List up to `limit` featured projects, most recent first.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE featured
             ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                status = COALESCE($4, status),
                description = COALESCE($5, description),
                image_url = COALESCE($6, image_url),
                completion_date = COALESCE($7, completion_date),
                category_id = COALESCE($8, category_id),
                featured = COALESCE($9, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.completion_date)
            .bind(input.category_id)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Toggle the homepage flag. Returns `true` if a row was updated.
    pub async fn set_featured(pool: &PgPool, id: DbId, featured: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET featured = $2 WHERE id = $1")
            .bind(id)
            .bind(featured)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
