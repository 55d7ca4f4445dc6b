//! Repository for the `project_categories` table.

use sqlx::PgPool;
use sriweb_core::types::DbId;

use crate::models::category::{CreateProjectCategory, ProjectCategory};

const COLUMNS: &str = "id, name, description, created_at";

pub struct ProjectCategoryRepo;

impl ProjectCategoryRepo {
    /// Insert a category. A duplicate name violates `uq_project_categories_name`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectCategory,
    ) -> Result<ProjectCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_categories (name, description)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_categories ORDER BY name");
        sqlx::query_as::<_, ProjectCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a category. Projects referencing it keep existing with a
    /// null `category_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
