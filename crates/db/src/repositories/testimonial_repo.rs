//! Repository for the `testimonials` table.

use sqlx::PgPool;
use sriweb_core::types::DbId;

use crate::models::testimonial::{CreateTestimonial, Testimonial};

const COLUMNS: &str = "id, client_name, client_position, project_name, testimonial_text, \
                       rating, client_image, is_featured, created_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial. Rating defaults to 5; values outside 1..=5
    /// violate `ck_testimonials_rating`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (client_name, client_position, project_name, testimonial_text, rating, client_image, is_featured)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, COALESCE($5, 5), $6, COALESCE($7, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.client_name)
            .bind(&input.client_position)
            .bind(&input.project_name)
            .bind(&input.testimonial_text)
            .bind(input.rating)
            .bind(&input.client_image)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all testimonials, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// List up to `limit` featured testimonials, most recent first.
    pub async fn list_featured(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_featured
             ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Toggle the homepage flag. Returns `true` if a row was updated.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        is_featured: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE testimonials SET is_featured = $2 WHERE id = $1")
            .bind(id)
            .bind(is_featured)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
