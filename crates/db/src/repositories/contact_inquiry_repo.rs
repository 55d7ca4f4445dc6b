//! Repository for the `contact_inquiries` table.

use sqlx::PgPool;
use sriweb_core::types::DbId;

use crate::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};

const COLUMNS: &str =
    "id, name, email, phone, message, inquiry_type, details, responded, created_at";

pub struct ContactInquiryRepo;

impl ContactInquiryRepo {
    /// Insert an inquiry. `responded` always starts out `false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactInquiry,
    ) -> Result<ContactInquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_inquiries (name, email, phone, message, inquiry_type, details)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.inquiry_type.as_str())
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// List all inquiries, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactInquiry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_inquiries ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactInquiry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Mark an inquiry as responded (or not). Returns `true` if a row was updated.
    pub async fn set_responded(
        pool: &PgPool,
        id: DbId,
        responded: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contact_inquiries SET responded = $2 WHERE id = $1")
            .bind(id)
            .bind(responded)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
