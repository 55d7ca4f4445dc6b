//! Testimonial entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sriweb_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub client_position: String,
    pub project_name: String,
    pub testimonial_text: String,
    pub rating: i32,
    pub client_image: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub client_name: String,
    pub client_position: Option<String>,
    pub project_name: Option<String>,
    pub testimonial_text: String,
    /// Defaults to 5 if omitted.
    pub rating: Option<i32>,
    pub client_image: Option<String>,
    pub is_featured: Option<bool>,
}
