//! The content services' view of the relational mirror.
//!
//! [`ContentMirror`] narrows the repositories down to the handful of calls
//! the read-through and write-backup paths need, so those paths can be
//! exercised without a live database.

use async_trait::async_trait;
use sqlx::PgPool;
use sriweb_core::types::DbId;

use crate::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
use crate::models::project::Project;
use crate::models::testimonial::Testimonial;
use crate::repositories::{ContactInquiryRepo, ProjectRepo, TestimonialRepo};

#[async_trait]
pub trait ContentMirror: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error>;

    async fn list_featured_projects(&self, limit: i64) -> Result<Vec<Project>, sqlx::Error>;

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, sqlx::Error>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, sqlx::Error>;

    async fn list_featured_testimonials(&self, limit: i64)
        -> Result<Vec<Testimonial>, sqlx::Error>;

    async fn find_testimonial(&self, id: DbId) -> Result<Option<Testimonial>, sqlx::Error>;

    async fn record_inquiry(
        &self,
        input: &CreateContactInquiry,
    ) -> Result<ContactInquiry, sqlx::Error>;
}

#[async_trait]
impl ContentMirror for PgPool {
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list(self).await
    }

    async fn list_featured_projects(&self, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list_featured(self, limit).await
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(self, id).await
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, sqlx::Error> {
        TestimonialRepo::list(self).await
    }

    async fn list_featured_testimonials(
        &self,
        limit: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        TestimonialRepo::list_featured(self, limit).await
    }

    async fn find_testimonial(&self, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        TestimonialRepo::find_by_id(self, id).await
    }

    async fn record_inquiry(
        &self,
        input: &CreateContactInquiry,
    ) -> Result<ContactInquiry, sqlx::Error> {
        ContactInquiryRepo::create(self, input).await
    }
}
