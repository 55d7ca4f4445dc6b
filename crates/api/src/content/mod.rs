//! Read-through and write-backup services over the two content backends.
//!
//! Every read goes to the primary document store first and substitutes the
//! relational mirror's answer wholesale when the primary is unavailable,
//! errors, or has nothing. Records are never merged across backends. Writes
//! go to the primary and are always copied to the mirror as a backup.
//!
//! None of these operations return an error: backend failures are logged
//! and turned into an empty answer, an absent record, or an
//! acknowledgement.

pub mod normalize;
pub mod reader;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Serialize;
use sriweb_core::types::DbId;
use sriweb_db::models::project::Project;
use sriweb_db::models::testimonial::Testimonial;
use sriweb_db::ContentMirror;
use sriweb_docstore::{Collection, PrimaryProbe};

pub use normalize::{ProjectRecord, Source, TestimonialRecord};
pub use reader::ContentReader;
pub use writer::{ContentWriter, SubmissionOutcome};

/// Binds one entity kind to its collection, its mirror queries and its
/// canonical record.
pub trait ContentKind: Send + Sync + 'static {
    type Row: Send + 'static;
    type Record: From<Source<Self::Row>> + Serialize + Send + 'static;

    /// Name used in log fields.
    const LABEL: &'static str;
    const COLLECTION: Collection;
    /// Boolean field marking a record for the homepage.
    const FEATURED_FIELD: &'static str;

    fn record_id(record: &Self::Record) -> &str;

    fn mirror_all(mirror: &dyn ContentMirror) -> BoxFuture<'_, Result<Vec<Self::Row>, sqlx::Error>>;

    fn mirror_featured(
        mirror: &dyn ContentMirror,
        limit: i64,
    ) -> BoxFuture<'_, Result<Vec<Self::Row>, sqlx::Error>>;

    fn mirror_find(
        mirror: &dyn ContentMirror,
        id: DbId,
    ) -> BoxFuture<'_, Result<Option<Self::Row>, sqlx::Error>>;
}

pub struct Projects;

impl ContentKind for Projects {
    type Row = Project;
    type Record = ProjectRecord;

    const LABEL: &'static str = "project";
    const COLLECTION: Collection = Collection::Projects;
    const FEATURED_FIELD: &'static str = "featured";

    fn record_id(record: &ProjectRecord) -> &str {
        &record.id
    }

    fn mirror_all(mirror: &dyn ContentMirror) -> BoxFuture<'_, Result<Vec<Project>, sqlx::Error>> {
        mirror.list_projects()
    }

    fn mirror_featured(
        mirror: &dyn ContentMirror,
        limit: i64,
    ) -> BoxFuture<'_, Result<Vec<Project>, sqlx::Error>> {
        mirror.list_featured_projects(limit)
    }

    fn mirror_find(
        mirror: &dyn ContentMirror,
        id: DbId,
    ) -> BoxFuture<'_, Result<Option<Project>, sqlx::Error>> {
        mirror.find_project(id)
    }
}

pub struct Testimonials;

impl ContentKind for Testimonials {
    type Row = Testimonial;
    type Record = TestimonialRecord;

    const LABEL: &'static str = "testimonial";
    const COLLECTION: Collection = Collection::Testimonials;
    const FEATURED_FIELD: &'static str = "is_featured";

    fn record_id(record: &TestimonialRecord) -> &str {
        &record.id
    }

    fn mirror_all(
        mirror: &dyn ContentMirror,
    ) -> BoxFuture<'_, Result<Vec<Testimonial>, sqlx::Error>> {
        mirror.list_testimonials()
    }

    fn mirror_featured(
        mirror: &dyn ContentMirror,
        limit: i64,
    ) -> BoxFuture<'_, Result<Vec<Testimonial>, sqlx::Error>> {
        mirror.list_featured_testimonials(limit)
    }

    fn mirror_find(
        mirror: &dyn ContentMirror,
        id: DbId,
    ) -> BoxFuture<'_, Result<Option<Testimonial>, sqlx::Error>> {
        mirror.find_testimonial(id)
    }
}

/// The services handlers use, sharing one probe and one mirror.
pub struct ContentServices {
    pub projects: ContentReader<Projects>,
    pub testimonials: ContentReader<Testimonials>,
    pub writer: ContentWriter,
}

impl ContentServices {
    pub fn new(probe: Arc<PrimaryProbe>, mirror: Arc<dyn ContentMirror>) -> Self {
        Self {
            projects: ContentReader::new(Arc::clone(&probe), Arc::clone(&mirror)),
            testimonials: ContentReader::new(Arc::clone(&probe), Arc::clone(&mirror)),
            writer: ContentWriter::new(probe, mirror),
        }
    }
}
