//! In-process backends for the content service unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sriweb_core::content::InquiryType;
use sriweb_core::types::DbId;
use sriweb_db::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
use sriweb_db::models::project::Project;
use sriweb_db::models::testimonial::Testimonial;
use sriweb_db::ContentMirror;
use sriweb_docstore::memory::{MemoryStore, StaticConnector};
use sriweb_docstore::{Collection, FieldValue, Fields, PrimaryProbe};

/// Mirror backed by vectors, optionally failing every call.
#[derive(Default)]
pub struct FakeMirror {
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub inquiries: Mutex<Vec<CreateContactInquiry>>,
    pub failing: bool,
}

impl FakeMirror {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }

    pub fn recorded_inquiries(&self) -> Vec<CreateContactInquiry> {
        self.inquiries.lock().unwrap().clone()
    }
}

fn newest_first<T: Clone>(rows: &[T], created: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|r| std::cmp::Reverse(created(r)));
    rows
}

#[async_trait]
impl ContentMirror for FakeMirror {
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error> {
        self.check()?;
        Ok(newest_first(&self.projects, |p| p.created_at))
    }

    async fn list_featured_projects(&self, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let mut rows = self.list_projects().await?;
        rows.retain(|p| p.featured);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        self.check()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, sqlx::Error> {
        self.check()?;
        Ok(newest_first(&self.testimonials, |t| t.created_at))
    }

    async fn list_featured_testimonials(
        &self,
        limit: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let mut rows = self.list_testimonials().await?;
        rows.retain(|t| t.is_featured);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn find_testimonial(&self, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        self.check()?;
        Ok(self.testimonials.iter().find(|t| t.id == id).cloned())
    }

    async fn record_inquiry(
        &self,
        input: &CreateContactInquiry,
    ) -> Result<ContactInquiry, sqlx::Error> {
        self.check()?;
        let mut inquiries = self.inquiries.lock().unwrap();
        inquiries.push(input.clone());
        Ok(ContactInquiry {
            id: inquiries.len() as DbId,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            message: input.message.clone(),
            inquiry_type: input.inquiry_type.as_str().to_string(),
            details: input.details.clone(),
            responded: false,
            created_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn project_row(id: DbId, name: &str, minutes_ago: i64, featured: bool) -> Project {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    Project {
        id,
        name: name.to_string(),
        location: "Tirupati".into(),
        status: "ongoing".into(),
        description: format!("{name} description"),
        image_url: None,
        completion_date: None,
        category_id: None,
        featured,
        created_at,
        updated_at: created_at,
    }
}

pub fn testimonial_row(id: DbId, client: &str, minutes_ago: i64, featured: bool) -> Testimonial {
    Testimonial {
        id,
        client_name: client.to_string(),
        client_position: String::new(),
        project_name: String::new(),
        testimonial_text: format!("{client} was happy"),
        rating: 5,
        client_image: None,
        is_featured: featured,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

pub fn doc_fields(name_field: &str, name: &str, minutes_ago: i64, flag: (&str, bool)) -> Fields {
    let mut fields = Fields::new();
    fields.insert(name_field.to_string(), name.into());
    fields.insert(
        "created_at".into(),
        FieldValue::Timestamp(Utc::now() - Duration::minutes(minutes_ago)),
    );
    fields.insert(flag.0.to_string(), flag.1.into());
    fields
}

pub async fn seed_project(store: &MemoryStore, id: &str, name: &str, minutes_ago: i64, featured: bool) {
    store
        .insert(
            Collection::Projects,
            id,
            doc_fields("name", name, minutes_ago, ("featured", featured)),
        )
        .await;
}

pub async fn seed_testimonial(
    store: &MemoryStore,
    id: &str,
    client: &str,
    minutes_ago: i64,
    featured: bool,
) {
    store
        .insert(
            Collection::Testimonials,
            id,
            doc_fields("client_name", client, minutes_ago, ("is_featured", featured)),
        )
        .await;
}

pub fn probe_with(store: Arc<MemoryStore>) -> Arc<PrimaryProbe> {
    Arc::new(PrimaryProbe::new(StaticConnector::with_store(store)))
}

pub fn unavailable_probe() -> Arc<PrimaryProbe> {
    Arc::new(PrimaryProbe::new(StaticConnector::unavailable()))
}

pub fn general_inquiry() -> sriweb_core::forms::Inquiry {
    sriweb_core::forms::Inquiry {
        name: "Ravi Kumar".into(),
        email: "ravi@example.com".into(),
        phone: "+919014376635".into(),
        inquiry_type: InquiryType::General,
        message: "Looking for a 3BHK in Tirupati.".into(),
        details: Default::default(),
    }
}
