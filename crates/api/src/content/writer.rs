//! Writes against the primary store, with the mirror as backup for
//! inquiries.

use std::sync::Arc;

use chrono::Utc;
use sriweb_core::content::{validate_rating, InquiryType, DEFAULT_RATING};
use sriweb_core::forms::Inquiry;
use sriweb_db::models::contact_inquiry::CreateContactInquiry;
use sriweb_db::models::project::CreateProject;
use sriweb_db::models::testimonial::CreateTestimonial;
use sriweb_db::ContentMirror;
use sriweb_docstore::{Collection, Fields, PrimaryProbe, CREATED_AT};

/// Acknowledgement when the primary store took the inquiry.
pub const ACK_STORED: &str = "Thank you for your inquiry! We'll get back to you within 24 hours.";

/// Acknowledgement otherwise. The visitor is never shown a failure.
pub const ACK_RECEIVED: &str = "Your message has been received. We'll contact you soon!";

pub const ACK_SERVICE_STORED: &str =
    "Service inquiry submitted successfully! We'll contact you soon.";

pub const ACK_SERVICE_RECEIVED: &str =
    "Your inquiry has been received. We'll get back to you soon!";

/// Newsletter sign-ups get the same reply whichever backend kept them.
pub const ACK_SUBSCRIBED: &str = "Successfully subscribed to our newsletter!";

/// What happened to a submitted inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub inquiry_type: InquiryType,
    pub stored_in_primary: bool,
    /// Key assigned by the primary store.
    pub primary_id: Option<String>,
    pub stored_in_mirror: bool,
}

impl SubmissionOutcome {
    pub fn acknowledgement(&self) -> &'static str {
        match (self.inquiry_type, self.stored_in_primary) {
            (InquiryType::Newsletter, _) => ACK_SUBSCRIBED,
            (InquiryType::Service, true) => ACK_SERVICE_STORED,
            (InquiryType::Service, false) => ACK_SERVICE_RECEIVED,
            (_, true) => ACK_STORED,
            (_, false) => ACK_RECEIVED,
        }
    }

    /// Neither backend kept the inquiry.
    pub fn is_lost(&self) -> bool {
        !self.stored_in_primary && !self.stored_in_mirror
    }
}

pub struct ContentWriter {
    probe: Arc<PrimaryProbe>,
    mirror: Arc<dyn ContentMirror>,
}

impl ContentWriter {
    pub fn new(probe: Arc<PrimaryProbe>, mirror: Arc<dyn ContentMirror>) -> Self {
        Self { probe, mirror }
    }

    /// Store an inquiry in the primary, then copy it to the mirror whatever
    /// the primary did.
    ///
    /// Expects already-validated input. Never fails; see
    /// [`SubmissionOutcome::acknowledgement`] for what the visitor is told.
    pub async fn submit_inquiry(&self, inquiry: &Inquiry) -> SubmissionOutcome {
        let primary_id = self
            .add_to_primary(Collection::Contacts, inquiry_fields(inquiry))
            .await;

        let stored_in_mirror = match self
            .mirror
            .record_inquiry(&CreateContactInquiry::from(inquiry))
            .await
        {
            Ok(row) => {
                tracing::debug!(id = row.id, "Inquiry copied to mirror");
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    inquiry_type = inquiry.inquiry_type.as_str(),
                    "Failed to copy inquiry to mirror"
                );
                false
            }
        };

        let outcome = SubmissionOutcome {
            inquiry_type: inquiry.inquiry_type,
            stored_in_primary: primary_id.is_some(),
            primary_id,
            stored_in_mirror,
        };
        if outcome.is_lost() {
            tracing::error!(
                inquiry_type = inquiry.inquiry_type.as_str(),
                email = %inquiry.email,
                "Inquiry was not stored in either backend"
            );
        }
        outcome
    }

    /// Add a project to the primary store, returning its key.
    pub async fn create_project(&self, input: &CreateProject) -> Option<String> {
        self.add_to_primary(Collection::Projects, project_fields(input))
            .await
    }

    /// Add a testimonial to the primary store, returning its key.
    ///
    /// A rating outside `1..=5` is refused.
    pub async fn create_testimonial(&self, input: &CreateTestimonial) -> Option<String> {
        let rating = input.rating.unwrap_or(DEFAULT_RATING);
        if let Err(e) = validate_rating(rating) {
            tracing::warn!(error = %e, "Refusing testimonial");
            return None;
        }
        self.add_to_primary(Collection::Testimonials, testimonial_fields(input, rating))
            .await
    }

    async fn add_to_primary(&self, collection: Collection, fields: Fields) -> Option<String> {
        let Some(store) = self.probe.handle().await else {
            tracing::debug!(
                collection = collection.name(),
                "Primary store unavailable, skipping write"
            );
            return None;
        };
        match store.add(collection, fields).await {
            Ok(id) => {
                tracing::info!(collection = collection.name(), id = %id, "Document created");
                Some(id)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    collection = collection.name(),
                    "Primary store write failed"
                );
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Document shapes
// ---------------------------------------------------------------------------

fn inquiry_fields(inquiry: &Inquiry) -> Fields {
    let mut fields = Fields::new();
    for (key, value) in &inquiry.details {
        fields.insert(key.clone(), value.as_str().into());
    }
    fields.insert("name".into(), inquiry.name.as_str().into());
    fields.insert("email".into(), inquiry.email.as_str().into());
    fields.insert("phone".into(), inquiry.phone.as_str().into());
    fields.insert("inquiry_type".into(), inquiry.inquiry_type.as_str().into());
    fields.insert("message".into(), inquiry.message.as_str().into());
    fields.insert("responded".into(), false.into());
    fields.insert(CREATED_AT.into(), Utc::now().into());
    fields
}

fn project_fields(input: &CreateProject) -> Fields {
    let now = Utc::now();
    let mut fields = Fields::new();
    fields.insert("name".into(), input.name.as_str().into());
    fields.insert("location".into(), input.location.as_str().into());
    fields.insert(
        "status".into(),
        input.status.unwrap_or_default().as_str().into(),
    );
    fields.insert("description".into(), input.description.as_str().into());
    fields.insert("image_url".into(), input.image_url.clone().into());
    fields.insert(
        "completion_date".into(),
        input
            .completion_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .into(),
    );
    fields.insert("category".into(), input.category_id.into());
    fields.insert("featured".into(), input.featured.unwrap_or(false).into());
    fields.insert(CREATED_AT.into(), now.into());
    fields.insert("updated_at".into(), now.into());
    fields
}

fn testimonial_fields(input: &CreateTestimonial, rating: i32) -> Fields {
    let mut fields = Fields::new();
    fields.insert("client_name".into(), input.client_name.as_str().into());
    fields.insert(
        "client_position".into(),
        input.client_position.clone().unwrap_or_default().into(),
    );
    fields.insert(
        "project_name".into(),
        input.project_name.clone().unwrap_or_default().into(),
    );
    fields.insert(
        "testimonial_text".into(),
        input.testimonial_text.as_str().into(),
    );
    fields.insert("rating".into(), rating.into());
    fields.insert("client_image".into(), input.client_image.clone().into());
    fields.insert(
        "is_featured".into(),
        input.is_featured.unwrap_or(false).into(),
    );
    fields.insert(CREATED_AT.into(), Utc::now().into());
    fields
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
