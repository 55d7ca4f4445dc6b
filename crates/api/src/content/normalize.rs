//! Canonical record shapes shared by both backends.
//!
//! A record read from the primary store is a schema-less [`Document`]; one
//! read from the mirror is a typed row. [`Source`] tags which one we have,
//! and the `From<Source<_>>` impls below map either into the same canonical
//! struct. Identifiers are always strings, dates are ISO-8601 text, and
//! missing or ill-typed optional fields become `""` (or the field's default)
//! rather than errors.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use sriweb_core::content::{validate_rating, ProjectStatus, DEFAULT_RATING};
use sriweb_db::models::project::Project;
use sriweb_db::models::testimonial::Testimonial;
use sriweb_docstore::{Document, FieldValue};

/// Where a record was read from.
#[derive(Debug, Clone)]
pub enum Source<R> {
    Document(Document),
    Row(R),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Stored value, e.g. `on_hold`.
    pub status: String,
    /// Display label, e.g. `On Hold`.
    pub status_label: String,
    pub description: String,
    pub image_url: String,
    /// `YYYY-MM-DD`, or empty.
    pub completion_date: String,
    /// Category reference, or empty.
    pub category: String,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialRecord {
    pub id: String,
    pub client_name: String,
    pub client_position: String,
    pub project_name: String,
    pub testimonial_text: String,
    pub rating: i32,
    pub client_image: String,
    pub is_featured: bool,
    pub created_at: String,
}

/// Render a timestamp the way every record exposes it.
pub fn iso_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_status(raw: &str) -> ProjectStatus {
    ProjectStatus::from_name(raw).unwrap_or_default()
}

fn rating(raw: Option<i64>) -> i32 {
    raw.and_then(|r| i32::try_from(r).ok())
        .filter(|r| validate_rating(*r).is_ok())
        .unwrap_or(DEFAULT_RATING)
}

// ---------------------------------------------------------------------------
// Document field access
// ---------------------------------------------------------------------------

fn text(doc: &Document, field: &str) -> String {
    doc.get(field)
        .and_then(FieldValue::as_str)
        .unwrap_or_default()
        .to_string()
}

fn flag(doc: &Document, field: &str) -> bool {
    doc.get(field).and_then(FieldValue::as_bool).unwrap_or(false)
}

/// A timestamp field, or a string some writer stored in its place.
fn timestamp_text(doc: &Document, field: &str) -> String {
    match doc.get(field) {
        Some(FieldValue::Timestamp(ts)) => iso_timestamp(*ts),
        Some(FieldValue::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn date_text(doc: &Document, field: &str) -> String {
    match doc.get(field) {
        Some(FieldValue::Timestamp(ts)) => iso_date(ts.date_naive()),
        Some(FieldValue::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Category references are strings in documents but some were written as
/// the mirror's numeric id.
fn reference_text(doc: &Document, field: &str) -> String {
    match doc.get(field) {
        Some(FieldValue::String(s)) => s.clone(),
        Some(FieldValue::Integer(n)) => n.to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

impl From<Source<Project>> for ProjectRecord {
    fn from(source: Source<Project>) -> Self {
        match source {
            Source::Document(doc) => {
                let status = parse_status(&text(&doc, "status"));
                Self {
                    name: text(&doc, "name"),
                    location: text(&doc, "location"),
                    status: status.as_str().to_string(),
                    status_label: status.label().to_string(),
                    description: text(&doc, "description"),
                    image_url: text(&doc, "image_url"),
                    completion_date: date_text(&doc, "completion_date"),
                    category: reference_text(&doc, "category"),
                    featured: flag(&doc, "featured"),
                    created_at: timestamp_text(&doc, "created_at"),
                    updated_at: timestamp_text(&doc, "updated_at"),
                    id: doc.id,
                }
            }
            Source::Row(row) => {
                let status = parse_status(&row.status);
                Self {
                    id: row.id.to_string(),
                    name: row.name,
                    location: row.location,
                    status: status.as_str().to_string(),
                    status_label: status.label().to_string(),
                    description: row.description,
                    image_url: row.image_url.unwrap_or_default(),
                    completion_date: row.completion_date.map(iso_date).unwrap_or_default(),
                    category: row.category_id.map(|c| c.to_string()).unwrap_or_default(),
                    featured: row.featured,
                    created_at: iso_timestamp(row.created_at),
                    updated_at: iso_timestamp(row.updated_at),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

impl From<Source<Testimonial>> for TestimonialRecord {
    fn from(source: Source<Testimonial>) -> Self {
        match source {
            Source::Document(doc) => Self {
                client_name: text(&doc, "client_name"),
                client_position: text(&doc, "client_position"),
                project_name: text(&doc, "project_name"),
                testimonial_text: text(&doc, "testimonial_text"),
                rating: rating(doc.get("rating").and_then(FieldValue::as_i64)),
                client_image: text(&doc, "client_image"),
                is_featured: flag(&doc, "is_featured"),
                created_at: timestamp_text(&doc, "created_at"),
                id: doc.id,
            },
            Source::Row(row) => Self {
                id: row.id.to_string(),
                client_name: row.client_name,
                client_position: row.client_position,
                project_name: row.project_name,
                testimonial_text: row.testimonial_text,
                rating: rating(Some(row.rating.into())),
                client_image: row.client_image.unwrap_or_default(),
                is_featured: row.is_featured,
                created_at: iso_timestamp(row.created_at),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sriweb_docstore::Fields;

    use super::*;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
    }

    fn project_row() -> Project {
        Project {
            id: 7,
            name: "Sri Nilayam".into(),
            location: "Tirupati".into(),
            status: "on_hold".into(),
            description: "Twin towers".into(),
            image_url: None,
            completion_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            category_id: Some(2),
            featured: true,
            created_at: created(),
            updated_at: created(),
        }
    }

    fn project_doc() -> Document {
        let mut fields = Fields::new();
        fields.insert("name".into(), "Sri Nilayam".into());
        fields.insert("location".into(), "Tirupati".into());
        fields.insert("status".into(), "on_hold".into());
        fields.insert("description".into(), "Twin towers".into());
        fields.insert(
            "completion_date".into(),
            FieldValue::Timestamp(Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap()),
        );
        fields.insert("category".into(), FieldValue::Integer(2));
        fields.insert("featured".into(), true.into());
        fields.insert("created_at".into(), created().into());
        fields.insert("updated_at".into(), created().into());
        Document {
            id: "7".into(),
            fields,
        }
    }

    #[test]
    fn project_row_and_document_normalize_identically() {
        let from_row = ProjectRecord::from(Source::Row(project_row()));
        let from_doc = ProjectRecord::from(Source::Document(project_doc()));
        assert_eq!(from_row, from_doc);
        assert_eq!(
            serde_json::to_value(&from_row).unwrap(),
            serde_json::to_value(&from_doc).unwrap()
        );
    }

    #[test]
    fn project_row_renders_iso_text_and_empty_optionals() {
        let record = ProjectRecord::from(Source::Row(project_row()));
        assert_eq!(record.id, "7");
        assert_eq!(record.image_url, "");
        assert_eq!(record.completion_date, "2025-06-30");
        assert_eq!(record.created_at, "2024-03-01T10:30:00.000Z");
        assert_eq!(record.status_label, "On Hold");
    }

    #[test]
    fn ill_typed_document_fields_render_as_defaults() {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::Integer(12));
        fields.insert("status".into(), "demolished".into());
        fields.insert("featured".into(), "yes".into());
        fields.insert("created_at".into(), FieldValue::Bool(true));
        let record = ProjectRecord::from(Source::Document(Document {
            id: "abc".into(),
            fields,
        }));

        assert_eq!(record.id, "abc");
        assert_eq!(record.name, "");
        assert_eq!(record.status, "planning");
        assert!(!record.featured);
        assert_eq!(record.created_at, "");
        assert_eq!(record.completion_date, "");
    }

    #[test]
    fn testimonial_row_and_document_normalize_identically() {
        let row = Testimonial {
            id: 3,
            client_name: "Lakshmi".into(),
            client_position: String::new(),
            project_name: "Sri Nilayam".into(),
            testimonial_text: "Delivered on time.".into(),
            rating: 4,
            client_image: None,
            is_featured: true,
            created_at: created(),
        };
        let mut fields = Fields::new();
        fields.insert("client_name".into(), "Lakshmi".into());
        fields.insert("project_name".into(), "Sri Nilayam".into());
        fields.insert("testimonial_text".into(), "Delivered on time.".into());
        fields.insert("rating".into(), FieldValue::Double(4.0));
        fields.insert("is_featured".into(), true.into());
        fields.insert("created_at".into(), created().into());

        let from_row = TestimonialRecord::from(Source::Row(row));
        let from_doc = TestimonialRecord::from(Source::Document(Document {
            id: "3".into(),
            fields,
        }));
        assert_eq!(from_row, from_doc);
    }

    #[test]
    fn out_of_range_rating_falls_back_to_default() {
        let mut fields = Fields::new();
        fields.insert("rating".into(), FieldValue::Integer(11));
        let record = TestimonialRecord::from(Source::Document(Document {
            id: "t".into(),
            fields,
        }));
        assert_eq!(record.rating, DEFAULT_RATING);
    }
}
