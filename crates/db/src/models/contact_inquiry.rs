//! Contact inquiry model.
//!
//! Inquiries are created by form submissions and only ever mutated by an
//! operator flipping `responded`.

use serde::Serialize;
use sqlx::FromRow;
use sriweb_core::content::InquiryType;
use sriweb_core::forms::Inquiry;
use sriweb_core::types::{DbId, Timestamp};

/// A row from the `contact_inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: String,
    pub details: serde_json::Value,
    pub responded: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting an inquiry.
#[derive(Debug, Clone)]
pub struct CreateContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub details: serde_json::Value,
}

impl From<&Inquiry> for CreateContactInquiry {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            inquiry_type: inquiry.inquiry_type,
            details: serde_json::to_value(&inquiry.details)
                .unwrap_or_else(|_| serde_json::Value::Object(Default::default())),
        }
    }
}
