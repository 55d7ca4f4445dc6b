//! Inbound form submissions and their field rules.
//!
//! Forms are validated at the HTTP boundary with [`validator`]; only a form
//! that passes is converted into an [`Inquiry`] and handed to the write
//! service, which does not re-check formats.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::content::InquiryType;

/// Accepted phone format: optional `+`, optional leading `1`, 9-15 digits.
pub const PHONE_PATTERN: &str = r"^\+?1?\d{9,15}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Placeholder phone recorded for newsletter sign-ups.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Name recorded for anonymous newsletter sign-ups.
pub const ANONYMOUS_SUBSCRIBER: &str = "Newsletter Subscriber";

/// Whether `phone` matches [`PHONE_PATTERN`].
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Longest accepted visitor name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

pub const MIN_NAME_CHARS: usize = 2;

pub const MIN_MESSAGE_CHARS: usize = 10;

/// Length rules count characters of the trimmed value, so padding never
/// makes a blank field long enough.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn name_long_enough(name: &str) -> Result<(), ValidationError> {
    if trimmed_len(name) < MIN_NAME_CHARS {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn message_long_enough(message: &str) -> Result<(), ValidationError> {
    if trimmed_len(message) < MIN_MESSAGE_CHARS {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn name_within_limit(name: &str) -> Result<(), ValidationError> {
    if trimmed_len(name) > MAX_NAME_CHARS {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn required(value: &str) -> Result<(), ValidationError> {
    if trimmed_len(value) == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Text fields are stripped before any rule runs, so a blank value fails
/// the same length checks as an empty one.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Optional variant of [`trimmed`]; a blank value becomes `None`.
fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

// ---------------------------------------------------------------------------
// Inquiry (write-service input)
// ---------------------------------------------------------------------------

/// An already-validated inquiry ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
    /// Extra form-specific fields (service type, budget, interests...).
    pub details: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

/// Inquiry types a visitor can pick on the contact page. Service and
/// newsletter inquiries arrive through their own forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactInquiryType {
    #[default]
    General,
    Project,
    Marketing,
    Investment,
    Other,
}

impl From<ContactInquiryType> for InquiryType {
    fn from(kind: ContactInquiryType) -> Self {
        match kind {
            ContactInquiryType::General => Self::General,
            ContactInquiryType::Project => Self::Project,
            ContactInquiryType::Marketing => Self::Marketing,
            ContactInquiryType::Investment => Self::Investment,
            ContactInquiryType::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "name_long_enough", message = "Name must be at least 2 characters long."),
        custom(function = "name_within_limit", message = "Name must be at most 100 characters long.")
    )]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(max = 17),
        regex(
            path = *PHONE_RE,
            message = "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
        )
    )]
    pub phone: String,
    #[serde(default)]
    pub inquiry_type: ContactInquiryType,
    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(
        function = "message_long_enough",
        message = "Please provide a more detailed message (at least 10 characters)."
    ))]
    pub message: String,
}

impl From<ContactForm> for Inquiry {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            inquiry_type: form.inquiry_type.into(),
            message: form.message,
            details: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Service inquiry form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Construction,
    Marketing,
    Consultation,
    Investment,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Marketing => "marketing",
            Self::Consultation => "consultation",
            Self::Investment => "investment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProjectBudget {
    #[serde(rename = "10-25")]
    UpTo25Lakh,
    #[serde(rename = "25-50")]
    UpTo50Lakh,
    #[serde(rename = "50-1cr")]
    UpToOneCrore,
    #[serde(rename = "1cr+")]
    AboveOneCrore,
    #[serde(rename = "not_decided")]
    NotDecided,
}

impl ProjectBudget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpTo25Lakh => "10-25",
            Self::UpTo50Lakh => "25-50",
            Self::UpToOneCrore => "50-1cr",
            Self::AboveOneCrore => "1cr+",
            Self::NotDecided => "not_decided",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Timeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "flexible")]
    Flexible,
}

impl Timeline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
            Self::Flexible => "flexible",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceInquiryForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "required", message = "This field is required."),
        custom(function = "name_within_limit", message = "Name must be at most 100 characters long.")
    )]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "required", message = "This field is required."),
        length(max = 15, message = "Phone number must be at most 15 characters long.")
    )]
    pub phone: String,
    pub service_type: ServiceType,
    pub project_budget: Option<ProjectBudget>,
    pub timeline: Option<Timeline>,
    #[serde(default, deserialize_with = "trimmed")]
    pub message: String,
}

impl From<ServiceInquiryForm> for Inquiry {
    fn from(form: ServiceInquiryForm) -> Self {
        let mut details = BTreeMap::new();
        details.insert("service_type".to_string(), form.service_type.as_str().to_string());
        details.insert(
            "project_budget".to_string(),
            form.project_budget.map(|b| b.as_str()).unwrap_or_default().to_string(),
        );
        details.insert(
            "timeline".to_string(),
            form.timeline.map(|t| t.as_str()).unwrap_or_default().to_string(),
        );
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            inquiry_type: InquiryType::Service,
            message: form.message,
            details,
        }
    }
}

// ---------------------------------------------------------------------------
// Newsletter form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Residential,
    Commercial,
    Investment,
    MarketUpdates,
}

impl Interest {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Investment => "investment",
            Self::MarketUpdates => "market_updates",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsletterForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Please provide a valid email address."))]
    pub email: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 100, message = "Name must be at most 100 characters long."))]
    pub name: Option<String>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl From<NewsletterForm> for Inquiry {
    fn from(form: NewsletterForm) -> Self {
        let interests = form
            .interests
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let name = form
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_SUBSCRIBER.to_string());

        let mut details = BTreeMap::new();
        details.insert("subscription_type".to_string(), "newsletter".to_string());
        details.insert("interests".to_string(), interests.clone());

        Self {
            name,
            email: form.email,
            phone: PHONE_NOT_PROVIDED.to_string(),
            inquiry_type: InquiryType::Newsletter,
            message: format!("Newsletter subscription - Interests: {interests}"),
            details,
        }
    }
}

// ---------------------------------------------------------------------------
// Error flattening
// ---------------------------------------------------------------------------

/// Flatten validator output into `field -> [messages]` for API responses.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
