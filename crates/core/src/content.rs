//! Site content enums and limits shared by both storage backends.
//!
//! Status and inquiry-type values are stored as plain text in both the
//! document store and the relational mirror; these enums are the canonical
//! set of accepted values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of featured records shown on the homepage when no limit is given.
pub const DEFAULT_FEATURED_LIMIT: i64 = 6;

/// Upper bound for a caller-supplied featured limit.
pub const MAX_FEATURED_LIMIT: i64 = 24;

/// Number of related projects shown beside a project detail.
pub const RELATED_PROJECTS_LIMIT: i64 = 4;

/// Lowest accepted testimonial rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted testimonial rating.
pub const MAX_RATING: i32 = 5;

/// Rating given to a testimonial written without one.
pub const DEFAULT_RATING: i32 = 5;

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

/// Lifecycle status of a construction project.
///
/// Any status may be set from any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Ongoing,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Every status, in display order.
    pub const ALL: [ProjectStatus; 4] = [
        Self::Planning,
        Self::Ongoing,
        Self::Completed,
        Self::OnHold,
    ];

    /// Stored text value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    /// Parse a stored text value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .ok_or_else(|| CoreError::Validation(format!("Unknown project status '{name}'")))
    }
}

// ---------------------------------------------------------------------------
// Inquiry type
// ---------------------------------------------------------------------------

/// Kind of inbound inquiry.
///
/// The contact form offers the first five; `Service` and `Newsletter` are
/// assigned by the service-inquiry and newsletter submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    #[default]
    General,
    Project,
    Marketing,
    Investment,
    Other,
    Service,
    Newsletter,
}

impl InquiryType {
    pub const ALL: [InquiryType; 7] = [
        Self::General,
        Self::Project,
        Self::Marketing,
        Self::Investment,
        Self::Other,
        Self::Service,
        Self::Newsletter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Project => "project",
            Self::Marketing => "marketing",
            Self::Investment => "investment",
            Self::Other => "other",
            Self::Service => "service",
            Self::Newsletter => "newsletter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Project => "Project Inquiry",
            Self::Marketing => "Marketing Services",
            Self::Investment => "Investment Opportunity",
            Self::Other => "Other",
            Self::Service => "Service Inquiry",
            Self::Newsletter => "Newsletter Subscription",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| CoreError::Validation(format!("Unknown inquiry type '{name}'")))
    }
}

// ---------------------------------------------------------------------------
// Rating / limits
// ---------------------------------------------------------------------------

/// Validate that a testimonial rating lies in `1..=5`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Clamp a user-provided featured limit to `1..=MAX_FEATURED_LIMIT`.
pub fn clamp_featured_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .clamp(1, MAX_FEATURED_LIMIT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
