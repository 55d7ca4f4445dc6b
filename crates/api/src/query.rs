//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for the featured listings.
///
/// Clamped by the read service via `clamp_featured_limit`; absent means the
/// default of six.
#[derive(Debug, Default, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
}
