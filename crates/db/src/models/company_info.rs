//! Company info singleton model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sriweb_core::company::CompanyProfile;
use sriweb_core::types::{DbId, Timestamp};

/// The single row of the `company_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyInfo {
    pub id: DbId,
    pub company_name: String,
    pub tagline: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub logo_url: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub youtube_url: String,
    pub established_year: Option<i32>,
    pub license_number: String,
    pub updated_at: Timestamp,
}

/// DTO for creating the company info row. Omitted text fields fall back
/// to the column defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCompanyInfo {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
    pub established_year: Option<i32>,
    pub license_number: Option<String>,
}

/// DTO for editing the company info row. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyInfo {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
    pub established_year: Option<i32>,
    pub license_number: Option<String>,
}

impl From<CompanyInfo> for CompanyProfile {
    fn from(info: CompanyInfo) -> Self {
        Self {
            company_name: info.company_name,
            tagline: info.tagline,
            description: info.description,
            phone: info.phone,
            email: info.email,
            address: info.address,
            website: info.website,
            logo_url: info.logo_url,
            facebook_url: info.facebook_url,
            instagram_url: info.instagram_url,
            linkedin_url: info.linkedin_url,
            youtube_url: info.youtube_url,
            established_year: info.established_year,
            license_number: info.license_number,
            stored: true,
        }
    }
}
