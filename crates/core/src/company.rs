//! Company profile shown in the site header, footer and contact page.
//!
//! At most one company-info row may exist. When none has been stored yet
//! the site renders [`CompanyProfile::default`].

use serde::Serialize;

/// Entity name used in singleton-violation errors.
pub const COMPANY_INFO_ENTITY: &str = "CompanyInfo";

/// Display/contact metadata for the whole site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
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
    /// `false` when these are the built-in defaults.
    pub stored: bool,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: "Srihari Developers".into(),
            tagline: "Building Dreams, Creating Realities".into(),
            description: "Leading construction company in Tirupati specializing in \
                          residential and commercial projects."
                .into(),
            phone: "+91-9014376635".into(),
            email: "info@sriharidevelopers.com".into(),
            address: "VSM BUILDING, Renigunta Rd, Tirupati, Andhra Pradesh 517501".into(),
            website: String::new(),
            logo_url: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            linkedin_url: String::new(),
            youtube_url: String::new(),
            established_year: None,
            license_number: String::new(),
            stored: false,
        }
    }
}
