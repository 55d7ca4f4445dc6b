//! Repository for the `company_info` singleton.

use sqlx::PgPool;
use sriweb_core::company::COMPANY_INFO_ENTITY;
use sriweb_core::error::CoreError;

use crate::error::RepoError;
use crate::models::company_info::{CompanyInfo, CreateCompanyInfo, UpdateCompanyInfo};

const COLUMNS: &str = "id, company_name, tagline, description, phone, email, address, website, \
                       logo_url, facebook_url, instagram_url, linkedin_url, youtube_url, \
                       established_year, license_number, updated_at";

/// Name of the unique index that allows at most one row.
const SINGLETON_CONSTRAINT: &str = "uq_company_info_singleton";

pub struct CompanyInfoRepo;

impl CompanyInfoRepo {
    /// Create the company info row.
    ///
    /// Fails with [`CoreError::SingletonViolation`] when a row already
    /// exists, whether detected up front or by the singleton index when
    /// two creates race.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompanyInfo,
    ) -> Result<CompanyInfo, RepoError> {
        if Self::get(pool).await?.is_some() {
            return Err(CoreError::SingletonViolation(COMPANY_INFO_ENTITY).into());
        }

        let query = format!(
            "INSERT INTO company_info
                (company_name, tagline, description, phone, email, address, website, logo_url,
                 facebook_url, instagram_url, linkedin_url, youtube_url, established_year, license_number)
             VALUES (COALESCE($1, 'Srihari Developers'),
                     COALESCE($2, 'Building Dreams, Creating Legacies'),
                     $3, $4, $5, $6,
                     COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''), COALESCE($10, ''),
                     COALESCE($11, ''), COALESCE($12, ''), $13, COALESCE($14, ''))
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, CompanyInfo>(&query)
            .bind(&input.company_name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.logo_url)
            .bind(&input.facebook_url)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.youtube_url)
            .bind(input.established_year)
            .bind(&input.license_number)
            .fetch_one(pool)
            .await;

        match result {
            Ok(info) => Ok(info),
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some(SINGLETON_CONSTRAINT) =>
            {
                Err(CoreError::SingletonViolation(COMPANY_INFO_ENTITY).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the company info row, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<CompanyInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_info LIMIT 1");
        sqlx::query_as::<_, CompanyInfo>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the company info row. Returns `None` if it does not exist yet.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateCompanyInfo,
    ) -> Result<Option<CompanyInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE company_info SET
                company_name = COALESCE($1, company_name),
                tagline = COALESCE($2, tagline),
                description = COALESCE($3, description),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                address = COALESCE($6, address),
                website = COALESCE($7, website),
                logo_url = COALESCE($8, logo_url),
                facebook_url = COALESCE($9, facebook_url),
                instagram_url = COALESCE($10, instagram_url),
                linkedin_url = COALESCE($11, linkedin_url),
                youtube_url = COALESCE($12, youtube_url),
                established_year = COALESCE($13, established_year),
                license_number = COALESCE($14, license_number)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyInfo>(&query)
            .bind(&input.company_name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.logo_url)
            .bind(&input.facebook_url)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.youtube_url)
            .bind(input.established_year)
            .bind(&input.license_number)
            .fetch_optional(pool)
            .await
    }
}
