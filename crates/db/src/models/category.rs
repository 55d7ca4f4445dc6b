//! Project category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sriweb_core::types::{DbId, Timestamp};

/// A row from the `project_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectCategory {
    pub name: String,
    pub description: Option<String>,
}
