//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity is editable

pub mod category;
pub mod company_info;
pub mod contact_inquiry;
pub mod project;
pub mod testimonial;
