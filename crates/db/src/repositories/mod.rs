//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod company_info_repo;
pub mod contact_inquiry_repo;
pub mod project_repo;
pub mod testimonial_repo;

pub use category_repo::ProjectCategoryRepo;
pub use company_info_repo::CompanyInfoRepo;
pub use contact_inquiry_repo::ContactInquiryRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
