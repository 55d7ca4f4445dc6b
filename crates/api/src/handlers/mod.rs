pub mod company;
pub mod inquiry;
pub mod project;
pub mod testimonial;
