//! Domain types and pure logic for the Srihari Developers site backend.
//!
//! Nothing in this crate touches a database or the network: entity enums,
//! the company-info defaults, featured-limit clamping, and the form rules
//! applied to inbound submissions all live here.

pub mod company;
pub mod content;
pub mod error;
pub mod forms;
pub mod types;
