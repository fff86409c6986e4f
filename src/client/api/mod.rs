//! API trait definitions
//!
//! - [`OrganizationApi`] - organizations and their teams, members and SCIM groups

mod organization;

pub use organization::OrganizationApi;
