//! Display models for CLI output
//!
//! Converts API response types into table rows and JSON shapes.

pub mod display;

pub use display::{MemberDisplay, OrgDisplay, ScimGroupDisplay, TeamDisplay};
