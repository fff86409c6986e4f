//! Sentry API data models
//!
//! Domain types returned by the organization endpoints, organized by
//! resource type. Field names follow the API's camelCase JSON.

mod member;
mod org;
mod scim;
mod team;

pub use member::{Member, MemberUser};
pub use org::{Organization, Quota};
pub use scim::{Meta, Resource, ScimMember, ScimResource};
pub use team::Team;
