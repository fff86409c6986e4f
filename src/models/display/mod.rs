//! Display model implementations for table and JSON output

mod member;
mod org;
mod scim;
mod team;

pub use member::MemberDisplay;
pub use org::OrgDisplay;
pub use scim::ScimGroupDisplay;
pub use team::TeamDisplay;
