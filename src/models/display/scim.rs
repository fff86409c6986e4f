//! SCIM group display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Resource;

/// SCIM group display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScimGroupDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "GROUP")]
    pub display_name: String,

    #[tabled(rename = "MEMBERS")]
    pub member_count: usize,

    #[tabled(rename = "MEMBER NAMES")]
    pub members: String,
}

impl From<Resource> for ScimGroupDisplay {
    fn from(group: Resource) -> Self {
        Self {
            id: group.id,
            display_name: group.display_name,
            member_count: group.members.len(),
            members: group
                .members
                .iter()
                .map(|m| m.display.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
