//! Member display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Member;
use crate::output::formatters::{NOT_AVAILABLE, format_date};

/// Member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "JOINED")]
    pub joined: String,
}

impl From<Member> for MemberDisplay {
    fn from(member: Member) -> Self {
        let status = member.status().to_string();
        let name = member
            .name
            .or_else(|| member.user.and_then(|u| u.name))
            .unwrap_or_default();

        Self {
            email: member.email,
            name,
            role: member
                .role_name
                .or(member.role)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status,
            joined: format_date(member.date_created),
        }
    }
}
