//! Team display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Team;
use crate::output::formatters::{NOT_AVAILABLE, format_flag, format_opt};

/// Team display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MEMBERS")]
    pub members: String,

    #[tabled(rename = "JOINED")]
    pub is_member: String,
}

impl From<Team> for TeamDisplay {
    fn from(team: Team) -> Self {
        Self {
            slug: team.slug.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            name: team.name,
            members: format_opt(team.member_count),
            is_member: format_flag(team.is_member),
        }
    }
}
