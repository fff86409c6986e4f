//! Team models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID
    pub id: String,

    /// Team name
    pub name: String,

    /// Team slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// Whether the token's user belongs to the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_member: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_access: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}
