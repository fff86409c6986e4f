//! Member models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization member, including pending invitations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member ID
    pub id: String,

    /// Member email address
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Organization role identifier (e.g. `member`, `owner`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Human-readable role name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    /// Invitation not yet accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,

    /// Invitation expired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// Linked user account; absent for pending invitations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<MemberUser>,
}

/// User account behind an organization membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Member {
    /// Membership state for display: `pending`, `expired` or `active`.
    pub fn status(&self) -> &'static str {
        if self.expired == Some(true) {
            "expired"
        } else if self.pending == Some(true) {
            "pending"
        } else {
            "active"
        }
    }
}
