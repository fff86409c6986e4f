//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Team;

/// Project and event-rate ceilings for an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    /// Maximum number of projects
    pub project_limit: i64,

    /// Maximum event ingestion rate
    pub max_rate: i64,
}

/// Sentry organization.
///
/// Every field except `name` is optional so that a partially populated value
/// serializes only what was set. Absent fields decode to `None`, never to a
/// zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Number of pending access requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_access_requests: Option<i64>,

    /// URL-safe identifier used in every path addressing this organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<Quota>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_early_adopter: Option<bool>,

    /// Feature flags enabled for the organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl Organization {
    /// An organization carrying only a name, as sent on creation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reference an existing organization by slug.
    ///
    /// The name is left empty; use this to address sub-resources without
    /// fetching the organization first.
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}
