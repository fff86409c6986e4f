//! SCIM group listing models
//!
//! These mirror the SCIM 2.0 `ListResponse` envelope, including its
//! capitalized `Resources` key.

use serde::{Deserialize, Serialize};

/// SCIM list envelope returned by `scim/v2/Groups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimResource {
    #[serde(default)]
    pub schemas: Vec<String>,
    pub total_results: i64,
    pub start_index: i64,
    pub items_per_page: i64,
    #[serde(rename = "Resources", default)]
    pub resources: Vec<Resource>,
}

/// A single SCIM group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub schemas: Vec<String>,
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ScimMember>,
}

/// Resource-type metadata of a SCIM group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub resource_type: String,
}

/// Member reference inside a SCIM group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScimMember {
    /// Opaque member ID
    pub value: String,
    /// Human label
    pub display: String,
}
