//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};

use super::models::{Member, Meta, Organization, Quota, Resource, ScimMember, ScimResource, Team};

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new("acme")
///     .name("Acme Corp")
///     .early_adopter(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    org: Organization,
}

impl OrganizationBuilder {
    /// Create a builder with the given slug; name and ID are derived from it.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            org: Organization {
                name: format!("Organization {}", slug),
                id: Some(format!("id-{}", slug)),
                slug: Some(slug),
                date_created: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).single(),
                ..Organization::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.org.name = name.into();
        self
    }

    pub fn early_adopter(mut self, value: bool) -> Self {
        self.org.is_early_adopter = Some(value);
        self
    }

    pub fn quota(mut self, project_limit: i64, max_rate: i64) -> Self {
        self.org.quota = Some(Quota {
            project_limit,
            max_rate,
        });
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.org.features = Some(features.iter().map(|f| f.to_string()).collect());
        self
    }

    pub fn build(self) -> Organization {
        self.org
    }
}

// ============================================================================
// TeamBuilder
// ============================================================================

/// Builder for creating test Team instances.
#[derive(Debug, Clone)]
pub struct TeamBuilder {
    team: Team,
}

impl TeamBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            team: Team {
                id: format!("team-{}", slug),
                name: format!("Team {}", slug),
                slug: Some(slug),
                date_created: None,
                is_member: Some(false),
                has_access: Some(true),
                is_pending: Some(false),
                member_count: Some(0),
            },
        }
    }

    pub fn member_count(mut self, count: u32) -> Self {
        self.team.member_count = Some(count);
        self
    }

    pub fn is_member(mut self, value: bool) -> Self {
        self.team.is_member = Some(value);
        self
    }

    pub fn build(self) -> Team {
        self.team
    }
}

// ============================================================================
// MemberBuilder
// ============================================================================

/// Builder for creating test Member instances.
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    member: Member,
}

impl MemberBuilder {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            member: Member {
                id: format!("member-{}", email),
                email,
                name: None,
                role: Some("member".to_string()),
                role_name: Some("Member".to_string()),
                pending: Some(false),
                expired: Some(false),
                invite_status: Some("approved".to_string()),
                date_created: None,
                user: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.member.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.member.role = Some(role.into());
        self
    }

    pub fn pending(mut self) -> Self {
        self.member.pending = Some(true);
        self.member.invite_status = Some("requested_to_be_invited".to_string());
        self
    }

    pub fn build(self) -> Member {
        self.member
    }
}

// ============================================================================
// SCIM
// ============================================================================

/// A SCIM group with the given members as `(value, display)` pairs.
pub fn scim_group(id: &str, display_name: &str, members: &[(&str, &str)]) -> Resource {
    Resource {
        schemas: vec!["urn:ietf:params:scim:schemas:core:2.0:Group".to_string()],
        id: id.to_string(),
        display_name: display_name.to_string(),
        meta: Meta {
            resource_type: "Group".to_string(),
        },
        members: members
            .iter()
            .map(|(value, display)| ScimMember {
                value: value.to_string(),
                display: display.to_string(),
            })
            .collect(),
    }
}

/// SCIM list envelope wrapping `groups`.
pub fn scim_listing(groups: Vec<Resource>) -> ScimResource {
    ScimResource {
        schemas: vec!["urn:ietf:params:scim:api:messages:2.0:ListResponse".to_string()],
        total_results: groups.len() as i64,
        start_index: 1,
        items_per_page: groups.len() as i64,
        resources: groups,
    }
}
