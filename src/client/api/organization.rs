//! Organization API trait

use std::collections::HashSet;

use async_trait::async_trait;
use log::debug;

use crate::client::models::{Member, Organization, ScimResource, Team};
use crate::client::pagination::Paged;
use crate::error::Result;

/// Organization operations for the Sentry API
///
/// Operations that address an existing organization take the whole
/// [`Organization`] and use its slug; a value without a slug fails with
/// [`ApiError::MissingIdentifier`](crate::error::ApiError::MissingIdentifier)
/// before any request is made.
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    // ========================================================================
    // Organizations
    // ========================================================================

    /// Fetch one organization by slug.
    async fn get_organization(&self, slug: &str) -> Result<Organization>;

    /// Fetch one page of organizations, starting at `cursor` (first page when `None`).
    async fn get_organizations_page(&self, cursor: Option<&str>) -> Result<Paged<Organization>>;

    /// Fetch the first page of organizations visible to the token.
    async fn get_organizations(&self) -> Result<Paged<Organization>> {
        self.get_organizations_page(None).await
    }

    /// Fetch every organization, following `next` cursors until the server
    /// reports no further results.
    async fn get_all_organizations(&self) -> Result<Vec<Organization>> {
        let mut page = self.get_organizations_page(None).await?;
        let mut all = std::mem::take(&mut page.items);
        let mut seen = HashSet::new();

        while let Some(cursor) = page.link.next_cursor().map(str::to_string) {
            // A server cycling through cursors would otherwise never terminate
            if !seen.insert(cursor.clone()) {
                debug!("Cursor {} already fetched, stopping", cursor);
                break;
            }
            debug!("Fetching organizations page at cursor {}", cursor);
            page = self.get_organizations_page(Some(&cursor)).await?;
            all.append(&mut page.items);
        }

        debug!("Fetched {} organizations", all.len());
        Ok(all)
    }

    /// Create an organization. Only the name is sent.
    async fn create_organization(&self, name: &str) -> Result<Organization>;

    /// Replace an organization with `org` and return the server's view of it.
    async fn update_organization(&self, org: &Organization) -> Result<Organization>;

    /// Delete an organization. There is no way to undo this.
    async fn delete_organization(&self, org: &Organization) -> Result<()>;

    // ========================================================================
    // Sub-resources
    // ========================================================================

    async fn get_organization_teams(&self, org: &Organization) -> Result<Vec<Team>>;

    async fn get_organization_members(&self, org: &Organization) -> Result<Vec<Member>>;

    /// SCIM group listing, as provisioned by the identity provider.
    async fn get_organization_teams_scim(&self, org: &Organization) -> Result<ScimResource>;
}
