//! Mock Sentry API client for testing
//!
//! Implements [`OrganizationApi`] in memory so trait-level behavior (cursor
//! following, CLI handlers) can be exercised without an HTTP server.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::OrganizationApi;
use super::models::{Member, Organization, ScimResource, Team};
use super::pagination::{Link, Page, Paged};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSentryClient::new()
///     .with_org_pages(vec![vec![org_a], vec![org_b]])
///     .await;
///
/// let all = mock.get_all_organizations().await?;
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Default)]
pub struct MockSentryClient {
    /// Organization pages; page N is served for cursor `N` (first page for no cursor)
    org_pages: Arc<Mutex<Vec<Vec<Organization>>>>,
    /// Organizations addressable by slug for get/update/delete
    orgs_by_slug: Arc<Mutex<HashMap<String, Organization>>>,
    teams: Arc<Mutex<Vec<Team>>>,
    members: Arc<Mutex<Vec<Member>>>,
    scim: Arc<Mutex<Option<ScimResource>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// Cursors seen by get_organizations_page, in call order
    cursors: Arc<Mutex<Vec<Option<String>>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_organization: usize,
    pub get_organizations_page: usize,
    pub create_organization: usize,
    pub update_organization: usize,
    pub delete_organization: usize,
    pub get_organization_teams: usize,
    pub get_organization_members: usize,
    pub get_organization_teams_scim: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.get_organization
            + self.get_organizations_page
            + self.create_organization
            + self.update_organization
            + self.delete_organization
            + self.get_organization_teams
            + self.get_organization_members
            + self.get_organization_teams_scim
    }
}

impl MockSentryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pages` from get_organizations_page and register each org by slug.
    pub async fn with_org_pages(self, pages: Vec<Vec<Organization>>) -> Self {
        {
            let mut by_slug = self.orgs_by_slug.lock().await;
            for org in pages.iter().flatten() {
                if let Some(slug) = &org.slug {
                    by_slug.insert(slug.clone(), org.clone());
                }
            }
        }
        *self.org_pages.lock().await = pages;
        self
    }

    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        self.with_org_pages(vec![orgs]).await
    }

    pub async fn with_teams(self, teams: Vec<Team>) -> Self {
        *self.teams.lock().await = teams;
        self
    }

    pub async fn with_members(self, members: Vec<Member>) -> Self {
        *self.members.lock().await = members;
        self
    }

    pub async fn with_scim(self, scim: ScimResource) -> Self {
        *self.scim.lock().await = Some(scim);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().await.clone()
    }

    /// Current stored state of an organization.
    pub async fn stored(&self, slug: &str) -> Option<Organization> {
        self.orgs_by_slug.lock().await.get(slug).cloned()
    }

    async fn check_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn slug_of(org: &Organization) -> Result<String> {
        org.slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ApiError::MissingIdentifier("organization slug".to_string()).into())
    }

    async fn existing(&self, slug: &str) -> Result<Organization> {
        self.orgs_by_slug
            .lock()
            .await
            .get(slug)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("organization {}", slug)).into())
    }
}

/// Link for page `index` of `count`, in the server's header shape.
fn link_for(index: usize, count: usize) -> Link {
    let page = |cursor: usize, results: bool| Page {
        url: format!("mock://organizations/?cursor={}", cursor),
        results,
        cursor: cursor.to_string(),
    };

    Link {
        previous: Some(page(index.saturating_sub(1), index > 0)),
        next: Some(page(index + 1, index + 1 < count)),
    }
}

#[async_trait]
impl OrganizationApi for MockSentryClient {
    async fn get_organization(&self, slug: &str) -> Result<Organization> {
        self.check_error().await?;
        self.call_count.lock().await.get_organization += 1;

        self.existing(slug).await
    }

    async fn get_organizations_page(&self, cursor: Option<&str>) -> Result<Paged<Organization>> {
        self.cursors.lock().await.push(cursor.map(str::to_string));
        self.check_error().await?;
        self.call_count.lock().await.get_organizations_page += 1;

        let index = match cursor {
            None => 0,
            Some(c) => c
                .parse::<usize>()
                .map_err(|_| ApiError::BadRequest(format!("invalid cursor {}", c)))?,
        };

        let pages = self.org_pages.lock().await;
        let items = pages.get(index).cloned().unwrap_or_default();
        Ok(Paged::new(items, link_for(index, pages.len())))
    }

    async fn create_organization(&self, name: &str) -> Result<Organization> {
        self.check_error().await?;
        self.call_count.lock().await.create_organization += 1;

        let slug = name.to_lowercase().replace(' ', "-");
        let mut by_slug = self.orgs_by_slug.lock().await;
        let org = Organization {
            slug: Some(slug.clone()),
            id: Some((by_slug.len() + 1).to_string()),
            ..Organization::new(name)
        };
        by_slug.insert(slug, org.clone());

        Ok(org)
    }

    async fn update_organization(&self, org: &Organization) -> Result<Organization> {
        let slug = Self::slug_of(org)?;
        self.check_error().await?;
        self.call_count.lock().await.update_organization += 1;

        self.existing(&slug).await?;
        self.orgs_by_slug
            .lock()
            .await
            .insert(slug, org.clone());

        Ok(org.clone())
    }

    async fn delete_organization(&self, org: &Organization) -> Result<()> {
        let slug = Self::slug_of(org)?;
        self.check_error().await?;
        self.call_count.lock().await.delete_organization += 1;

        match self.orgs_by_slug.lock().await.remove(&slug) {
            Some(_) => Ok(()),
            None => Err(ApiError::NotFound(format!("organization {}", slug)).into()),
        }
    }

    async fn get_organization_teams(&self, org: &Organization) -> Result<Vec<Team>> {
        Self::slug_of(org)?;
        self.check_error().await?;
        self.call_count.lock().await.get_organization_teams += 1;

        Ok(self.teams.lock().await.clone())
    }

    async fn get_organization_members(&self, org: &Organization) -> Result<Vec<Member>> {
        Self::slug_of(org)?;
        self.check_error().await?;
        self.call_count.lock().await.get_organization_members += 1;

        Ok(self.members.lock().await.clone())
    }

    async fn get_organization_teams_scim(&self, org: &Organization) -> Result<ScimResource> {
        Self::slug_of(org)?;
        self.check_error().await?;
        self.call_count.lock().await.get_organization_teams_scim += 1;

        self.scim
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound("SCIM is not enabled".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{OrganizationBuilder, TeamBuilder};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockSentryClient::new();

        let page = mock.get_organizations().await.unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn test_get_all_organizations_follows_cursors() {
        let mock = MockSentryClient::new()
            .with_org_pages(vec![
                vec![
                    OrganizationBuilder::new("alpha").build(),
                    OrganizationBuilder::new("beta").build(),
                ],
                vec![OrganizationBuilder::new("gamma").build()],
                vec![OrganizationBuilder::new("delta").build()],
            ])
            .await;

        let all = mock.get_all_organizations().await.unwrap();

        let slugs: Vec<_> = all.iter().filter_map(|o| o.slug.as_deref()).collect();
        assert_eq!(slugs, vec!["alpha", "beta", "gamma", "delta"]);
        assert_eq!(
            mock.cursors().await,
            vec![None, Some("1".to_string()), Some("2".to_string())]
        );
        assert_eq!(mock.call_counts().await.get_organizations_page, 3);
    }

    #[tokio::test]
    async fn test_get_all_organizations_propagates_page_error() {
        let mock = MockSentryClient::new()
            .with_org_pages(vec![vec![OrganizationBuilder::new("alpha").build()]])
            .await
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        let err = mock.get_all_organizations().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockSentryClient::new()
            .with_orgs(vec![OrganizationBuilder::new("acme").build()])
            .await
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.get_organization("acme").await.is_err());
        assert!(mock.get_organization("acme").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_slug_is_rejected_before_counting() {
        let mock = MockSentryClient::new();
        let nameless = Organization::new("No Slug");

        let err = mock.delete_organization(&nameless).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::MissingIdentifier(_))));
        assert!(mock.update_organization(&nameless).await.is_err());
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_create_update_delete_cycle() {
        let mock = MockSentryClient::new();

        let mut org = mock.create_organization("Acme Corp").await.unwrap();
        assert_eq!(org.slug.as_deref(), Some("acme-corp"));

        org.is_early_adopter = Some(true);
        mock.update_organization(&org).await.unwrap();
        assert_eq!(
            mock.stored("acme-corp").await.and_then(|o| o.is_early_adopter),
            Some(true)
        );

        mock.delete_organization(&org).await.unwrap();
        assert!(mock.stored("acme-corp").await.is_none());
        assert_eq!(mock.call_counts().await.total(), 3);
    }

    #[tokio::test]
    async fn test_teams_for_org() {
        let mock = MockSentryClient::new()
            .with_teams(vec![TeamBuilder::new("backend").build()])
            .await;

        let teams = mock
            .get_organization_teams(&Organization::with_slug("acme"))
            .await
            .unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(mock.call_counts().await.get_organization_teams, 1);
    }
}
