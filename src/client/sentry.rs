//! Sentry API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, LINK, RETRY_AFTER};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::OrganizationApi;
use super::models::{Member, Organization, ScimResource, Team};
use super::pagination::{CURSOR_PARAM, Link, Paged};
use crate::error::{ApiError, Result};

/// Sentry API base URL
pub const DEFAULT_BASE_URL: &str = "https://sentry.io/api/0";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retry-After fallback for 429 responses without the header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Connection settings for [`SentryClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://sentry.io/api/0` or a self-hosted equivalent
    pub base_url: String,
    /// Bearer token; requests are sent unauthenticated when `None`
    pub auth_token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sentryop/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Sentry API client
pub struct SentryClient {
    http: HttpClient,
    base_url: String,
    auth_token: Option<String>,
}

impl SentryClient {
    /// Create a new client from explicit settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path. Sentry routes end with a slash.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path.trim_matches('/'))
    }

    /// Perform one request and decode the JSON response into `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self.send(method, path, &[], body).await?;
        decode(response).await
    }

    /// Like [`request`](Self::request), also returning the `Link` cursors.
    pub(crate) async fn request_with_pagination<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        cursor: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(T, Link)> {
        let query: Vec<(&str, &str)> = cursor.map(|c| (CURSOR_PARAM, c)).into_iter().collect();
        let response = self.send(method, path, &query, body).await?;
        let link = link_from_headers(response.headers());
        let data = decode(response).await?;
        Ok((data, link))
    }

    /// Perform one request whose response body is ignored.
    pub(crate) async fn request_no_content(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.send(method, path, &[], body).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        let url = self.url_for(path);
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        if status.is_success() {
            return Ok(response);
        }

        Err(error_for_status(response).await.into())
    }
}

/// Path segment all organization endpoints hang off
pub const ORG_ENDPOINT: &str = "organizations";

/// Slug of an organization that is about to be addressed by path.
fn require_slug(org: &Organization) -> Result<&str> {
    org.slug
        .as_deref()
        .ok_or_else(|| ApiError::MissingIdentifier("organization slug".to_string()).into())
}

/// Path of one organization. The slug is used as given, encoded as a single
/// segment; a blank slug would otherwise address the list endpoint.
fn org_path(slug: &str) -> Result<String> {
    if slug.trim().is_empty() {
        return Err(ApiError::MissingIdentifier("organization slug".to_string()).into());
    }
    Ok(format!("{}/{}", ORG_ENDPOINT, urlencoding::encode(slug)))
}

#[async_trait]
impl OrganizationApi for SentryClient {
    async fn get_organization(&self, slug: &str) -> Result<Organization> {
        self.request(Method::GET, &org_path(slug)?, None).await
    }

    async fn get_organizations_page(&self, cursor: Option<&str>) -> Result<Paged<Organization>> {
        let (items, link) = self
            .request_with_pagination(Method::GET, ORG_ENDPOINT, cursor, None)
            .await?;
        Ok(Paged::new(items, link))
    }

    async fn create_organization(&self, name: &str) -> Result<Organization> {
        let body = serde_json::to_value(Organization::new(name))?;
        self.request(Method::POST, ORG_ENDPOINT, Some(body)).await
    }

    async fn update_organization(&self, org: &Organization) -> Result<Organization> {
        let path = org_path(require_slug(org)?)?;
        let body = serde_json::to_value(org)?;
        self.request(Method::PUT, &path, Some(body)).await
    }

    async fn delete_organization(&self, org: &Organization) -> Result<()> {
        let path = org_path(require_slug(org)?)?;
        self.request_no_content(Method::DELETE, &path, None).await
    }

    async fn get_organization_teams(&self, org: &Organization) -> Result<Vec<Team>> {
        let path = format!("{}/teams", org_path(require_slug(org)?)?);
        self.request(Method::GET, &path, None).await
    }

    async fn get_organization_members(&self, org: &Organization) -> Result<Vec<Member>> {
        let path = format!("{}/members", org_path(require_slug(org)?)?);
        self.request(Method::GET, &path, None).await
    }

    async fn get_organization_teams_scim(&self, org: &Organization) -> Result<ScimResource> {
        let path = format!("{}/scim/v2/Groups", org_path(require_slug(org)?)?);
        self.request(Method::GET, &path, None).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&text).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}

fn link_from_headers(headers: &HeaderMap) -> Link {
    headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .map(Link::parse)
        .unwrap_or_default()
}

/// Map a non-success response onto an [`ApiError`].
async fn error_for_status(response: Response) -> ApiError {
    let status = response.status();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            ApiError::RateLimit(Duration::from_secs(retry_after))
        }
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(error_detail(response, "Resource not found").await)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_detail(response, "Bad request").await)
        }
        status if status.is_server_error() => {
            let fallback = format!("Server error: {}", status);
            ApiError::ServerError(error_detail(response, &fallback).await)
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

async fn error_detail(response: Response, fallback: &str) -> String {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => extract_detail(&body),
        _ => fallback.to_string(),
    }
}

/// Pull `detail` out of a Sentry error body, falling back to the raw text.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
