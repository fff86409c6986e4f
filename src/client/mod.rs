//! Sentry API client
//!
//! [`SentryClient`] implements [`OrganizationApi`] over HTTPS. Each operation
//! is a single request/response exchange; errors are returned unchanged.

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod sentry;

pub use api::OrganizationApi;
#[cfg(test)]
pub use mock::MockSentryClient;
pub use models::{
    Member, MemberUser, Meta, Organization, Quota, Resource, ScimMember, ScimResource, Team,
};
pub use pagination::{Link, Page, Paged};
pub use sentry::{ClientConfig, DEFAULT_BASE_URL, SentryClient};
