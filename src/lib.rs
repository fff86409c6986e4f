//! sentryop - typed client and CLI for the Sentry organization API
//!
//! The library half exposes [`client::SentryClient`], which implements
//! [`client::OrganizationApi`] for organizations, their teams, members and
//! SCIM groups. The `sentryop` binary wraps it in a command-line interface.
//!
//! ```no_run
//! use sentryop::client::{ClientConfig, OrganizationApi, SentryClient};
//!
//! # async fn demo() -> sentryop::error::Result<()> {
//! let client = SentryClient::new(ClientConfig::new().auth_token("sntrys_..."))?;
//! for org in client.get_all_organizations().await? {
//!     println!("{}", org.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
