//! Command execution context
//!
//! Merges CLI/env options over the config file and builds the API client,
//! so handlers receive a ready-to-use client and output format.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SentryClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and output format.
pub struct CommandContext {
    /// Effective configuration (file values with CLI/env overrides applied)
    pub config: Config,
    pub client: SentryClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or no auth token is
    /// available from any source.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = effective_config(opts)?;
        config.validate_auth()?;

        debug!("Using API root {}", config.base_url());
        let client = SentryClient::new(config.client_config())?;
        let format = resolve_format(opts, &config);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Organization slug to act on: explicit argument, then `--org`/config.
    pub fn require_org(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.config.org.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingOrg.into())
    }
}

/// Config file (if any) with CLI/env overrides applied.
pub fn effective_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default(opts.config_ref())?;

    if let Some(token) = &opts.token {
        config.auth_token = Some(token.clone());
    }
    if let Some(url) = &opts.api_url {
        config.base_url = Some(url.clone());
    }
    if let Some(org) = &opts.org {
        config.org = Some(org.clone());
    }

    Ok(config)
}

fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format
        .or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::parse_preference)
        })
        .unwrap_or_default()
}
