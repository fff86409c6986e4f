//! Init command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::{OrganizationApi, SentryClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Run the init command
///
/// Saves the token, API root and default organization given via flags or
/// environment into the config file, merging over any existing values. The
/// token is checked against the API before anything is written.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;

    let token = opts
        .token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingAuthToken)?;
    config.auth_token = Some(token);
    if let Some(url) = &opts.api_url {
        config.base_url = Some(url.clone());
    }
    if let Some(org) = &opts.org {
        config.org = Some(org.clone());
    }

    println!("{}", "Verifying auth token...".cyan());
    let client = SentryClient::new(config.client_config())?;
    let page = client.get_organizations().await?;
    println!(
        "{} Token accepted ({} organizations visible)",
        "✓".green(),
        page.items.len()
    );

    if config.org.is_none() {
        if let [only] = page.items.as_slice() {
            config.org = only.slug.clone();
        }
    }

    let path = config.save_at(opts.config_ref())?;
    println!("\n{} Configuration saved to: {}", "✓".green(), path.display());

    if let Some(org) = &config.org {
        println!("  Default organization: {}", org.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sentryop status".cyan());
    println!("  {} - List organizations", "sentryop org list".cyan());

    Ok(())
}
