//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::effective_config;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::mask_secret;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sentryop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }
    println!();

    let config = effective_config(opts)?;

    match config.auth_token.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(token) => println!("{} Auth token configured ({})", "✓".green(), mask_secret(token)),
        None => {
            println!("{} Auth token not configured", "✗".red());
            println!("  → Run 'sentryop init --token <TOKEN>' or set SENTRY_AUTH_TOKEN");
        }
    }

    match &config.org {
        Some(org) => println!("{} Default organization: {}", "✓".green(), org),
        None => {
            println!("{} No default organization set", "○".dimmed());
            println!("  → Pass --org <SLUG> or set SENTRY_ORG");
        }
    }

    println!("{} API root: {}", "○".dimmed(), config.base_url().cyan());

    Ok(())
}
