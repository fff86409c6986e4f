//! CLI command definitions and handlers

use clap::{CommandFactory, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod init;
pub mod org;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// sentryop - command-line companion for the Sentry organization API
#[derive(Parser, Debug)]
#[command(name = "sentryop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "SENTRYOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override default organization slug
    #[arg(long, global = true, env = "SENTRY_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "SENTRYOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API root (e.g. https://sentry.example.com/api/0)
    #[arg(long, global = true, env = "SENTRYOP_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Auth token
    #[arg(
        long,
        global = true,
        env = "SENTRY_AUTH_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SENTRYOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save token, API root and default organization to the config file
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   sentryop completion bash > /etc/bash_completion.d/sentryop
  zsh:    sentryop completion zsh > \"${fpath[1]}/_sentryop\"
  fish:   sentryop completion fish > ~/.config/fish/completions/sentryop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations visible to the token
    List {
        /// Follow every page instead of stopping after the first
        #[arg(long)]
        all: bool,

        /// Start from this page cursor (from a previous listing)
        #[arg(long, conflicts_with = "all")]
        cursor: Option<String>,
    },

    /// Show one organization (defaults to --org)
    Get {
        /// Organization slug
        slug: Option<String>,
    },

    /// Create an organization
    Create {
        /// Display name; the server derives the slug
        name: String,
    },

    /// Update an organization's name or early-adopter flag
    Update {
        /// Organization slug (defaults to --org)
        slug: Option<String>,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// Opt in or out of early-adopter features
        #[arg(long)]
        early_adopter: Option<bool>,
    },

    /// Delete an organization
    Delete {
        /// Organization slug
        slug: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// List teams in an organization
    Teams {
        /// Organization slug (defaults to --org)
        slug: Option<String>,
    },

    /// List members of an organization
    Members {
        /// Organization slug (defaults to --org)
        slug: Option<String>,
    },

    /// List SCIM groups of an organization
    ScimGroups {
        /// Organization slug (defaults to --org)
        slug: Option<String>,
    },
}

/// Write static completions for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
