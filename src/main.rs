//! sentryop - command-line companion for the Sentry organization API

use clap::Parser;
use log::LevelFilter;

use sentryop::cli::org::OrgChanges;
use sentryop::cli::{self, Cli, CommandContext, Commands, GlobalOptions, OrgCommands};
use sentryop::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("sentryop", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("sentryop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::print_completions(shell);
            Ok(())
        }
        Commands::Org(org_cmd) => {
            let ctx = CommandContext::new(&opts).await?;
            match org_cmd {
                OrgCommands::List { all, cursor } => {
                    cli::org::list(&ctx, all, cursor.as_deref()).await
                }
                OrgCommands::Get { slug } => cli::org::get(&ctx, slug.as_deref()).await,
                OrgCommands::Create { name } => cli::org::create(&ctx, &name).await,
                OrgCommands::Update {
                    slug,
                    name,
                    early_adopter,
                } => {
                    let changes = OrgChanges {
                        name,
                        early_adopter,
                    };
                    cli::org::update(&ctx, slug.as_deref(), &changes).await
                }
                OrgCommands::Delete { slug, yes } => cli::org::delete(&ctx, &slug, yes).await,
                OrgCommands::Teams { slug } => cli::org::teams(&ctx, slug.as_deref()).await,
                OrgCommands::Members { slug } => cli::org::members(&ctx, slug.as_deref()).await,
                OrgCommands::ScimGroups { slug } => {
                    cli::org::scim_groups(&ctx, slug.as_deref()).await
                }
            }
        }
    }
}
