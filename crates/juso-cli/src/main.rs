//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! core services.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use juso_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let mut cli = Cli::parse();

    // Initialize logging; stderr keeps command output clean
    init_tracing(cli.verbose);

    // Dispatch to appropriate handler
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(CliConfig::from_cli(&cli)).await?;

    match command {
        Commands::Search {
            keyword,
            page,
            count,
        } => {
            let keyword = Commands::join_keyword(&keyword);
            handlers::search::execute(&ctx, &keyword, &page, &count).await?;
        }
        Commands::Show => {
            handlers::show::execute(&ctx).await?;
        }
        Commands::Toggle { field } => {
            handlers::toggle::execute(&ctx, field.into()).await?;
        }
        Commands::Settings { command } => {
            handlers::settings::execute(&ctx, command).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
