//! userctl - User management client
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use userctl::cli::{Cli, Commands};
use userctl::config::ConfigManager;
use userctl::error::UserctlResult;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> UserctlResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn (spinners only), 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("userctl=warn"),
        1 => EnvFilter::new("userctl=info"),
        _ => EnvFilter::new("userctl=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    userctl::ui::init_theme();

    // Init command doesn't need config loading
    if let Commands::Init(args) = cli.command {
        return userctl::cli::commands::init(args).await;
    }

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    // Find local config unless --no-local is set
    let local_config_path = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| userctl::error::UserctlError::io("getting current directory", e))?;
        let found = ConfigManager::find_local_config(&cwd);
        if let Some(ref path) = found {
            debug!("Found local config: {}", path.display());
        }
        found
    };

    let mut config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    // A --api-url flag or USERCTL_API_URL beats both config layers
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    // Dispatch to command
    match cli.command {
        Commands::Init(_) => unreachable!("Init handled above"),
        Commands::List(args) => userctl::cli::commands::list(args, &config).await,
        Commands::Show(args) => userctl::cli::commands::show(args, &config).await,
        Commands::Add(args) => userctl::cli::commands::add(args, &config).await,
        Commands::Edit(args) => userctl::cli::commands::edit(args, &config).await,
        Commands::Delete(args) => userctl::cli::commands::delete(args, &config).await,
        Commands::Config(args) => userctl::cli::commands::config(args, &config).await,
    }
}
