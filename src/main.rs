//! Media Catalog CLI
//!
//! A command-line tool that resolves movie/TV titles against TMDB and
//! keeps the results in a local database.

use clap::Parser;
use media_catalog::cli::{
    args::{Cli, Commands},
    commands::{list, poster, relocate, scan},
};
use media_catalog::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Configuration is loaded once here and handed to every component.
    let config = config::load_config();

    // Run the appropriate command
    match cli.command {
        Commands::Scan { info, tolerance } => {
            scan::scan(&config, info.as_deref(), tolerance).await?;
        }

        Commands::List { limit } => {
            list::list(&config, limit)?;
        }

        Commands::Poster { title, replace } => {
            poster::poster(&config, title.as_deref(), replace)?;
        }

        Commands::Relocate { id } => {
            relocate::relocate(&config, id)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_catalog=debug")
    } else {
        EnvFilter::new("media_catalog=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
