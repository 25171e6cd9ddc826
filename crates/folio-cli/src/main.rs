//! # folio CLI Entry Point
//!
//! Parses arguments, builds the API client, and dispatches to the handler
//! modules.

use clap::Parser;
use folio_client::{ApiClient, ApiConfig};

/// Portfolio command-line client.
///
/// Lists projects and sends contact messages through the portfolio backend.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Backend base URL, e.g. `http://127.0.0.1:5000/api`.
    /// Overrides `FOLIO_API_URL`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List projects, optionally filtered by status and search term.
    Projects(folio_cli::projects::ProjectsArgs),
    /// Send a message through the contact form.
    Contact(folio_cli::contact::ContactArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.api_url {
        Some(url) => ApiConfig::new(url)?,
        None => ApiConfig::from_env()?,
    };
    let api = ApiClient::new(config)?;
    tracing::debug!(base_url = %api.config().base_url, "using portfolio backend");

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Projects(args) => folio_cli::projects::run(args, api, &mut stdout).await,
        Commands::Contact(args) => folio_cli::contact::run(args, api, &mut stdout).await,
    }
}
