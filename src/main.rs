//! Server binary: loads configuration, sets up logging and serves the API.

use anyhow::{Context, Result};
use clap::Parser;
use shorturls::config::{Config, load_from_env};
use shorturls::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener.
#[derive(Parser)]
#[command(name = "shorturls")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Short link prefix, overrides BASE_URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_from_env()?.with_overrides(cli.listen, cli.base_url);
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
