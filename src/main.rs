//! Entry point for the download page server.
//!
//! # Usage
//!
//! ```bash
//! REPOSITORY="https://github.com/owner/nagato" cargo run
//! cargo run -- --listen 127.0.0.1:8080 --legacy-routes
//! ```

use anyhow::Result;
use clap::Parser;
use nagato_front::config::{self, Overrides};
use nagato_front::{logging, server};

/// Serves the Nagato download page.
#[derive(Parser)]
#[command(name = "nagato-front")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Repository URL shown on the page, overrides `REPOSITORY`
    #[arg(long)]
    repository: Option<String>,

    /// Also serve the page at `/download`
    #[arg(long)]
    legacy_routes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_from_env(Overrides {
        listen_addr: cli.listen,
        repository: cli.repository,
        legacy_routes: cli.legacy_routes,
    })?;

    logging::init(&config)?;
    config.print_summary();

    server::run(config).await
}
