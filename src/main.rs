use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use couverture::app::App;
use couverture::cli::Cli;
use couverture::coverage::CoverageClient;
use couverture::geocoding::BanClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();

    // Logs go to stderr; stdout belongs to the terminal UI
    let level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Using coverage backend at {}", config.backend_url);

    let suggestions = Arc::new(BanClient::new());
    let coverage = Arc::new(CoverageClient::new(&config.backend_url));

    let mut app = App::new(suggestions, coverage);
    app.run().await
}
