use clap::Parser;

use crate::config::Config;
use crate::coverage::DEFAULT_BASE_URL;

/// Couverture - terminal mobile network coverage checker
#[derive(Parser, Debug)]
#[command(name = "couverture")]
#[command(about = "A TUI for checking French mobile network coverage by address")]
#[command(version)]
pub struct Cli {
    /// Base URL of the coverage backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub backend_url: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            backend_url: self.backend_url,
            debug: self.debug,
        }
    }
}
