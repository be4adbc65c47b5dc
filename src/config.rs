//! Run configuration resolved from the command line.

use crate::coverage::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the coverage backend.
    pub backend_url: String,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
        }
    }
}
