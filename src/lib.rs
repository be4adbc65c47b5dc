pub mod app;
pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod events;
pub mod geocoding;
pub mod search;
pub mod theme;
pub mod ui;

pub use app::App;
