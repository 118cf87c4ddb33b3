// qinfo Library - Public API

// Re-export error types
pub mod error;
pub use error::{QinfoError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

// Initialize logging. RUST_LOG wins unless --verbose was given.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
