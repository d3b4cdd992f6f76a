// Listgen Library - Public API

// Re-export error types
pub mod error;
pub use error::{ListgenError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::{Fetcher, Source};

// Initialize logging. Configured in code only, no environment lookups.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();
}
