// Core business logic module

pub mod config;
pub mod system_info;

// Re-export commonly used items
pub use config::{Config, SectionSelection};
pub use system_info::collect_system_info;
