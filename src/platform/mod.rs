// Platform-specific code module

pub mod provider;
pub mod system;

// Re-exports for cleaner imports
pub use provider::{detect_provider, FactsProvider};
pub use system::{LinuxProvider, SysinfoProvider};
