use crate::core::system_info::types::{BoundedText, RootfsDate};
use crate::error::{QinfoError, Result};
use crate::platform::system::{LinuxProvider, SysinfoProvider};
use log::debug;

/// Source of raw system facts for one platform.
///
/// Every method reads its fact independently. A zero count is a genuine
/// reading; failures are always reported through `Err`.
pub trait FactsProvider {
    /// Platform name shown next to the OS pretty name
    fn platform_name(&self) -> &'static str;

    fn core_count(&self) -> Result<u32>;
    fn thread_count(&self) -> Result<u32>;
    fn cpu_model(&self) -> Result<BoundedText>;

    /// Kilobytes
    fn total_memory(&self) -> Result<u64>;
    /// Kilobytes
    fn available_memory(&self) -> Result<u64>;

    fn hostname(&self) -> Result<BoundedText>;
    fn os_name(&self) -> Result<BoundedText>;
    fn kernel_version(&self) -> Result<BoundedText>;
    fn uptime(&self) -> Result<u64>;
    fn rootfs_birth(&self) -> Result<RootfsDate>;
}

/// Pick the provider for the running platform.
pub fn detect_provider() -> Result<Box<dyn FactsProvider>> {
    if cfg!(target_os = "linux") {
        debug!("Using procfs provider");
        return Ok(Box::new(LinuxProvider::new()));
    }

    if sysinfo::IS_SUPPORTED_SYSTEM {
        debug!("Using sysinfo provider for {}", std::env::consts::OS);
        return Ok(Box::new(SysinfoProvider::new()));
    }

    Err(QinfoError::unsupported_platform(std::env::consts::OS))
}
