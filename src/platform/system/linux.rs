use crate::core::system_info::scanner::open_source;
use crate::core::system_info::types::{BoundedText, RootfsDate};
use crate::core::system_info::{cpu, memory, os, rootfs, uptime};
use crate::error::Result;
use crate::platform::provider::FactsProvider;
use std::path::{Path, PathBuf};

const CPUINFO: &str = "proc/cpuinfo";
const MEMINFO: &str = "proc/meminfo";
const OS_RELEASE: &str = "etc/os-release";
const HOSTNAME: &str = "proc/sys/kernel/hostname";
const UPTIME: &str = "proc/uptime";
const OSTYPE: &str = "proc/sys/kernel/ostype";
const OSRELEASE: &str = "proc/sys/kernel/osrelease";

/// Reads facts from procfs and `/etc/os-release`.
///
/// All paths are resolved under `root`, which is `/` on a live system.
#[derive(Debug, Clone)]
pub struct LinuxProvider {
    root: PathBuf,
}

impl LinuxProvider {
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Resolve every source below `root` instead of `/`
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn source(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl Default for LinuxProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FactsProvider for LinuxProvider {
    fn platform_name(&self) -> &'static str {
        "Linux"
    }

    fn core_count(&self) -> Result<u32> {
        cpu::read_core_count(open_source(&self.source(CPUINFO))?)
    }

    fn thread_count(&self) -> Result<u32> {
        cpu::read_thread_count(open_source(&self.source(CPUINFO))?)
    }

    fn cpu_model(&self) -> Result<BoundedText> {
        cpu::read_cpu_model(open_source(&self.source(CPUINFO))?)
    }

    fn total_memory(&self) -> Result<u64> {
        memory::read_total_memory(open_source(&self.source(MEMINFO))?)
    }

    fn available_memory(&self) -> Result<u64> {
        memory::read_available_memory(open_source(&self.source(MEMINFO))?)
    }

    fn hostname(&self) -> Result<BoundedText> {
        os::read_hostname(open_source(&self.source(HOSTNAME))?)
    }

    fn os_name(&self) -> Result<BoundedText> {
        os::read_os_name(open_source(&self.source(OS_RELEASE))?)
    }

    fn kernel_version(&self) -> Result<BoundedText> {
        os::read_kernel_version(
            open_source(&self.source(OSTYPE))?,
            open_source(&self.source(OSRELEASE))?,
        )
    }

    fn uptime(&self) -> Result<u64> {
        uptime::read_uptime(open_source(&self.source(UPTIME))?)
    }

    fn rootfs_birth(&self) -> Result<RootfsDate> {
        rootfs::read_rootfs_birth(&self.root)
    }
}
