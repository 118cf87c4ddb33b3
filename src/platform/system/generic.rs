use crate::core::system_info::os::kernel_string;
use crate::core::system_info::rootfs;
use crate::core::system_info::types::{
    BoundedText, RootfsDate, CPU_MODEL_MAX_LEN, HOSTNAME_MAX_LEN, OS_NAME_MAX_LEN,
};
use crate::error::{QinfoError, Result};
use crate::platform::provider::FactsProvider;
use std::path::Path;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

const SOURCE: &str = "sysinfo";

/// Reads facts through the `sysinfo` crate for hosts without procfs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }

    fn cpu_system() -> System {
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()))
    }

    fn memory_system() -> System {
        System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        )
    }
}

fn require<T>(value: Option<T>, label: &str) -> Result<T> {
    value.ok_or_else(|| QinfoError::field_not_found(label, SOURCE))
}

fn to_count(label: &str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| QinfoError::parse(label, format!("{} does not fit in u32", value)))
}

impl FactsProvider for SysinfoProvider {
    fn platform_name(&self) -> &'static str {
        match std::env::consts::OS {
            "linux" => "Linux",
            "macos" => "macOS",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            "netbsd" => "NetBSD",
            "openbsd" => "OpenBSD",
            "android" => "Android",
            "ios" => "iOS",
            other => other,
        }
    }

    fn core_count(&self) -> Result<u32> {
        let cores = require(System::physical_core_count(), "physical cores")?;
        to_count("physical cores", cores)
    }

    fn thread_count(&self) -> Result<u32> {
        let sys = Self::cpu_system();
        match sys.cpus().len() {
            0 => Err(QinfoError::field_not_found("logical cpus", SOURCE)),
            n => to_count("logical cpus", n),
        }
    }

    fn cpu_model(&self) -> Result<BoundedText> {
        let sys = Self::cpu_system();
        let cpu = require(sys.cpus().first(), "cpu brand")?;
        let brand = cpu.brand().trim();
        if brand.is_empty() {
            return Err(QinfoError::field_not_found("cpu brand", SOURCE));
        }
        Ok(BoundedText::new(brand, CPU_MODEL_MAX_LEN))
    }

    fn total_memory(&self) -> Result<u64> {
        Ok(Self::memory_system().total_memory() / 1024)
    }

    fn available_memory(&self) -> Result<u64> {
        Ok(Self::memory_system().available_memory() / 1024)
    }

    fn hostname(&self) -> Result<BoundedText> {
        let name = require(System::host_name(), "hostname")?;
        Ok(BoundedText::new(name, HOSTNAME_MAX_LEN))
    }

    fn os_name(&self) -> Result<BoundedText> {
        let name = require(System::long_os_version(), "os version")?;
        Ok(BoundedText::new(name, OS_NAME_MAX_LEN))
    }

    fn kernel_version(&self) -> Result<BoundedText> {
        let name = require(System::name(), "kernel name")?;
        let release = require(System::kernel_version(), "kernel release")?;
        Ok(kernel_string(&name, &release))
    }

    fn uptime(&self) -> Result<u64> {
        Ok(System::uptime())
    }

    fn rootfs_birth(&self) -> Result<RootfsDate> {
        rootfs::read_rootfs_birth(Path::new("/"))
    }
}
