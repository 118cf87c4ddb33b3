use crate::core::system_info::types::MemoryUnit;
use crate::error::{QinfoError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Display options. Read once at startup and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display_cpu: bool,
    /// Core and thread counts after the CPU model
    pub display_extra_cpu: bool,
    pub display_memory: bool,
    pub display_hostname: bool,
    pub display_os: bool,
    pub display_kernel: bool,
    pub display_uptime: bool,
    pub display_rootfs_birthday: bool,
    pub use_gigabytes: bool,
    /// YYYY-MM-DD instead of DD/MM/YYYY
    pub dates_as_iso: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_cpu: true,
            display_extra_cpu: true,
            display_memory: true,
            display_hostname: true,
            display_os: true,
            display_kernel: true,
            display_uptime: true,
            display_rootfs_birthday: true,
            use_gigabytes: true,
            dates_as_iso: false,
        }
    }
}

/// Which sections to show, as selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSelection {
    pub cpu: bool,
    pub extra_cpu: bool,
    pub memory: bool,
    pub hostname: bool,
    pub os: bool,
    pub kernel: bool,
    pub uptime: bool,
    pub rootfs: bool,
}

impl SectionSelection {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .map_err(|e| QinfoError::config(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::parse(&data)
            .map_err(|e| QinfoError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text. Empty input yields the defaults; unknown keys are
    /// rejected.
    pub fn parse(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        toml::from_str(data).map_err(|e| QinfoError::config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_commented_toml())?;
        Ok(())
    }

    /// Render the config as TOML with a comment above every key, for a file
    /// meant to be edited by hand. Parses back to `self`.
    pub fn to_commented_toml(&self) -> String {
        let entries = [
            ("display_cpu", "Show the CPU model", self.display_cpu),
            (
                "display_extra_cpu",
                "Append physical core and hardware thread counts to the CPU line",
                self.display_extra_cpu,
            ),
            ("display_memory", "Show used/total memory", self.display_memory),
            ("display_hostname", "Show the hostname", self.display_hostname),
            ("display_os", "Show the operating system name", self.display_os),
            ("display_kernel", "Show the kernel name and release", self.display_kernel),
            ("display_uptime", "Show time since boot", self.display_uptime),
            (
                "display_rootfs_birthday",
                "Show the root filesystem creation date. This line is required:\n\
                 # qinfo exits with code 2 when the filesystem has no birth time",
                self.display_rootfs_birthday,
            ),
            ("use_gigabytes", "Memory in GB with two decimals; false for whole kB", self.use_gigabytes),
            ("dates_as_iso", "Dates as YYYY-MM-DD instead of DD/MM/YYYY", self.dates_as_iso),
        ];

        let mut out = String::from("# qinfo configuration\n# Command-line flags override these values.\n");
        for (key, comment, value) in entries {
            out.push_str(&format!("\n# {}\n{} = {}\n", comment, key, value));
        }
        out
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| QinfoError::config(e.to_string()))
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QinfoError::config("Could not determine config directory"))?;

        Ok(config_dir.join("qinfo").join("config.toml"))
    }

    pub fn memory_unit(&self) -> MemoryUnit {
        if self.use_gigabytes {
            MemoryUnit::Gigabytes
        } else {
            MemoryUnit::Kilobytes
        }
    }

    /// Restrict display to the selected sections. An empty selection keeps
    /// the configured toggles.
    pub fn apply_selection(&mut self, selection: &SectionSelection) {
        if selection.is_empty() {
            return;
        }

        self.display_cpu = selection.cpu || selection.extra_cpu;
        self.display_extra_cpu = selection.extra_cpu;
        self.display_memory = selection.memory;
        self.display_hostname = selection.hostname;
        self.display_os = selection.os;
        self.display_kernel = selection.kernel;
        self.display_uptime = selection.uptime;
        self.display_rootfs_birthday = selection.rootfs;
    }
}
