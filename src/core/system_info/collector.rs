use crate::core::config::Config;
use crate::core::system_info::types::*;
use crate::error::{QinfoError, Result};
use crate::platform::FactsProvider;
use log::{debug, warn};

/// Collect every fact the configuration asks for.
///
/// Optional facts that fail become `Reading::Unknown`. A requested rootfs
/// birth date that cannot be read aborts with `QinfoError::RequiredFact`.
pub fn collect_system_info(provider: &dyn FactsProvider, config: &Config) -> Result<SystemFacts> {
    let mut facts = SystemFacts::default();

    if config.display_cpu {
        let model = reading(provider.cpu_model(), "CPU model").map_text();
        let topology = config.display_extra_cpu.then(|| CpuTopology {
            cores: reading(provider.core_count(), "core count"),
            threads: reading(provider.thread_count(), "thread count"),
        });
        facts.cpu = Some(CpuFacts { model, topology });
    }

    if config.display_memory {
        facts.memory = Some(collect_memory(provider));
    }

    if config.display_hostname {
        facts.hostname = Some(reading(provider.hostname(), "hostname").map_text());
    }

    if config.display_os {
        facts.os = Some(OsFacts {
            pretty_name: reading(provider.os_name(), "OS name").map_text(),
            platform: provider.platform_name(),
        });
    }

    if config.display_kernel {
        facts.kernel = Some(reading(provider.kernel_version(), "kernel version").map_text());
    }

    if config.display_uptime {
        facts.uptime = Some(reading(provider.uptime(), "uptime"));
    }

    if config.display_rootfs_birthday {
        let date = provider
            .rootfs_birth()
            .map_err(|e| QinfoError::required_fact("root filesystem birth date", e))?;
        facts.rootfs_birth = Some(date);
    }

    Ok(facts)
}

// Used memory needs both readings, so either failure makes the line unknown
fn collect_memory(provider: &dyn FactsProvider) -> Reading<MemoryFacts> {
    let total = reading(provider.total_memory(), "total memory");
    let available = reading(provider.available_memory(), "available memory");

    match (total, available) {
        (Reading::Known(total_kb), Reading::Known(available_kb)) => {
            if available_kb > total_kb {
                warn!(
                    "Available memory ({} kB) exceeds total ({} kB); reporting 0 used",
                    available_kb, total_kb
                );
            }
            Reading::Known(MemoryFacts {
                total_kb,
                available_kb,
            })
        }
        _ => Reading::Unknown,
    }
}

fn reading<T>(result: Result<T>, what: &str) -> Reading<T> {
    match result {
        Ok(value) => Reading::Known(value),
        Err(e) => {
            warn!("Failed to read {}: {}", what, e);
            Reading::Unknown
        }
    }
}

impl Reading<BoundedText> {
    fn map_text(self) -> Reading<String> {
        match self {
            Reading::Known(text) => {
                if text.is_truncated() {
                    debug!("Value truncated to {} bytes: {}", text.as_str().len(), text);
                }
                Reading::Known(text.into_string())
            }
            Reading::Unknown => Reading::Unknown,
        }
    }
}
