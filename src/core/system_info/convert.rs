use crate::core::system_info::types::{MemoryUnit, UptimeBreakdown};

/// Kilobytes per displayed gigabyte (1024 * 1024)
pub const KB_PER_GB: f64 = 1_048_576.0;

/// Convert a kilobyte amount into the display unit.
pub fn convert_memory(kilobytes: u64, unit: MemoryUnit) -> f64 {
    match unit {
        MemoryUnit::Kilobytes => kilobytes as f64,
        MemoryUnit::Gigabytes => kilobytes as f64 / KB_PER_GB,
    }
}

/// Split seconds since boot into days, hours, minutes and seconds.
pub fn uptime_breakdown(total_seconds: u64) -> UptimeBreakdown {
    UptimeBreakdown {
        days: total_seconds / 86_400,
        hours: (total_seconds / 3_600) % 24,
        minutes: (total_seconds / 60) % 60,
        seconds: total_seconds % 60,
    }
}
