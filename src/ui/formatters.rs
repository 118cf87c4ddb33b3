use crate::core::system_info::convert::{convert_memory, uptime_breakdown};
use crate::core::system_info::types::{MemoryFacts, MemoryUnit, RootfsDate};

/// Format memory as "used/total unit": two decimals for GB, whole kB otherwise
pub fn format_memory(memory: &MemoryFacts, unit: MemoryUnit) -> String {
    match unit {
        MemoryUnit::Gigabytes => format!(
            "{:.2}/{:.2} {}",
            convert_memory(memory.used_kb(), unit),
            convert_memory(memory.total_kb, unit),
            unit
        ),
        MemoryUnit::Kilobytes => format!("{}/{} {}", memory.used_kb(), memory.total_kb, unit),
    }
}

/// Format uptime with only the non-zero components, largest first
pub fn format_uptime(total_seconds: u64) -> String {
    let b = uptime_breakdown(total_seconds);
    let parts: Vec<String> = [(b.days, "d"), (b.hours, "h"), (b.minutes, "m"), (b.seconds, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, suffix)| format!("{}{}", value, suffix))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Format a date as YYYY-MM-DD or DD/MM/YYYY
pub fn format_date(date: &RootfsDate, iso: bool) -> String {
    if iso {
        format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
    } else {
        format!("{:02}/{:02}/{:04}", date.day, date.month, date.year)
    }
}
