// UI and formatting module

pub mod formatters;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_date, format_memory, format_uptime};
pub use system_formatters::{build_report, print_report, ReportLine};
