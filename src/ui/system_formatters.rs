use crate::core::config::Config;
use crate::core::system_info::types::*;
use crate::ui::formatters::{format_date, format_memory, format_uptime};
use colored::*;
use std::fmt;
use std::io::{self, Write};

const UNKNOWN: &str = "Unknown";

/// One labelled line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format!("{}:", self.label).bold(), self.value)
    }
}

fn text_or_unknown(reading: &Reading<String>) -> String {
    reading
        .known()
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn count_or_unknown(reading: &Reading<u32>) -> String {
    reading
        .known()
        .map(|n| n.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Build the report lines in display order. Only sections present in
/// `facts` produce a line.
pub fn build_report(facts: &SystemFacts, config: &Config) -> Vec<ReportLine> {
    let mut lines = Vec::new();

    if let Some(cpu) = &facts.cpu {
        let mut value = text_or_unknown(&cpu.model);
        if let Some(topology) = &cpu.topology {
            value.push_str(&format!(
                " ({} cores, {} threads)",
                count_or_unknown(&topology.cores),
                count_or_unknown(&topology.threads)
            ));
        }
        lines.push(ReportLine::new("CPU", value));
    }

    if let Some(memory) = &facts.memory {
        let value = match memory {
            Reading::Known(mem) => format_memory(mem, config.memory_unit()),
            Reading::Unknown => UNKNOWN.to_string(),
        };
        lines.push(ReportLine::new("Memory", value));
    }

    if let Some(hostname) = &facts.hostname {
        lines.push(ReportLine::new("Hostname", text_or_unknown(hostname)));
    }

    if let Some(os) = &facts.os {
        let value = format!("{} ({})", text_or_unknown(&os.pretty_name), os.platform);
        lines.push(ReportLine::new("Operating System", value));
    }

    if let Some(kernel) = &facts.kernel {
        lines.push(ReportLine::new("Kernel", text_or_unknown(kernel)));
    }

    if let Some(uptime) = &facts.uptime {
        let value = match uptime {
            Reading::Known(seconds) => format_uptime(*seconds),
            Reading::Unknown => UNKNOWN.to_string(),
        };
        lines.push(ReportLine::new("Uptime", value));
    }

    if let Some(date) = &facts.rootfs_birth {
        lines.push(ReportLine::new(
            "Rootfs Birth",
            format_date(date, config.dates_as_iso),
        ));
    }

    lines
}

/// Write a fully built report, one line per fact
pub fn print_report<W: Write>(out: &mut W, lines: &[ReportLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
