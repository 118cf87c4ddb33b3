use crate::core::system_info::scanner::{find_field, parse_kilobytes};
use crate::error::Result;
use std::io::BufRead;

const SOURCE: &str = "meminfo";

/// `MemTotal` in kilobytes. Readers never convert units.
pub fn read_total_memory<R: BufRead>(reader: R) -> Result<u64> {
    let value = find_field(reader, "MemTotal", ':', SOURCE)?;
    parse_kilobytes("MemTotal", &value)
}

/// `MemAvailable` in kilobytes.
pub fn read_available_memory<R: BufRead>(reader: R) -> Result<u64> {
    let value = find_field(reader, "MemAvailable", ':', SOURCE)?;
    parse_kilobytes("MemAvailable", &value)
}
