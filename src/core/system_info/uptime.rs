use crate::core::system_info::scanner::first_line;
use crate::error::{QinfoError, Result};
use std::io::BufRead;

/// Seconds since boot from the first token of an uptime source
/// (`"12345.67 54321.00"`). The fractional part is dropped.
pub fn read_uptime<R: BufRead>(reader: R) -> Result<u64> {
    let line = first_line(reader, "uptime", "uptime")?;
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| QinfoError::parse("uptime", "empty uptime source"))?;

    let whole = token.split_once('.').map_or(token, |(whole, _)| whole);
    whole
        .parse::<u64>()
        .map_err(|e| QinfoError::parse("uptime", format!("'{}' is not a second count ({})", token, e)))
}
