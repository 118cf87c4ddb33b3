use crate::core::system_info::scanner::{find_field, parse_unsigned};
use crate::core::system_info::types::{BoundedText, CPU_MODEL_MAX_LEN};
use crate::error::Result;
use std::io::BufRead;

const SOURCE: &str = "cpuinfo";

/// Physical core count from the `cpu cores` field of a cpuinfo table.
pub fn read_core_count<R: BufRead>(reader: R) -> Result<u32> {
    let value = find_field(reader, "cpu cores", ':', SOURCE)?;
    parse_unsigned("cpu cores", &value)
}

/// Hardware thread count from the `siblings` field of a cpuinfo table.
pub fn read_thread_count<R: BufRead>(reader: R) -> Result<u32> {
    let value = find_field(reader, "siblings", ':', SOURCE)?;
    parse_unsigned("siblings", &value)
}

/// CPU model string from the `model name` field, bounded to 100 bytes.
pub fn read_cpu_model<R: BufRead>(reader: R) -> Result<BoundedText> {
    let value = find_field(reader, "model name", ':', SOURCE)?;
    Ok(BoundedText::new(value, CPU_MODEL_MAX_LEN))
}
