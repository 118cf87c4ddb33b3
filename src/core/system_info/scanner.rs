// Bounded line scanner shared by every procfs-style reader

use crate::error::{QinfoError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Upper bound on lines inspected per scan. A source longer than this is
/// treated as if the label were missing.
pub const MAX_SCAN_LINES: usize = 65_536;

/// Open a textual source for scanning.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| QinfoError::source_unavailable(path, e))
}

/// Read one raw line into `buf`, without its terminator. Returns false at
/// end of input.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(true)
}

/// Scan forward for the first `key <separator> value` line whose trimmed key
/// equals `label` and return the trimmed value.
///
/// Unrelated lines (lines without the separator, or that are not valid
/// UTF-8) are skipped. A matching line with a non-UTF-8 value is a
/// `ParseError`. The scan ends with `FieldNotFound` at end of input or after
/// `MAX_SCAN_LINES`.
pub fn find_field<R: BufRead>(
    mut reader: R,
    label: &str,
    separator: char,
    source_name: &str,
) -> Result<String> {
    let mut buf = Vec::new();
    let mut scanned = 0;

    while scanned < MAX_SCAN_LINES && next_line(&mut reader, &mut buf)? {
        scanned += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some((key, value)) = line.split_once(separator) else {
            continue;
        };
        if key.trim() != label {
            continue;
        }

        if std::str::from_utf8(&buf).is_err() {
            return Err(QinfoError::parse(label, "value is not valid UTF-8"));
        }
        return Ok(value.trim().to_string());
    }

    Err(QinfoError::field_not_found(label, source_name))
}

/// Return the first line of a source with its line terminator removed.
pub fn first_line<R: BufRead>(mut reader: R, label: &str, source_name: &str) -> Result<String> {
    let mut buf = Vec::new();
    if !next_line(&mut reader, &mut buf)? {
        return Err(QinfoError::field_not_found(label, source_name));
    }

    String::from_utf8(buf).map_err(|_| QinfoError::parse(label, "value is not valid UTF-8"))
}

/// Parse an unsigned integer field value.
pub fn parse_unsigned(label: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|e| QinfoError::parse(label, format!("'{}' is not an unsigned integer ({})", value, e)))
}

/// Parse a `<integer> kB` field value into kilobytes.
pub fn parse_kilobytes(label: &str, value: &str) -> Result<u64> {
    let mut parts = value.split_whitespace();
    let amount = parts
        .next()
        .ok_or_else(|| QinfoError::parse(label, "empty value"))?;

    match parts.next() {
        Some("kB") => {}
        Some(other) => {
            return Err(QinfoError::parse(
                label,
                format!("expected unit 'kB', found '{}'", other),
            ))
        }
        None => return Err(QinfoError::parse(label, "missing unit 'kB'")),
    }

    amount
        .parse::<u64>()
        .map_err(|e| QinfoError::parse(label, format!("'{}' is not a kilobyte count ({})", amount, e)))
}
