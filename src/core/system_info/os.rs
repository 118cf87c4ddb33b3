use crate::core::system_info::scanner::{find_field, first_line};
use crate::core::system_info::types::{
    BoundedText, HOSTNAME_MAX_LEN, KERNEL_VERSION_MAX_LEN, OS_NAME_MAX_LEN,
};
use crate::error::{QinfoError, Result};
use std::io::BufRead;

/// `PRETTY_NAME` from an os-release file.
///
/// A quoted value is taken verbatim between its quotes, escapes included.
/// An unquoted value is taken as is.
pub fn read_os_name<R: BufRead>(reader: R) -> Result<BoundedText> {
    let raw = find_field(reader, "PRETTY_NAME", '=', "os-release")?;
    let name = strip_quotes("PRETTY_NAME", &raw)?;
    Ok(BoundedText::new(name, OS_NAME_MAX_LEN))
}

fn strip_quotes<'a>(label: &str, raw: &'a str) -> Result<&'a str> {
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            return rest.strip_suffix(quote).ok_or_else(|| {
                QinfoError::parse(label, format!("unterminated quote in {}", raw))
            });
        }
    }

    if raw.ends_with(['"', '\'']) {
        return Err(QinfoError::parse(label, format!("unbalanced quote in {}", raw)));
    }

    Ok(raw)
}

/// First line of the hostname pseudo-file, bounded to 256 bytes.
pub fn read_hostname<R: BufRead>(reader: R) -> Result<BoundedText> {
    let line = first_line(reader, "hostname", "hostname")?;
    if line.trim().is_empty() {
        return Err(QinfoError::parse("hostname", "empty hostname"));
    }
    Ok(BoundedText::new(line, HOSTNAME_MAX_LEN))
}

/// Kernel name and release joined like `uname -s -r`.
pub fn read_kernel_version<R: BufRead, S: BufRead>(ostype: R, osrelease: S) -> Result<BoundedText> {
    let name = first_line(ostype, "ostype", "ostype")?;
    let release = first_line(osrelease, "osrelease", "osrelease")?;
    Ok(kernel_string(name.trim(), release.trim()))
}

pub fn kernel_string(name: &str, release: &str) -> BoundedText {
    BoundedText::new(format!("{} {}", name, release), KERNEL_VERSION_MAX_LEN)
}
