use crate::core::system_info::types::RootfsDate;
use crate::error::{QinfoError, Result};
use chrono::{DateTime, Datelike, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Birth date of the filesystem mounted at `root`.
///
/// Uses the birth time recorded in the root directory's metadata (statx on
/// Linux). Filesystems that do not record it yield `SourceUnavailable`.
pub fn read_rootfs_birth(root: &Path) -> Result<RootfsDate> {
    let metadata = fs::metadata(root).map_err(|e| QinfoError::source_unavailable(root, e))?;
    let created = metadata
        .created()
        .map_err(|e| QinfoError::source_unavailable(root, e))?;

    Ok(date_from_system_time(created))
}

/// Calendar date of a timestamp in the local timezone.
pub fn date_from_system_time(time: SystemTime) -> RootfsDate {
    let datetime: DateTime<Local> = time.into();
    RootfsDate {
        day: datetime.day(),
        month: datetime.month(),
        year: datetime.year().max(0) as u32,
    }
}
