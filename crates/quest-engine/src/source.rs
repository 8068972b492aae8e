//! Reading the schedule export.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ScheduleError};

/// Read the whole export into memory.
///
/// # Errors
/// Returns `ScheduleError::InputNotFound` if nothing exists at `path`, and
/// `ScheduleError::Read` for any other I/O failure.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ScheduleError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ScheduleError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
