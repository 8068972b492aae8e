//! Error types for schedule conversion.
//!
//! Slots that cannot be turned into calendar events are not errors: the export
//! routinely carries placeholder rows, and those are dropped silently by the
//! parser. Everything here aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid building table: {0}")]
    BuildingTable(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
