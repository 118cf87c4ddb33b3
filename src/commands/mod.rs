// Command handlers module
pub mod completions;
pub mod config;
pub mod info;
pub mod version;

use crate::error::QinfoError;

/// Exit code when a requested fact could not be determined
pub const EXIT_FACT_UNAVAILABLE: i32 = 2;
/// Exit code for any other failure
pub const EXIT_FAILURE: i32 = 1;

/// Map a command error to the process exit code
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<QinfoError>() {
        Some(QinfoError::RequiredFact { .. }) => EXIT_FACT_UNAVAILABLE,
        _ => EXIT_FAILURE,
    }
}
