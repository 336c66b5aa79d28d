use std::io;

use thiserror::Error;

/// Everything that can go wrong while staging, compiling or applying screen settings.
#[derive(Debug, Error)]
pub enum RandrError {
    /// A value the caller supplied is outside the accepted set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The screen is not in a state that allows the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// `--off` was staged together with other changes.
    #[error("conflicting changes: {0}")]
    ConflictingChanges(String),
    /// The external tool ran and exited unsuccessfully.
    #[error("`{}` failed ({status}): {}", .command.join(" "), .output.join("\n"))]
    ExternalTool {
        command: Vec<String>,
        status: String,
        output: Vec<String>,
    },
    /// The external tool could not be started.
    #[error("unable to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RandrError>;
