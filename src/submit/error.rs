use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("can't write job script {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("can't set permissions on job script {}", .path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("can't start submit command {command}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed waiting for submit command {command}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("submit command {command} exited with {status}")]
    Rejected {
        command: String,
        status: ExitStatus,
    },
    #[error("submit command {command} still running after {}s, killed", .after.as_secs())]
    TimedOut {
        command: String,
        after: Duration,
    },
}
