use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// A central error enum for everything the registry and launcher can report.
#[derive(Debug, Error)]
pub enum ConmanError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} is not a valid connection list: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not encode connections: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid address format {address:?}, expected user@host")]
    Format { address: String },

    #[error("connection {0} not found")]
    NotFound(String),

    #[error("could not start {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("ssh session ended with {status}")]
    SessionFailed { status: ExitStatus },

    #[error("unable to locate the home directory")]
    HomeDirUnavailable,
}

impl ConmanError {
    /// Process exit code to report for this error.
    ///
    /// A failed session hands the client's own code through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConmanError::SessionFailed { status } => match status.code() {
                Some(code) if code != 0 => code,
                _ => 1,
            },
            _ => 1,
        }
    }
}

pub type Result<T, E = ConmanError> = std::result::Result<T, E>;
