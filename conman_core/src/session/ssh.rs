use std::{
    ffi::OsString,
    process::{Command, Stdio},
};

use log::{info, warn};

use super::launcher::Launcher;
use crate::errors::{ConmanError, Result};
use crate::storage::ConnectionRecord;

/// Client binary used when nothing else is configured.
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Runs the system ssh client in the foreground.
///
/// The child shares our stdin/stdout/stderr, so signals from the terminal
/// reach it through the process group. No timeout, no retry.
#[derive(Debug, Clone)]
pub struct SshLauncher {
    program: OsString,
}

impl Default for SshLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_SSH_PROGRAM)
    }
}

impl SshLauncher {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `<program> -i <key> <user>@<host>`
    pub fn command(&self, record: &ConnectionRecord) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-i")
            .arg(&record.key_path)
            .arg(record.address())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Launcher for SshLauncher {
    fn launch(&self, record: &ConnectionRecord) -> Result<()> {
        info!(
            "Starting {} session to {} as {}",
            self.program.to_string_lossy(),
            record.address(),
            record.name
        );
        let status = self
            .command(record)
            .status()
            .map_err(|source| ConmanError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !status.success() {
            warn!("session {} ended with {}", record.name, status);
            return Err(ConmanError::SessionFailed { status });
        }
        info!("session {} closed", record.name);
        Ok(())
    }
}
