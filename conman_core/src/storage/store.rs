use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use directories::BaseDirs;
use log::debug;

use super::record::ConnectionRecord;
use crate::errors::{ConmanError, Result};

/// Name of the dotfile kept in the user's home directory.
pub const STORE_FILE_NAME: &str = ".conman";

/// The single JSON file holding every saved connection.
///
/// Every write replaces the whole file. There is no locking: two processes
/// saving at the same time lose one side's update.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// `~/.conman` for the invoking user.
    pub fn new() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or(ConmanError::HomeDirUnavailable)?;
        Ok(Self::at(dirs.home_dir().join(STORE_FILE_NAME)))
    }

    /// A store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every stored record in file order.
    ///
    /// A missing file is an empty registry, not an error.
    pub fn load(&self) -> Result<Vec<ConnectionRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ConmanError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // `null` is what an empty list looked like in older dotfiles.
        let records: Option<Vec<ConnectionRecord>> =
            serde_json::from_slice(&bytes).map_err(|source| ConmanError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let records = records.unwrap_or_default();
        debug!("loaded {} record(s) from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrite the file with `records`, owner read/write only.
    pub fn save(&self, records: &[ConnectionRecord]) -> Result<()> {
        let data = serde_json::to_vec(records).map_err(ConmanError::Encode)?;
        self.write_private(&data).map_err(|source| ConmanError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved {} record(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    fn write_private(&self, data: &[u8]) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path)?;

        // `mode` only applies on create; tighten a file that already existed.
        #[cfg(unix)]
        file.set_permissions(fs::Permissions::from_mode(0o600))?;

        file.write_all(data)?;
        file.flush()
    }
}
