use log::info;

use crate::errors::{ConmanError, Result};
use crate::session::Launcher;
use crate::storage::{ConnectionRecord, Store};

/// Read-modify-write operations over a [`Store`].
///
/// Every call loads the whole file again; nothing is cached between calls.
/// Names are not required to be unique: lookups take the first match and
/// deletion removes all of them.
#[derive(Debug, Clone)]
pub struct Registry {
    store: Store,
}

impl Registry {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Appends a record and rewrites the store. Duplicate names are kept.
    pub fn add(&self, record: ConnectionRecord) -> Result<()> {
        let mut records = self.store.load()?;
        info!("Adding connection {} ({})", record.name, record.address());
        records.push(record);
        self.store.save(&records)
    }

    /// First record called `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Result<Option<ConnectionRecord>> {
        Ok(self
            .store
            .load()?
            .into_iter()
            .find(|record| record.name == name))
    }

    pub fn list(&self) -> Result<Vec<ConnectionRecord>> {
        self.store.load()
    }

    /// Removes every record called `name` and returns how many went away.
    ///
    /// The store is left untouched when nothing matched.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let records = self.store.load()?;
        let before = records.len();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| record.name != name)
            .collect();

        let removed = before - kept.len();
        if removed == 0 {
            return Err(ConmanError::NotFound(name.to_string()));
        }

        self.store.save(&kept)?;
        info!("Deleted {removed} connection(s) named {name}");
        Ok(removed)
    }

    /// Resolves `name` and hands it to `launcher`, blocking until the session ends.
    pub fn connect(&self, name: &str, launcher: &impl Launcher) -> Result<()> {
        let record = self
            .find_by_name(name)?
            .ok_or_else(|| ConmanError::NotFound(name.to_string()))?;
        launcher.launch(&record)
    }
}
