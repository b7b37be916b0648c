//! An in-process stand-in for [`conman_core::Launcher`].
//!
//! Records every launch so tests can check which record reached the session
//! layer without spawning an ssh client.

use std::cell::RefCell;

use conman_core::{ConnectionRecord, Launcher, Result};

#[derive(Default)]
pub struct FakeLauncher {
    pub launched: RefCell<Vec<ConnectionRecord>>,
}

impl Launcher for FakeLauncher {
    fn launch(&self, record: &ConnectionRecord) -> Result<()> {
        self.launched.borrow_mut().push(record.clone());
        Ok(())
    }
}
