#![allow(dead_code)]

pub mod fake_launcher;

use conman_core::{Registry, Store};
use log::LevelFilter;
use tempfile::TempDir;

/// Logs appear only with `-- --nocapture` or when the test fails.
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A registry backed by `.conman` inside a fresh temp dir.
///
/// Keep the `TempDir` alive for as long as the registry is used.
pub fn temp_registry() -> (TempDir, Registry) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = Store::at(dir.path().join(".conman"));
    (dir, Registry::new(store))
}
