use std::fs;

use conman_core::{ConmanError, ConnectionRecord, Store};

mod common;
use common::init_test_logging;

fn temp_store() -> (tempfile::TempDir, Store) {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = Store::at(dir.path().join(".conman"));
    (dir, store)
}

#[test]
fn missing_file_loads_as_empty() -> anyhow::Result<()> {
    let (_dir, store) = temp_store();

    assert!(store.load()?.is_empty());
    assert!(!store.path().exists(), "loading must not create the file");
    Ok(())
}

#[test]
fn saving_what_was_loaded_reproduces_the_file() -> anyhow::Result<()> {
    let (_dir, store) = temp_store();
    let written = r#"[{"name":"a","user":"root","ip":"10.0.0.1","key":"/k/a"},{"name":"b","user":"me","ip":"b.example","key":"/k/b"}]"#;
    fs::write(store.path(), written)?;

    let records = store.load()?;
    store.save(&records)?;

    assert_eq!(fs::read_to_string(store.path())?, written);
    Ok(())
}

#[test]
fn null_document_is_an_empty_registry() -> anyhow::Result<()> {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "null")?;

    assert!(store.load()?.is_empty());
    Ok(())
}

#[test]
fn malformed_json_is_a_decode_error() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(store.load(), Err(ConmanError::Decode { .. })));
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), r#"{"name":"box"}"#).unwrap();

    assert!(matches!(store.load(), Err(ConmanError::Decode { .. })));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let (dir, _) = temp_store();
    // A directory exists at the path, so reading it fails with something other than NotFound.
    let store = Store::at(dir.path());

    assert!(matches!(store.load(), Err(ConmanError::Read { .. })));
}

#[test]
fn save_into_missing_directory_is_a_write_error() {
    let (dir, _) = temp_store();
    let store = Store::at(dir.path().join("missing").join(".conman"));

    let err = store
        .save(&[ConnectionRecord::new("box", "u", "h", "/k")])
        .unwrap_err();
    assert!(matches!(err, ConmanError::Write { .. }));
}

#[test]
fn save_replaces_previous_contents() -> anyhow::Result<()> {
    let (_dir, store) = temp_store();
    store.save(&[
        ConnectionRecord::new("one", "u", "h1", "/k1"),
        ConnectionRecord::new("two", "u", "h2", "/k2"),
    ])?;
    store.save(&[ConnectionRecord::new("three", "u", "h3", "/k3")])?;

    let names: Vec<_> = store.load()?.into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["three"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn store_file_is_owner_only() -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = temp_store();
    fs::write(store.path(), "[]")?;
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644))?;

    store.save(&[ConnectionRecord::new("box", "u", "h", "/k")])?;

    let mode = fs::metadata(store.path())?.permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
    Ok(())
}
