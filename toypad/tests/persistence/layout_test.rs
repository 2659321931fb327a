#[path = "../common/mod.rs"]
mod common;

use std::path::PathBuf;

use common::fixtures::box_at;
use serial_test::serial;
use toypad::persistence;
use toypad::storage::{FsStorage, MemoryStorage, Storage};
use toypad::test_support;
use toypad::types::SlotIndex;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("toypad-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn snapshot_roundtrip_in_memory() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(50, box_at(0)).unwrap();
    pad.place_vehicle(1012, 3, 4, box_at(3)).unwrap();
    pad.place_minifigure(7, box_at(5)).unwrap();

    let mut storage = MemoryStorage::new();
    pad.save_layout(&mut storage, "weekend").unwrap();
    let before = pad.snapshot();

    pad.remove_all();
    assert_eq!(pad.load_layout(&storage, "weekend").unwrap(), 3);
    assert_eq!(pad.snapshot(), before);

    // name longer than a record can hold comes back from the tables
    let slot = SlotIndex::new(0).unwrap();
    assert_eq!(pad.token(slot).unwrap().name(), "Lumpy Space Princess");
}

#[test]
#[serial]
fn snapshot_roundtrip_on_disk() -> anyhow::Result<()> {
    common::init_logging();
    let dir = scratch_dir("layout");
    let mut storage = FsStorage::new(&dir);

    let (mut pad, _mock) = test_support::connected_pad()?;
    pad.place_minifigure(1, box_at(1))?;
    pad.place_vehicle(1030, 0, 9, box_at(2))?;
    pad.save_layout(&mut storage, "two tokens")?;

    assert_eq!(
        persistence::list_saved_toypads(&storage)?,
        vec!["two_tokens".to_string()]
    );

    let (mut other, mock) = test_support::connected_pad()?;
    assert_eq!(other.load_layout(&storage, "two tokens")?, 2);
    assert_eq!(other.snapshot(), pad.snapshot());
    assert_eq!(mock.sent().len(), 2);

    persistence::delete_saved_toypad(&mut storage, "two tokens")?;
    assert!(persistence::list_saved_toypads(&storage)?.is_empty());
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn saved_token_can_be_placed_again() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let slot = pad.place_vehicle(1006, 1, 2, box_at(0)).unwrap();
    let uid = *pad.token(slot).unwrap().uid();

    let mut storage = MemoryStorage::new();
    let path = pad.save_token(&mut storage, slot).unwrap();
    pad.remove(slot).unwrap();

    let listed = persistence::list_saved_tokens(&storage).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].path, path);

    let placed = pad.load_token(&storage, &path, box_at(2)).unwrap();
    let token = pad.token(placed).unwrap();
    assert_eq!(*token.uid(), uid);
    assert_eq!(token.name(), "Batmobile");
    assert!(token.is_vehicle());
}

#[test]
fn missing_layout_is_an_error() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let storage = MemoryStorage::new();
    assert!(matches!(
        pad.load_layout(&storage, "nope"),
        Err(toypad::Error::OpenFailed { .. })
    ));
    assert!(!storage.exists("toypads/nope.bin"));
}
