#[path = "../common/mod.rs"]
mod common;

use serial_test::serial;
use toypad::persistence::{self, Favorites};
use toypad::storage::{FsStorage, MemoryStorage, Storage};

#[test]
fn favorites_survive_reload() {
    let mut storage = MemoryStorage::new();
    let mut favorites = Favorites::new();
    favorites.add(16).unwrap();
    favorites.add(41).unwrap();
    persistence::save_favorites(&mut storage, &favorites).unwrap();

    let loaded = persistence::load_favorites(&mut storage).unwrap();
    assert_eq!(loaded, favorites);
}

#[test]
fn unknown_ids_are_pruned_and_file_rewritten() {
    common::init_logging();
    let mut storage = MemoryStorage::new();
    let mut raw = 4u32.to_le_bytes().to_vec();
    for id in [1u32, 500, 1, 77] {
        raw.extend_from_slice(&id.to_le_bytes());
    }
    storage.write("favorites.bin", &raw).unwrap();

    let loaded = persistence::load_favorites(&mut storage).unwrap();
    assert_eq!(loaded.ids(), &[1, 77]);

    let rewritten = storage.read("favorites.bin").unwrap();
    assert_eq!(&rewritten[..4], &2u32.to_le_bytes());
    assert_eq!(rewritten.len(), 12);
}

#[test]
fn custom_resolver() {
    let mut storage = MemoryStorage::new();
    let mut favorites = Favorites::new();
    favorites.add(2000).unwrap();
    persistence::save_favorites(&mut storage, &favorites).unwrap();
    let loaded = persistence::load_favorites_with(&mut storage, |id| id >= 1000).unwrap();
    assert_eq!(loaded.ids(), &[2000]);
}

#[test]
#[serial]
fn favorites_on_disk() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("toypad-fav-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let mut storage = FsStorage::new(&dir);

    let mut favorites = persistence::load_favorites(&mut storage)?;
    assert!(favorites.is_empty());
    assert!(favorites.toggle(3)?);
    persistence::save_favorites(&mut storage, &favorites)?;

    let again = persistence::load_favorites(&mut storage)?;
    assert!(again.contains(3));
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
