// toypad/src/persistence/toypads.rs

use crate::persistence::record::{decode_layout, encode_layout};
use crate::persistence::{
    RECORD_EXT, TOYPADS_DIR, list_records, read_file, sanitize_name, write_file,
};
use crate::storage::{Storage, join};
use crate::toypad::Layout;
use crate::{Error, Result};

fn toypad_path(name: &str) -> String {
    join(TOYPADS_DIR, &format!("{}{}", sanitize_name(name), RECORD_EXT))
}

/// Save a full pad snapshot under `name`. Returns the path written.
pub fn save_toypad(storage: &mut dyn Storage, name: &str, layout: &Layout) -> Result<String> {
    let path = toypad_path(name);
    write_file(storage, TOYPADS_DIR, &path, &encode_layout(layout))?;
    log::info!("saved toypad {} ({} tokens)", path, layout.occupied());
    Ok(path)
}

pub fn load_saved_toypad(storage: &dyn Storage, name: &str) -> Result<Layout> {
    let path = toypad_path(name);
    let bytes = read_file(storage, &path)?;
    decode_layout(&bytes).ok_or_else(|| Error::CorruptRecord {
        path,
        reason: format!("unexpected size {}", bytes.len()),
    })
}

pub fn list_saved_toypads(storage: &dyn Storage) -> Result<Vec<String>> {
    list_records(storage, TOYPADS_DIR)
}

pub fn delete_saved_toypad(storage: &mut dyn Storage, name: &str) -> Result<()> {
    let path = toypad_path(name);
    storage.remove(&path).map_err(|source| Error::OpenFailed { path, source })
}
