// toypad/src/persistence/mod.rs

//! Saved tokens, toypad layouts and favorites on a [`Storage`] backend.
//!
//! Directory layout under the storage root:
//!
//! ```text
//! tokens/<name>_<uid hex>.bin   one token record
//! toypads/<name>.bin            one toypad record
//! favorites.bin                 favorite minifigure ids
//! ```

use std::io;

use crate::storage::Storage;
use crate::{Error, Result};

pub mod favorites;
pub mod record;
pub mod tokens;
pub mod toypads;

pub use favorites::{Favorites, load_favorites, load_favorites_with, save_favorites};
pub use tokens::{SavedToken, list_saved_tokens, load_saved_token, save_token};
pub use toypads::{delete_saved_toypad, list_saved_toypads, load_saved_toypad, save_toypad};

pub const TOKENS_DIR: &str = "tokens";
pub const TOYPADS_DIR: &str = "toypads";
pub const FAVORITES_FILE: &str = "favorites.bin";
pub const RECORD_EXT: &str = ".bin";

/// Make `name` safe as a file name: ASCII alphanumerics, `-` and `_` are
/// kept, everything else becomes `_`.
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}

pub(crate) fn read_file(storage: &dyn Storage, path: &str) -> Result<Vec<u8>> {
    storage.read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::OpenFailed {
                path: path.to_string(),
                source,
            }
        } else {
            Error::ReadFailed {
                path: path.to_string(),
                source,
            }
        }
    })
}

/// Write `data` to `path`, creating `dir` (an empty `dir` is the storage
/// root) first.
pub(crate) fn write_file(
    storage: &mut dyn Storage,
    dir: &str,
    path: &str,
    data: &[u8],
) -> Result<()> {
    storage.mkdir(dir).map_err(|source| Error::OpenFailed {
        path: dir.to_string(),
        source,
    })?;
    storage.write(path, data).map_err(|source| Error::WriteFailed {
        path: path.to_string(),
        source,
    })
}

/// Record names in `dir`, with the extension stripped.
pub(crate) fn list_records(storage: &dyn Storage, dir: &str) -> Result<Vec<String>> {
    let names = storage.list(dir).map_err(|source| Error::ReadFailed {
        path: dir.to_string(),
        source,
    })?;
    Ok(names
        .into_iter()
        .filter_map(|n| n.strip_suffix(RECORD_EXT).map(str::to_string))
        .collect())
}
