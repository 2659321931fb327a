// toypad/src/persistence/favorites.rs

//! Favorite minifigure ids.
//!
//! File format: count (LE u32) followed by `count` ids (LE u32).

use std::io;

use crate::constants::MAX_FAVORITES;
use crate::persistence::{FAVORITES_FILE, write_file};
use crate::storage::Storage;
use crate::token::names;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns false if `id` was already present.
    pub fn add(&mut self, id: u32) -> Result<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        if self.ids.len() >= MAX_FAVORITES {
            return Err(Error::FavoritesFull(MAX_FAVORITES));
        }
        self.ids.push(id);
        Ok(true)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&x| x != id);
        self.ids.len() != before
    }

    /// Flip membership. Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        if self.remove(id) {
            Ok(false)
        } else {
            self.add(id)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.ids.len() * 4);
        out.extend_from_slice(&(self.ids.len() as u32).to_le_bytes());
        for id in &self.ids {
            out.extend_from_slice(&id.to_le_bytes());
        }
        out
    }

    /// Lenient decode: a count larger than the data is clamped, and
    /// duplicates and ids past the limit are dropped.
    pub fn decode(bytes: &[u8]) -> Self {
        let mut favorites = Self::new();
        let Some((count, rest)) = bytes.split_first_chunk::<4>() else {
            return favorites;
        };
        let count = u32::from_le_bytes(*count) as usize;
        for chunk in rest.chunks_exact(4).take(count.min(MAX_FAVORITES)) {
            let mut id = [0u8; 4];
            id.copy_from_slice(chunk);
            // duplicates are dropped; the cap above keeps add() from failing
            let _ = favorites.add(u32::from_le_bytes(id));
        }
        favorites
    }
}

/// Load favorites, dropping ids that `resolves` rejects. If anything was
/// dropped the cleaned list is written back. A missing file is an empty
/// list.
pub fn load_favorites_with(
    storage: &mut dyn Storage,
    resolves: impl Fn(u32) -> bool,
) -> Result<Favorites> {
    let bytes = match storage.read(FAVORITES_FILE) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Favorites::new()),
        Err(source) => {
            return Err(Error::ReadFailed {
                path: FAVORITES_FILE.to_string(),
                source,
            });
        }
    };

    let mut favorites = Favorites::decode(&bytes);
    let before = favorites.len();
    favorites.ids.retain(|&id| resolves(id));
    if favorites.len() != before {
        log::warn!(
            "pruned {} unknown favorite ids",
            before - favorites.len()
        );
    }
    if favorites.encode() != bytes {
        save_favorites(storage, &favorites)?;
    }
    Ok(favorites)
}

/// Load favorites, keeping only ids present in the minifigure table.
pub fn load_favorites(storage: &mut dyn Storage) -> Result<Favorites> {
    load_favorites_with(storage, |id| names::minifigure_name(id).is_some())
}

pub fn save_favorites(storage: &mut dyn Storage, favorites: &Favorites) -> Result<()> {
    write_file(storage, "", FAVORITES_FILE, &favorites.encode())
}
