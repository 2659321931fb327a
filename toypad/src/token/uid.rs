// toypad/src/token/uid.rs

//! UID derivation rules.
//!
//! Minifigure UIDs are deterministic so a saved figure keeps its identity
//! across sessions; vehicle UIDs are random on every creation.

use hmac_sha256::Hash;
use rand::Rng;

use crate::types::Uid;

/// Derive a minifigure UID from its id, the number of resident tokens
/// already sharing that id, and the device identity string.
pub fn minifigure_uid(id: u32, resident_count: usize, device_identity: &str) -> Uid {
    let mut hasher = Hash::new();
    hasher.update(id.to_le_bytes());
    hasher.update((resident_count as u32).to_le_bytes());
    hasher.update(device_identity.as_bytes());
    let digest = hasher.finalize();

    let mut body = [0u8; 5];
    body.copy_from_slice(&digest[..5]);
    Uid::from_body(body)
}

pub fn random_uid() -> Uid {
    let mut body = [0u8; 5];
    rand::rng().fill(&mut body[..]);
    Uid::from_body(body)
}
