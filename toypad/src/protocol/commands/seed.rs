// toypad/src/protocol/commands/seed.rs

use crate::crypto::{TeaKey, decrypt, encrypt};
use crate::protocol::parser;

/// Decode SEED data: enc{seed(LE u32) + conf(BE u32)}
pub fn decode_seed(data: &[u8], key: &TeaKey) -> (u32, u32) {
    let plain = decrypt(&parser::block_at(data, 0), key);
    (parser::le_u32(&plain, 0), parser::be_u32(&plain, 4))
}

pub fn encode_seed(seed: u32, conf: u32, key: &TeaKey) -> [u8; 8] {
    let mut plain = [0u8; 8];
    plain[..4].copy_from_slice(&seed.to_le_bytes());
    plain[4..].copy_from_slice(&conf.to_be_bytes());
    encrypt(&plain, key)
}
