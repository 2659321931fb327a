// toypad/src/protocol/commands/model.rs

use crate::crypto::{TeaKey, decrypt, encrypt};
use crate::protocol::parser;

/// Decode MODEL data: enc{index(1) + 3 unused + conf(BE u32)}
pub fn decode_model(data: &[u8], key: &TeaKey) -> (u8, u32) {
    let plain = decrypt(&parser::block_at(data, 0), key);
    (plain[0], parser::be_u32(&plain, 4))
}

pub fn encode_model(index: u8, conf: u32, key: &TeaKey) -> [u8; 8] {
    let mut plain = [0u8; 8];
    plain[0] = index;
    plain[4..].copy_from_slice(&conf.to_be_bytes());
    encrypt(&plain, key)
}
