// toypad/src/protocol/commands/challenge.rs

use crate::crypto::{TeaKey, decrypt, encrypt};
use crate::protocol::parser;

/// Decode CHAL data: enc{conf(BE u32) + 4 unused bytes}
pub fn decode_challenge(data: &[u8], key: &TeaKey) -> u32 {
    let plain = decrypt(&parser::block_at(data, 0), key);
    parser::be_u32(&plain, 0)
}

pub fn encode_challenge(conf: u32, key: &TeaKey) -> [u8; 8] {
    let mut plain = [0u8; 8];
    plain[..4].copy_from_slice(&conf.to_be_bytes());
    encrypt(&plain, key)
}
