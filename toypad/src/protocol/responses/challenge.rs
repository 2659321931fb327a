// toypad/src/protocol/responses/challenge.rs

use crate::crypto::{TeaKey, decrypt, encrypt};
use crate::protocol::parser;
use crate::Result;

/// Encode SEED reply data: enc{conf(BE u32) + 4 zero bytes}
pub fn encode_seed_reply(conf: u32, key: &TeaKey) -> [u8; 8] {
    let mut plain = [0u8; 8];
    plain[..4].copy_from_slice(&conf.to_be_bytes());
    encrypt(&plain, key)
}

pub fn decode_seed_reply(data: &[u8], key: &TeaKey) -> Result<u32> {
    parser::ensure_len(data, 8)?;
    let plain = decrypt(&parser::block_at(data, 0), key);
    Ok(parser::be_u32(&plain, 0))
}

/// Encode CHAL reply data: enc{value(LE u32) + conf(BE u32)}
pub fn encode_challenge_reply(value: u32, conf: u32, key: &TeaKey) -> [u8; 8] {
    let mut plain = [0u8; 8];
    plain[..4].copy_from_slice(&value.to_le_bytes());
    plain[4..].copy_from_slice(&conf.to_be_bytes());
    encrypt(&plain, key)
}

pub fn decode_challenge_reply(data: &[u8], key: &TeaKey) -> Result<(u32, u32)> {
    parser::ensure_len(data, 8)?;
    let plain = decrypt(&parser::block_at(data, 0), key);
    Ok((parser::le_u32(&plain, 0), parser::be_u32(&plain, 4)))
}
