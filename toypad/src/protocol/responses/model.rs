// toypad/src/protocol/responses/model.rs

use crate::crypto::{TeaKey, decrypt, encrypt};
use crate::protocol::parser;
use crate::Result;

/// Encode MODEL reply data: status(1) + enc{id(LE u32) + conf(BE u32)}
pub fn encode_model_reply(status: u8, id: u32, conf: u32, key: &TeaKey) -> [u8; 9] {
    let mut plain = [0u8; 8];
    plain[..4].copy_from_slice(&id.to_le_bytes());
    plain[4..].copy_from_slice(&conf.to_be_bytes());

    let mut out = [0u8; 9];
    out[0] = status;
    out[1..].copy_from_slice(&encrypt(&plain, key));
    out
}

pub fn decode_model_reply(data: &[u8], key: &TeaKey) -> Result<(u8, u32, u32)> {
    parser::ensure_len(data, 9)?;
    let plain = decrypt(&parser::block_at(data, 1), key);
    Ok((data[0], parser::le_u32(&plain, 0), parser::be_u32(&plain, 4)))
}
