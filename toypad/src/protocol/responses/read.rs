// toypad/src/protocol/responses/read.rs

use crate::constants::READ_LEN;
use crate::protocol::parser;
use crate::Result;

/// Encode READ reply data: status(1) + 16 bytes
pub fn encode_read_reply(status: u8, data: &[u8; READ_LEN]) -> [u8; 1 + READ_LEN] {
    let mut out = [0u8; 1 + READ_LEN];
    out[0] = status;
    out[1..].copy_from_slice(data);
    out
}

pub fn decode_read_reply(data: &[u8]) -> Result<(u8, [u8; READ_LEN])> {
    let body = parser::slice_at(data, 1, READ_LEN)?;
    let mut out = [0u8; READ_LEN];
    out.copy_from_slice(body);
    Ok((data[0], out))
}
