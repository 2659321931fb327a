// toypad/src/protocol/commands/read.rs

use crate::protocol::parser;
use crate::Result;

/// Decode READ data: token index(1) + first page(1)
pub fn decode_read(data: &[u8]) -> Result<(u8, u8)> {
    parser::ensure_len(data, 2)?;
    Ok((data[0], data[1]))
}

pub fn encode_read(index: u8, page: u8) -> [u8; 2] {
    [index, page]
}
