// toypad/src/protocol/commands/write.rs

use crate::constants::PAGE_LEN;
use crate::protocol::parser;
use crate::Result;

/// Decode WRITE data: token index(1) + page(1) + page data(4)
pub fn decode_write(data: &[u8]) -> Result<(u8, u8, [u8; PAGE_LEN])> {
    let payload = parser::slice_at(data, 2, PAGE_LEN)?;
    let mut page_data = [0u8; PAGE_LEN];
    page_data.copy_from_slice(payload);
    Ok((data[0], data[1], page_data))
}

pub fn encode_write(index: u8, page: u8, page_data: [u8; PAGE_LEN]) -> [u8; 2 + PAGE_LEN] {
    let mut out = [0u8; 2 + PAGE_LEN];
    out[0] = index;
    out[1] = page;
    out[2..].copy_from_slice(&page_data);
    out
}
