// toypad/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy up to 8 bytes into a cipher block, zero-filling the rest.
/// Encrypted payloads are never rejected for being short.
pub fn block_at(data: &[u8], idx: usize) -> [u8; 8] {
    let mut block = [0u8; 8];
    if let Some(src) = data.get(idx..) {
        let n = src.len().min(8);
        block[..n].copy_from_slice(&src[..n]);
    }
    block
}

pub fn le_u32(bytes: &[u8; 8], idx: usize) -> u32 {
    u32::from_le_bytes([bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]])
}

pub fn be_u32(bytes: &[u8; 8], idx: usize) -> u32 {
    u32::from_be_bytes([bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]])
}
