// toypad/src/protocol/checksum.rs

use crate::{Error, Result};

/// Compute the frame checksum: sum of all bytes mod 256
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Write the checksum of `buf[..len]` into `buf[len]`.
pub fn write_checksum(buf: &mut [u8], len: usize) -> Result<()> {
    if len >= buf.len() {
        return Err(Error::InvalidLength {
            expected: len + 1,
            actual: buf.len(),
        });
    }
    buf[len] = checksum(&buf[..len]);
    Ok(())
}
