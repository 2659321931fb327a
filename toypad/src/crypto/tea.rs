// toypad/src/crypto/tea.rs

//! TEA block cipher as used by the pad's challenge exchange.
//!
//! 32 cycles (64 Feistel rounds) over a 64-bit block made of two
//! little-endian words, keyed by four little-endian words. There is no
//! padding and no integrity check: decrypting garbage yields garbage.

use crate::constants::DEFAULT_TEA_KEY;

const DELTA: u32 = 0x9E37_79B9;
const CYCLES: u32 = 32;

/// 128-bit key as four words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeaKey([u32; 4]);

impl TeaKey {
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (i, w) in words.iter_mut().enumerate() {
            let o = i * 4;
            *w = u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        }
        Self(words)
    }

    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (i, w) in self.0.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&w.to_le_bytes());
        }
        out
    }

    pub fn words(&self) -> &[u32; 4] {
        &self.0
    }
}

impl Default for TeaKey {
    fn default() -> Self {
        Self::from_bytes(&DEFAULT_TEA_KEY)
    }
}

fn split(block: &[u8; 8]) -> (u32, u32) {
    (
        u32::from_le_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_le_bytes([block[4], block[5], block[6], block[7]]),
    )
}

fn join(v0: u32, v1: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&v0.to_le_bytes());
    out[4..].copy_from_slice(&v1.to_le_bytes());
    out
}

fn mix(v: u32, sum: u32, ka: u32, kb: u32) -> u32 {
    (v << 4).wrapping_add(ka) ^ v.wrapping_add(sum) ^ (v >> 5).wrapping_add(kb)
}

/// Encrypt one 8-byte block.
pub fn encrypt(block: &[u8; 8], key: &TeaKey) -> [u8; 8] {
    let [k0, k1, k2, k3] = key.0;
    let (mut v0, mut v1) = split(block);
    let mut sum = 0u32;
    for _ in 0..CYCLES {
        sum = sum.wrapping_add(DELTA);
        v0 = v0.wrapping_add(mix(v1, sum, k0, k1));
        v1 = v1.wrapping_add(mix(v0, sum, k2, k3));
    }
    join(v0, v1)
}

/// Decrypt one 8-byte block.
pub fn decrypt(block: &[u8; 8], key: &TeaKey) -> [u8; 8] {
    let [k0, k1, k2, k3] = key.0;
    let (mut v0, mut v1) = split(block);
    let mut sum = DELTA.wrapping_mul(CYCLES);
    for _ in 0..CYCLES {
        v1 = v1.wrapping_sub(mix(v0, sum, k2, k3));
        v0 = v0.wrapping_sub(mix(v1, sum, k0, k1));
        sum = sum.wrapping_sub(DELTA);
    }
    join(v0, v1)
}
