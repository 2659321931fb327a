// toypad/src/persistence/record.rs

//! Fixed-size binary records.
//!
//! Token record (212 bytes):
//! slot(1, 0xFF = none) | id(4 LE) | pad(4 LE) | uid(7) | memory(180) | name(16, NUL padded)
//!
//! Box record (4 bytes): x | y | filled | slot (0xFF = none)

use crate::constants::{
    BOX_COUNT, BOX_RECORD_LEN, MAX_TOKENS, NAME_LEN, NO_SLOT, TOKEN_MEMORY_LEN, TOKEN_RECORD_LEN,
    TOYPAD_RECORD_LEN, UID_LEN,
};
use crate::token::{Token, TokenMemory};
use crate::toypad::{BoxInfo, Layout};
use crate::types::{BoxIndex, Pad, SlotIndex, Uid};

const ID_OFFSET: usize = 1;
const PAD_OFFSET: usize = ID_OFFSET + 4;
const UID_OFFSET: usize = PAD_OFFSET + 4;
const MEMORY_OFFSET: usize = UID_OFFSET + UID_LEN;
const NAME_OFFSET: usize = MEMORY_OFFSET + TOKEN_MEMORY_LEN;

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

/// Truncate `name` to at most `NAME_LEN` bytes without splitting a
/// character.
pub fn truncate_name(name: &str) -> &str {
    if name.len() <= NAME_LEN {
        return name;
    }
    let mut end = NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

pub fn encode_token(token: &Token) -> [u8; TOKEN_RECORD_LEN] {
    let mut out = [0u8; TOKEN_RECORD_LEN];
    out[0] = token.slot().map(SlotIndex::as_u8).unwrap_or(NO_SLOT);
    out[ID_OFFSET..PAD_OFFSET].copy_from_slice(&token.id().to_le_bytes());
    out[PAD_OFFSET..UID_OFFSET].copy_from_slice(&(token.pad().as_u8() as u32).to_le_bytes());
    out[UID_OFFSET..MEMORY_OFFSET].copy_from_slice(token.uid().as_bytes());
    out[MEMORY_OFFSET..NAME_OFFSET].copy_from_slice(token.memory().as_bytes());
    let name = truncate_name(token.name()).as_bytes();
    out[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
    out
}

/// Decode one token record. An empty name or an all-zero UID marks an
/// unoccupied record and yields `None`.
pub fn decode_token(bytes: &[u8; TOKEN_RECORD_LEN]) -> Option<Token> {
    let name_field = &bytes[NAME_OFFSET..];
    let name_len = name_field.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
    let name = String::from_utf8_lossy(&name_field[..name_len]);

    let mut uid = [0u8; UID_LEN];
    uid.copy_from_slice(&bytes[UID_OFFSET..MEMORY_OFFSET]);
    let uid = Uid::from_bytes(uid);
    if name.is_empty() || uid.is_zero() {
        return None;
    }

    let mut memory = [0u8; TOKEN_MEMORY_LEN];
    memory.copy_from_slice(&bytes[MEMORY_OFFSET..NAME_OFFSET]);

    let mut token = Token::restore(
        u32_at(bytes, ID_OFFSET),
        uid,
        TokenMemory::from_bytes(memory),
        &name,
    );
    let slot = SlotIndex::new(bytes[0] as usize);
    let pad = u8::try_from(u32_at(bytes, PAD_OFFSET))
        .ok()
        .and_then(Pad::from_u8)
        .unwrap_or_default();
    token.set_placement(slot, pad);
    Some(token)
}

pub fn encode_box(info: &BoxInfo) -> [u8; BOX_RECORD_LEN] {
    let (x, y) = info.position();
    [
        x,
        y,
        info.is_filled() as u8,
        info.slot().map(SlotIndex::as_u8).unwrap_or(NO_SLOT),
    ]
}

/// Decode a box record. The stored position is ignored; boxes sit at
/// fixed positions. A filled box with no valid slot decodes as empty.
pub fn decode_box(index: BoxIndex, bytes: &[u8; BOX_RECORD_LEN]) -> BoxInfo {
    let mut info = BoxInfo::new(index);
    if bytes[2] != 0 {
        if let Some(slot) = SlotIndex::new(bytes[3] as usize) {
            info.fill(slot);
        }
    }
    info
}

/// Seven token records followed by seven box records.
pub fn encode_layout(layout: &Layout) -> Vec<u8> {
    let mut out = Vec::with_capacity(TOYPAD_RECORD_LEN);
    for token in &layout.tokens {
        match token {
            Some(t) => out.extend_from_slice(&encode_token(t)),
            None => out.extend_from_slice(&[0u8; TOKEN_RECORD_LEN]),
        }
    }
    for info in &layout.boxes {
        out.extend_from_slice(&encode_box(info));
    }
    out
}

/// Inverse of [`encode_layout`]. Returns `None` if `bytes` is not exactly
/// one toypad record. Boxes that point at an unoccupied slot are cleared.
pub fn decode_layout(bytes: &[u8]) -> Option<Layout> {
    if bytes.len() != TOYPAD_RECORD_LEN {
        return None;
    }
    let (token_part, box_part) = bytes.split_at(MAX_TOKENS * TOKEN_RECORD_LEN);

    let mut layout = Layout::empty();
    for (slot, chunk) in token_part.chunks_exact(TOKEN_RECORD_LEN).enumerate() {
        let record: &[u8; TOKEN_RECORD_LEN] = chunk.try_into().ok()?;
        layout.tokens[slot] = decode_token(record).map(|mut t| {
            // the array position is authoritative
            t.set_placement(SlotIndex::new(slot), t.pad());
            t
        });
    }
    for (i, chunk) in box_part.chunks_exact(BOX_RECORD_LEN).take(BOX_COUNT).enumerate() {
        let record: &[u8; BOX_RECORD_LEN] = chunk.try_into().ok()?;
        let index = BoxIndex::new(i)?;
        let mut info = decode_box(index, record);
        if let Some(slot) = info.slot() {
            if layout.tokens[slot.get()].is_none() {
                info.clear();
            }
        }
        layout.boxes[i] = info;
    }
    Some(layout)
}
