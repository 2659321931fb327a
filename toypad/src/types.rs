// toypad/src/types.rs

use std::convert::TryFrom;

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::constants::{BOX_COUNT, MAX_TOKENS, UID_FIRST_BYTE, UID_LAST_BYTE, UID_LEN};

/// Uid - Newtype Pattern (7 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a UID from the five variable bytes, adding the fixed
    /// 0x04 prefix and 0x80 suffix.
    pub fn from_body(body: [u8; 5]) -> Self {
        let mut bytes = [0u8; UID_LEN];
        bytes[0] = UID_FIRST_BYTE;
        bytes[1..6].copy_from_slice(&body);
        bytes[6] = UID_LAST_BYTE;
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Index into the resident-token array (0..7)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_TOKENS).then_some(Self(index as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..MAX_TOKENS as u8).map(SlotIndex)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(Error::InvalidSlot(index))
    }
}

/// Index of one of the seven display boxes. Out-of-range boxes cannot be
/// constructed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxIndex(u8);

impl BoxIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < BOX_COUNT).then_some(Self(index as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = BoxIndex> {
        (0..BOX_COUNT as u8).map(BoxIndex)
    }
}

/// Logical sensor zone. Discriminants are the wire values.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pad {
    #[default]
    #[display(fmt = "center")]
    Center = 1,
    #[display(fmt = "left")]
    Left = 2,
    #[display(fmt = "right")]
    Right = 3,
}

impl Pad {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Center),
            2 => Some(Self::Left),
            3 => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Direction byte of a token notification
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Placed = 0,
    Removed = 1,
}
