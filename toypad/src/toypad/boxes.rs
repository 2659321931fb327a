// toypad/src/toypad/boxes.rs

//! The seven fixed display boxes and their box→pad mapping.

use crate::constants::BOX_COUNT;
use crate::types::{BoxIndex, Pad, SlotIndex};

/// Screen position of each box, left to right, top row first.
const BOX_POSITIONS: [(u8, u8); BOX_COUNT] = [
    (10, 4),
    (52, 4),
    (94, 4),
    (0, 34),
    (32, 34),
    (72, 34),
    (104, 34),
];

/// Seven boxes collapse onto three pads.
const BOX_PADS: [Pad; BOX_COUNT] = [
    Pad::Left,
    Pad::Center,
    Pad::Right,
    Pad::Left,
    Pad::Left,
    Pad::Right,
    Pad::Right,
];

pub fn pad_for_box(index: BoxIndex) -> Pad {
    BOX_PADS[index.get()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxInfo {
    position: (u8, u8),
    filled: bool,
    slot: Option<SlotIndex>,
}

impl BoxInfo {
    pub fn new(index: BoxIndex) -> Self {
        Self {
            position: BOX_POSITIONS[index.get()],
            filled: false,
            slot: None,
        }
    }

    pub fn position(&self) -> (u8, u8) {
        self.position
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn slot(&self) -> Option<SlotIndex> {
        self.slot
    }

    pub(crate) fn fill(&mut self, slot: SlotIndex) {
        self.filled = true;
        self.slot = Some(slot);
    }

    pub(crate) fn clear(&mut self) {
        self.filled = false;
        self.slot = None;
    }
}

/// The full box table in its initial (empty) state.
pub fn default_boxes() -> [BoxInfo; BOX_COUNT] {
    std::array::from_fn(|i| {
        // from_fn only yields 0..BOX_COUNT
        BoxInfo::new(BoxIndex::new(i).unwrap_or_else(|| unreachable!()))
    })
}
