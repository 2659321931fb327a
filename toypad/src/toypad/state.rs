// toypad/src/toypad/state.rs

use crate::constants::{BOX_COUNT, MAX_TOKENS};
use crate::crypto::TeaKey;
use crate::token::{Token, TokenIdentity};
use crate::toypad::boxes::{BoxInfo, default_boxes};
use crate::types::{BoxIndex, SlotIndex};

/// Everything the host can observe about the pad: resident tokens, the
/// box table and the session cipher key. Lives for one protocol session.
#[derive(Debug, Clone)]
pub struct ToyPadState {
    pub(crate) tokens: [Option<Token>; MAX_TOKENS],
    pub(crate) boxes: [BoxInfo; BOX_COUNT],
    cipher_key: TeaKey,
}

impl ToyPadState {
    pub fn new(cipher_key: TeaKey) -> Self {
        Self {
            tokens: Default::default(),
            boxes: default_boxes(),
            cipher_key,
        }
    }

    pub fn cipher_key(&self) -> &TeaKey {
        &self.cipher_key
    }

    pub fn set_cipher_key(&mut self, key: TeaKey) {
        self.cipher_key = key;
    }

    pub fn token(&self, slot: SlotIndex) -> Option<&Token> {
        self.tokens[slot.get()].as_ref()
    }

    /// Look a token up by the raw index byte of a host command.
    pub fn token_at(&self, index: u8) -> Option<&Token> {
        SlotIndex::new(index as usize).and_then(|slot| self.token(slot))
    }

    pub(crate) fn token_at_mut(&mut self, index: u8) -> Option<&mut Token> {
        let slot = SlotIndex::new(index as usize)?;
        self.tokens[slot.get()].as_mut()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().flatten()
    }

    pub fn boxes(&self) -> &[BoxInfo; BOX_COUNT] {
        &self.boxes
    }

    pub fn box_info(&self, index: BoxIndex) -> &BoxInfo {
        &self.boxes[index.get()]
    }

    pub fn resident_count(&self) -> usize {
        self.tokens().count()
    }

    /// Number of resident minifigures with this id.
    pub fn resident_with_id(&self, id: u32) -> usize {
        self.tokens()
            .filter(|t| t.identity() == TokenIdentity::Minifigure { id })
            .count()
    }

    /// Drop every token and box assignment and restore `key`.
    pub fn reset(&mut self, key: TeaKey) {
        self.tokens = Default::default();
        self.boxes = default_boxes();
        self.cipher_key = key;
    }
}

impl Default for ToyPadState {
    fn default() -> Self {
        Self::new(TeaKey::default())
    }
}

/// Snapshot of the pad used for saving and batch placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub tokens: [Option<Token>; MAX_TOKENS],
    pub boxes: [BoxInfo; BOX_COUNT],
}

impl Layout {
    pub fn empty() -> Self {
        Self {
            tokens: Default::default(),
            boxes: default_boxes(),
        }
    }

    pub fn from_state(state: &ToyPadState) -> Self {
        Self {
            tokens: state.tokens.clone(),
            boxes: state.boxes,
        }
    }

    /// (box, token) pairs to place: every filled box whose slot refers to
    /// a stored token, ordered by slot. Each token carries its saved slot.
    /// A slot shown in several boxes is placed once, in the lowest box.
    pub fn placements(&self) -> Vec<(BoxIndex, Token)> {
        let mut pairs: Vec<(BoxIndex, Token)> = BoxIndex::all()
            .filter_map(|b| {
                let info = &self.boxes[b.get()];
                let slot = info.slot().filter(|_| info.is_filled())?;
                let mut token = self.tokens[slot.get()].clone()?;
                token.set_placement(Some(slot), token.pad());
                Some((b, token))
            })
            .collect();
        pairs.sort_by_key(|(b, t)| (t.slot(), *b));
        pairs.dedup_by_key(|(_, t)| t.slot());
        pairs
    }

    pub fn occupied(&self) -> usize {
        self.tokens.iter().flatten().count()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}
