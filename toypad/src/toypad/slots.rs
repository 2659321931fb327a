// toypad/src/toypad/slots.rs

use crate::constants::MAX_TOKENS;
use crate::protocol::TokenNotification;
use crate::token::Token;
use crate::toypad::boxes::pad_for_box;
use crate::toypad::state::ToyPadState;
use crate::types::{BoxIndex, Pad, SlotIndex, Uid};
use crate::{Error, Result};

/// Result of a successful placement.
#[derive(Debug, Clone)]
pub struct Placement {
    pub slot: SlotIndex,
    pub pad: Pad,
    /// Token that had the same UID and was removed first, with its
    /// removal notification.
    pub evicted: Option<Removal>,
    /// Token the target box showed before, taken off the pad.
    pub displaced: Option<Removal>,
    pub notification: TokenNotification,
}

/// A token taken off the pad.
#[derive(Debug, Clone)]
pub struct Removal {
    pub token: Token,
    pub notification: TokenNotification,
}

/// Mutable view over the resident tokens and box table. Enforces UID
/// uniqueness and keeps the box table consistent with the slots.
pub struct SlotManager<'a> {
    state: &'a mut ToyPadState,
    quick_swap: bool,
}

impl<'a> SlotManager<'a> {
    pub fn new(state: &'a mut ToyPadState, quick_swap: bool) -> Self {
        Self { state, quick_swap }
    }

    /// Place `token` in the lowest free slot and show it in `box_index`.
    /// A resident token with the same UID is removed first, as is the
    /// token the box already shows.
    pub fn place(&mut self, token: Token, box_index: BoxIndex) -> Result<Placement> {
        self.place_preferring(token, box_index, None)
    }

    /// Like [`place`](Self::place), but takes `preferred` when that slot
    /// is free. Used to restore saved layouts slot for slot.
    pub fn place_preferring(
        &mut self,
        mut token: Token,
        box_index: BoxIndex,
        preferred: Option<SlotIndex>,
    ) -> Result<Placement> {
        let evicted = match self.find_by_uid(token.uid()) {
            Some(slot) => Some(self.remove(slot)?),
            None => None,
        };
        // a full pad rejects new tokens even over an occupied box
        if self.is_full() {
            return Err(Error::NoFreeSlot);
        }
        let displaced = match self.box_occupant(box_index) {
            Some(slot) => Some(self.remove(slot)?),
            None => None,
        };

        let slot = preferred
            .filter(|s| self.state.token(*s).is_none())
            .or_else(|| self.first_free())
            .ok_or(Error::NoFreeSlot)?;
        let pad = pad_for_box(box_index);
        token.set_placement(Some(slot), pad);
        let notification = TokenNotification::placed(pad, slot, *token.uid());

        log::info!(
            "placing {} in slot {} ({} pad, box {})",
            token.name(),
            slot,
            pad,
            box_index
        );
        self.state.tokens[slot.get()] = Some(token);
        self.state.boxes[box_index.get()].fill(slot);

        Ok(Placement {
            slot,
            pad,
            evicted,
            displaced,
            notification,
        })
    }

    /// Slot of the resident token shown in `box_index`, if any.
    pub fn box_occupant(&self, box_index: BoxIndex) -> Option<SlotIndex> {
        let info = self.state.boxes[box_index.get()];
        info.slot()
            .filter(|s| info.is_filled() && self.state.token(*s).is_some())
    }

    /// Take the token out of `slot` and clear every box that showed it.
    pub fn remove(&mut self, slot: SlotIndex) -> Result<Removal> {
        let mut token = self.state.tokens[slot.get()]
            .take()
            .ok_or(Error::EmptySlot(slot.get()))?;

        for info in self.state.boxes.iter_mut() {
            if info.slot() == Some(slot) {
                info.clear();
            }
        }

        let notification = TokenNotification::removed(token.pad(), slot, *token.uid());
        log::info!("removed {} from slot {}", token.name(), slot);
        token.set_placement(None, token.pad());
        Ok(Removal {
            token,
            notification,
        })
    }

    /// Remove whatever token the box shows.
    pub fn remove_box(&mut self, box_index: BoxIndex) -> Result<Removal> {
        match self.box_occupant(box_index) {
            Some(slot) => self.remove(slot),
            None => Err(Error::EmptyBox(box_index.get())),
        }
    }

    pub fn clear_boxes(&mut self) {
        for info in self.state.boxes.iter_mut() {
            info.clear();
        }
    }

    pub fn find_by_uid(&self, uid: &Uid) -> Option<SlotIndex> {
        SlotIndex::all().find(|s| {
            self.state
                .token(*s)
                .is_some_and(|t| t.uid() == uid)
        })
    }

    pub fn first_free(&self) -> Option<SlotIndex> {
        SlotIndex::all().find(|s| self.state.token(*s).is_none())
    }

    pub fn count_by_identity(&self, id: u32) -> usize {
        count_by_identity(self.state, id, self.quick_swap)
    }

    pub fn is_full(&self) -> bool {
        self.state.resident_count() == MAX_TOKENS
    }
}

/// Number of resident minifigures sharing `id`. Quick-swap mode always
/// reports zero so a re-created figure keeps the same UID.
pub fn count_by_identity(state: &ToyPadState, id: u32, quick_swap: bool) -> usize {
    if quick_swap {
        0
    } else {
        state.resident_with_id(id)
    }
}
