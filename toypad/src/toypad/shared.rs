// toypad/src/toypad/shared.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::protocol::Response;
use crate::storage::Storage;
use crate::token::Token;
use crate::toypad::events::ToyPadEvent;
use crate::toypad::handle::ToyPad;
use crate::toypad::state::Layout;
use crate::transport::TransportSignal;
use crate::types::{BoxIndex, SlotIndex};
use crate::utils::pause;
use crate::{persistence, Result};

/// A [`ToyPad`] shared between the transport's receive context and the
/// application. Batch operations sleep with the lock released so inbound
/// packets are never held up by pacing.
#[derive(Clone)]
pub struct SharedToyPad {
    inner: Arc<Mutex<ToyPad>>,
}

impl SharedToyPad {
    pub fn new(pad: ToyPad) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pad)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, ToyPad> {
        // the receive path must keep working after a panicked caller
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` with the pad locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut ToyPad) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn on_receive(&self, packet: &[u8]) -> Option<Response> {
        self.lock().on_receive(packet)
    }

    pub fn on_transport_signal(&self, signal: TransportSignal) {
        self.lock().on_transport_signal(signal)
    }

    pub fn run_pending_cleanup(&self) -> bool {
        self.lock().run_pending_cleanup()
    }

    pub fn place(&self, token: Token, box_index: BoxIndex) -> Result<SlotIndex> {
        self.lock().place(token, box_index)
    }

    pub fn remove(&self, slot: SlotIndex) -> Result<Token> {
        self.lock().remove(slot)
    }

    pub fn remove_all(&self) -> usize {
        let (slots, pacing) = {
            let pad = self.lock();
            (pad.occupied_slots(), pad.config().pacing)
        };
        let mut removed = 0;
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 {
                pause(pacing);
            }
            match self.lock().remove(*slot) {
                Ok(_) => removed += 1,
                // already gone, e.g. removed by the receive side meanwhile
                Err(e) => log::debug!("remove_all: slot {}: {}", slot, e),
            }
        }
        self.lock().clear_boxes();
        removed
    }

    pub fn place_batch(&self, layout: &Layout) -> Result<usize> {
        let removed = self.remove_all();
        let pacing = self.lock().config().pacing;
        let placements = layout.placements();
        for (i, (box_index, token)) in placements.iter().enumerate() {
            if i > 0 || removed > 0 {
                pause(pacing);
            }
            self.lock()
                .place_preferring(token.clone(), *box_index, token.slot())?;
        }
        Ok(placements.len())
    }

    pub fn load_layout(&self, storage: &dyn Storage, name: &str) -> Result<usize> {
        let layout = persistence::load_saved_toypad(storage, name)?;
        self.place_batch(&layout)
    }

    pub fn drain_events(&self) -> Vec<ToyPadEvent> {
        self.lock().drain_events()
    }
}

impl From<ToyPad> for SharedToyPad {
    fn from(pad: ToyPad) -> Self {
        Self::new(pad)
    }
}
