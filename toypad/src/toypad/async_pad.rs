// toypad/src/toypad/async_pad.rs

//! Tokio flavour of [`SharedToyPad`](crate::toypad::SharedToyPad).

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::protocol::Response;
use crate::toypad::events::ToyPadEvent;
use crate::toypad::handle::ToyPad;
use crate::toypad::state::Layout;
use crate::transport::TransportSignal;
use crate::Result;

#[derive(Clone)]
pub struct AsyncToyPad {
    inner: Arc<Mutex<ToyPad>>,
}

impl AsyncToyPad {
    pub fn new(pad: ToyPad) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pad)),
        }
    }

    pub async fn with<R>(&self, f: impl FnOnce(&mut ToyPad) -> R) -> R {
        let mut pad = self.inner.lock().await;
        f(&mut pad)
    }

    pub async fn on_receive(&self, packet: &[u8]) -> Option<Response> {
        self.inner.lock().await.on_receive(packet)
    }

    pub async fn on_transport_signal(&self, signal: TransportSignal) {
        self.inner.lock().await.on_transport_signal(signal)
    }

    pub async fn run_pending_cleanup(&self) -> bool {
        self.inner.lock().await.run_pending_cleanup()
    }

    /// Remove every token, awaiting the pacing delay between packets with
    /// the lock released.
    pub async fn remove_all(&self) -> usize {
        let (slots, pacing) = {
            let pad = self.inner.lock().await;
            (pad.occupied_slots(), pad.config().pacing)
        };
        let mut removed = 0;
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 && !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }
            if self.inner.lock().await.remove(*slot).is_ok() {
                removed += 1;
            }
        }
        self.inner.lock().await.clear_boxes();
        removed
    }

    pub async fn place_batch(&self, layout: &Layout) -> Result<usize> {
        let removed = self.remove_all().await;
        let pacing = self.inner.lock().await.config().pacing;
        let placements = layout.placements();
        for (i, (box_index, token)) in placements.iter().enumerate() {
            if (i > 0 || removed > 0) && !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }
            self.inner
                .lock()
                .await
                .place_preferring(token.clone(), *box_index, token.slot())?;
        }
        Ok(placements.len())
    }

    pub async fn drain_events(&self) -> Vec<ToyPadEvent> {
        self.inner.lock().await.drain_events()
    }
}
