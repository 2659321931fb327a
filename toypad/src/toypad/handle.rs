// toypad/src/toypad/handle.rs

use crate::constants::BOX_COUNT;
use crate::persistence;
use crate::protocol::{Response, TokenNotification, decode_request};
use crate::storage::Storage;
use crate::token::{Token, TokenInfo};
use crate::toypad::boxes::BoxInfo;
use crate::toypad::config::ToyPadConfig;
use crate::toypad::dispatcher::Dispatcher;
use crate::toypad::events::{EventQueue, EventSink, ToyPadEvent};
use crate::toypad::session::{Session, SessionState};
use crate::toypad::slots::{self, Placement, Removal, SlotManager};
use crate::toypad::state::{Layout, ToyPadState};
use crate::transport::{Transport, TransportSignal};
use crate::types::{BoxIndex, SlotIndex};
use crate::utils::{bytes_to_hex_spaced, pause};
use crate::{Error, Result};

/// The emulated pad: owns the transport, the resident tokens and the
/// protocol session.
///
/// Inbound packets are fed to [`on_receive`](Self::on_receive); it
/// never blocks. Batch operations ([`remove_all`](Self::remove_all),
/// [`place_batch`](Self::place_batch)) sleep between notifications and
/// should run off the receive path. Use
/// [`SharedToyPad`](crate::toypad::SharedToyPad) to share one pad between
/// the two.
pub struct ToyPad {
    transport: Box<dyn Transport>,
    state: ToyPadState,
    dispatcher: Dispatcher,
    session: Session,
    events: EventQueue,
    config: ToyPadConfig,
    device_identity: String,
}

impl ToyPad {
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        config: ToyPadConfig,
        device_identity: String,
    ) -> Self {
        Self {
            transport,
            state: ToyPadState::new(config.cipher_key),
            dispatcher: Dispatcher::new(),
            session: Session::new(),
            events: EventQueue::new(config.event_capacity),
            config,
            device_identity,
        }
    }

    /// Handle one inbound packet and send at most one response. Malformed
    /// packets and unknown commands are dropped. Returns the response
    /// that was sent.
    pub fn on_receive(&mut self, packet: &[u8]) -> Option<Response> {
        log::debug!("rx {}", bytes_to_hex_spaced(packet));
        let request = match decode_request(packet) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("dropping packet: {}", e);
                return None;
            }
        };

        let outcome = match self
            .dispatcher
            .handle(&mut self.state, &mut self.session, &request)
        {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("dropping command {:#04x}: {}", request.opcode, e);
                return None;
            }
        };
        if let Some((from, to)) = outcome.session_change {
            self.events.push(ToyPadEvent::SessionChanged { from, to });
        }

        let response = outcome
            .reply?
            .into_response(request.correlation_id, self.state.cipher_key());
        self.send_response(&response).then_some(response)
    }

    fn send_response(&mut self, response: &Response) -> bool {
        let bytes = match response.encode() {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("response {:#04x} dropped: {}", response.correlation_id, e);
                return false;
            }
        };
        log::debug!("tx {}", bytes_to_hex_spaced(&bytes));
        match self.transport.send(&bytes) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("send failed: {}", e);
                false
            }
        }
    }

    fn notify(&mut self, notification: &TokenNotification) {
        if !self.session.can_notify() || !self.transport.is_connected() {
            log::debug!(
                "no host attached ({}), notification not sent",
                self.session.state()
            );
            return;
        }
        let sent = notification
            .encode()
            .and_then(|bytes| self.transport.send(&bytes));
        if let Err(e) = sent {
            log::warn!("notification for slot {} lost: {}", notification.slot, e);
        }
    }

    /// Apply a lifecycle signal from the transport driver.
    pub fn on_transport_signal(&mut self, signal: TransportSignal) {
        log::info!("transport signal {:?}", signal);
        if let Some((from, to)) = self.session.on_signal(signal) {
            self.events.push(ToyPadEvent::SessionChanged { from, to });
            if to == SessionState::CleanupPending {
                self.events.push(ToyPadEvent::CleanupRequested);
            }
        }
    }

    /// Clear tokens, boxes, key and generator after a suspend. Sends no
    /// notifications. Returns false if no cleanup was pending.
    pub fn run_pending_cleanup(&mut self) -> bool {
        let Some((from, to)) = self.session.finish_cleanup() else {
            return false;
        };
        log::info!("cleaning up {} resident tokens", self.state.resident_count());
        self.state.reset(self.config.cipher_key);
        self.dispatcher.reset();
        self.events.push(ToyPadEvent::SessionChanged { from, to });
        true
    }

    fn slots(&mut self) -> SlotManager<'_> {
        SlotManager::new(&mut self.state, self.config.quick_swap)
    }

    /// Build a minifigure whose UID accounts for resident figures with
    /// the same id. The token is not placed.
    pub fn create_minifigure(&self, id: u32) -> Token {
        Token::minifigure(id, self.count_by_identity(id), &self.device_identity)
    }

    pub fn create_vehicle(&self, id: u32, upgrade0: u32, upgrade1: u32) -> Token {
        Token::vehicle(id, upgrade0, upgrade1)
    }

    /// Put `token` on the pad in `box_index` and notify the host. A token
    /// already shown in that box is taken off first.
    pub fn place(&mut self, token: Token, box_index: BoxIndex) -> Result<SlotIndex> {
        self.place_preferring(token, box_index, None)
    }

    /// Place into `preferred` when that slot is free, else the lowest free
    /// slot. Layout restores go through here to keep saved slot numbers.
    pub fn place_preferring(
        &mut self,
        token: Token,
        box_index: BoxIndex,
        preferred: Option<SlotIndex>,
    ) -> Result<SlotIndex> {
        let Placement {
            slot,
            pad,
            evicted,
            displaced,
            notification,
        } = self.slots().place_preferring(token, box_index, preferred)?;

        for removal in evicted.iter().chain(displaced.iter()) {
            self.announce_removal(removal);
        }
        self.notify(&notification);
        if let Some(token) = self.state.token(slot) {
            let event = ToyPadEvent::TokenPlaced {
                slot,
                pad,
                uid: *token.uid(),
                identity: token.identity(),
                name: token.name().to_string(),
            };
            self.events.push(event);
        }
        Ok(slot)
    }

    pub fn place_minifigure(&mut self, id: u32, box_index: BoxIndex) -> Result<SlotIndex> {
        let token = self.create_minifigure(id);
        self.place(token, box_index)
    }

    pub fn place_vehicle(
        &mut self,
        id: u32,
        upgrade0: u32,
        upgrade1: u32,
        box_index: BoxIndex,
    ) -> Result<SlotIndex> {
        let token = self.create_vehicle(id, upgrade0, upgrade1);
        self.place(token, box_index)
    }

    fn announce_removal(&mut self, removal: &Removal) {
        self.notify(&removal.notification);
        self.events.push(ToyPadEvent::TokenRemoved {
            slot: removal.notification.slot,
            pad: removal.notification.pad,
            uid: removal.notification.uid,
        });
    }

    /// Take the token in `slot` off the pad and notify the host.
    pub fn remove(&mut self, slot: SlotIndex) -> Result<Token> {
        let removal = self.slots().remove(slot)?;
        self.announce_removal(&removal);
        Ok(removal.token)
    }

    pub fn remove_box(&mut self, box_index: BoxIndex) -> Result<Token> {
        let removal = self.slots().remove_box(box_index)?;
        self.announce_removal(&removal);
        Ok(removal.token)
    }

    pub fn clear_boxes(&mut self) {
        self.slots().clear_boxes();
    }

    /// Remove every resident token, pausing between notifications, then
    /// clear the box table. Returns how many tokens were removed.
    pub fn remove_all(&mut self) -> usize {
        let occupied = self.occupied_slots();
        for (i, slot) in occupied.iter().enumerate() {
            if i > 0 {
                pause(self.config.pacing);
            }
            if let Err(e) = self.remove(*slot) {
                log::warn!("remove_all: slot {}: {}", slot, e);
            }
        }
        self.clear_boxes();
        occupied.len()
    }

    /// Replace the pad contents with `layout`: remove everything, then
    /// place each filled box's token, pausing between placements.
    pub fn place_batch(&mut self, layout: &Layout) -> Result<usize> {
        let removed = self.remove_all();
        let placements = layout.placements();
        for (i, (box_index, token)) in placements.iter().enumerate() {
            if i > 0 || removed > 0 {
                pause(self.config.pacing);
            }
            self.place_preferring(token.clone(), *box_index, token.slot())?;
        }
        Ok(placements.len())
    }

    pub fn snapshot(&self) -> Layout {
        Layout::from_state(&self.state)
    }

    /// Save the current pad under `name`.
    pub fn save_layout(&self, storage: &mut dyn Storage, name: &str) -> Result<String> {
        persistence::save_toypad(storage, name, &self.snapshot())
    }

    /// Load a saved pad and place its tokens.
    pub fn load_layout(&mut self, storage: &dyn Storage, name: &str) -> Result<usize> {
        let layout = persistence::load_saved_toypad(storage, name)?;
        self.place_batch(&layout)
    }

    pub fn save_token(&self, storage: &mut dyn Storage, slot: SlotIndex) -> Result<String> {
        let token = self.state.token(slot).ok_or(Error::EmptySlot(slot.get()))?;
        persistence::save_token(storage, token)
    }

    pub fn load_token(
        &mut self,
        storage: &dyn Storage,
        path: &str,
        box_index: BoxIndex,
    ) -> Result<SlotIndex> {
        let token = persistence::load_saved_token(storage, path)?;
        self.place(token, box_index)
    }

    /// Occupied slots in ascending order.
    pub fn occupied_slots(&self) -> Vec<SlotIndex> {
        SlotIndex::all()
            .filter(|s| self.state.token(*s).is_some())
            .collect()
    }

    pub fn count_by_identity(&self, id: u32) -> usize {
        slots::count_by_identity(&self.state, id, self.config.quick_swap)
    }

    pub fn token(&self, slot: SlotIndex) -> Option<&Token> {
        self.state.token(slot)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.state.tokens()
    }

    pub fn token_infos(&self) -> Vec<TokenInfo> {
        self.state.tokens().map(TokenInfo::from).collect()
    }

    pub fn resident_count(&self) -> usize {
        self.state.resident_count()
    }

    pub fn boxes(&self) -> &[BoxInfo; BOX_COUNT] {
        self.state.boxes()
    }

    pub fn state(&self) -> &ToyPadState {
        &self.state
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn config(&self) -> &ToyPadConfig {
        &self.config
    }

    pub fn device_identity(&self) -> &str {
        &self.device_identity
    }

    pub fn drain_events(&mut self) -> Vec<ToyPadEvent> {
        self.events.drain()
    }

    pub fn flush_events(&mut self, sink: &mut dyn EventSink) -> usize {
        self.events.flush(sink)
    }
}

impl std::fmt::Debug for ToyPad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToyPad")
            .field("session", &self.session.state())
            .field("resident", &self.state.resident_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
