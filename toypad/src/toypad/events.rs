// toypad/src/toypad/events.rs

//! Events the core raises toward the application.

use std::collections::VecDeque;

use crate::token::TokenIdentity;
use crate::toypad::session::SessionState;
use crate::types::{Pad, SlotIndex, Uid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToyPadEvent {
    TokenPlaced {
        slot: SlotIndex,
        pad: Pad,
        uid: Uid,
        identity: TokenIdentity,
        name: String,
    },
    TokenRemoved {
        slot: SlotIndex,
        pad: Pad,
        uid: Uid,
    },
    SessionChanged {
        from: SessionState,
        to: SessionState,
    },
    /// The host went away. Call `run_pending_cleanup` from a context
    /// that may do slow work.
    CleanupRequested,
}

/// Receiver for events flushed out of the queue.
pub trait EventSink {
    fn publish(&mut self, event: ToyPadEvent);
}

impl<F: FnMut(ToyPadEvent)> EventSink for F {
    fn publish(&mut self, event: ToyPadEvent) {
        self(event)
    }
}

/// Bounded FIFO. When full the oldest event is dropped.
#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<ToyPadEvent>,
    capacity: usize,
}

impl EventQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, event: ToyPadEvent) {
        if self.events.len() == self.capacity {
            if let Some(dropped) = self.events.pop_front() {
                log::warn!("event queue full, dropping {:?}", dropped);
            }
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<ToyPadEvent> {
        self.events.drain(..).collect()
    }

    pub fn flush(&mut self, sink: &mut dyn EventSink) -> usize {
        let n = self.events.len();
        while let Some(event) = self.events.pop_front() {
            sink.publish(event);
        }
        n
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
