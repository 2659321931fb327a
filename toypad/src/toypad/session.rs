// toypad/src/toypad/session.rs

use derive_more::Display;

use crate::transport::TransportSignal;

/// Host session lifecycle.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    #[default]
    #[display(fmt = "disconnected")]
    Disconnected,
    #[display(fmt = "reconnecting")]
    Reconnecting,
    #[display(fmt = "connected")]
    Connected,
    /// Suspended; state is cleared once the application runs cleanup.
    #[display(fmt = "cleanup pending")]
    CleanupPending,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Notifications only go out while a host is attached.
    pub fn can_notify(&self) -> bool {
        matches!(
            self.state,
            SessionState::Reconnecting | SessionState::Connected
        )
    }

    /// Apply a transport signal. Returns the old and new state when it
    /// changed.
    pub fn on_signal(&mut self, signal: TransportSignal) -> Option<(SessionState, SessionState)> {
        use SessionState::*;
        let next = match (self.state, signal) {
            (CleanupPending, _) => CleanupPending,
            (Disconnected, TransportSignal::Suspended) => Disconnected,
            (_, TransportSignal::Suspended) => CleanupPending,
            (_, TransportSignal::Wake) => Reconnecting,
            (_, TransportSignal::Connected) => Connected,
        };
        self.transition(next)
    }

    /// Host sent the WAKE command.
    pub fn on_wake_command(&mut self) -> Option<(SessionState, SessionState)> {
        if self.state == SessionState::CleanupPending {
            return None;
        }
        self.transition(SessionState::Reconnecting)
    }

    pub fn finish_cleanup(&mut self) -> Option<(SessionState, SessionState)> {
        if self.state != SessionState::CleanupPending {
            return None;
        }
        self.transition(SessionState::Disconnected)
    }

    fn transition(&mut self, next: SessionState) -> Option<(SessionState, SessionState)> {
        let prev = self.state;
        if prev == next {
            return None;
        }
        log::info!("session {} -> {}", prev, next);
        self.state = next;
        Some((prev, next))
    }
}
