// toypad/src/transport/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    connected: bool,
    /// Testing hook: number of send calls that should fail
    send_failures: usize,
}

/// Mock transport for unit tests. It records sent packets. Clones share
/// the same record so a test can keep a handle after handing the
/// transport to a `ToyPad`.
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                connected: true,
                ..MockState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the record from the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&self, n: usize) {
        self.lock().send_failures = n;
    }

    pub fn set_connected(&self, connected: bool) {
        self.lock().connected = connected;
    }

    /// Snapshot of every packet sent so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    /// Remove and return everything sent so far.
    pub fn take_sent(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.lock().sent)
    }

    pub fn pop_sent(&self) -> Option<Vec<u8>> {
        self.lock().sent.pop()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if state.send_failures > 0 {
            state.send_failures -= 1;
            return Err(Error::TransportClosed("simulated send failure".into()));
        }
        state.sent.push(data.to_vec());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.lock().connected
    }
}
