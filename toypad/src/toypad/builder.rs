// toypad/src/toypad/builder.rs

use std::time::Duration;

use crate::crypto::TeaKey;
use crate::toypad::config::{DEFAULT_DEVICE_IDENTITY, DeviceIdentity, ToyPadConfig};
use crate::toypad::handle::ToyPad;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a ToyPad with optional configuration.
pub struct ToyPadBuilder {
    transport: Option<Box<dyn Transport>>,
    identity: Option<String>,
    config: ToyPadConfig,
}

impl ToyPadBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            identity: None,
            config: ToyPadConfig::default(),
        }
    }

    /// Provide the transport (a USB endpoint driver, or MockTransport in
    /// tests).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_identity(mut self, identity: &(impl DeviceIdentity + ?Sized)) -> Self {
        self.identity = Some(identity.identity());
        self
    }

    pub fn with_config(mut self, config: ToyPadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cipher_key(mut self, key: TeaKey) -> Self {
        self.config.cipher_key = key;
        self
    }

    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.config.pacing = pacing;
        self
    }

    pub fn quick_swap(mut self, enabled: bool) -> Self {
        self.config.quick_swap = enabled;
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.event_capacity = capacity;
        self
    }

    /// Requires a transport; otherwise returns `TransportMissing`.
    pub fn build(self) -> Result<ToyPad> {
        let transport = self.transport.ok_or(Error::TransportMissing)?;
        let identity = self
            .identity
            .unwrap_or_else(|| DEFAULT_DEVICE_IDENTITY.to_string());
        log::debug!("building toypad for device {:?}", identity);
        Ok(ToyPad::new(transport, self.config, identity))
    }
}

impl Default for ToyPadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
