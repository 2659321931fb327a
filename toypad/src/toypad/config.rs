// toypad/src/toypad/config.rs

use std::time::Duration;

use crate::constants::DEFAULT_EVENT_CAPACITY;
use crate::crypto::TeaKey;
use crate::utils::default_pacing;

/// Runtime options for a [`ToyPad`](crate::toypad::ToyPad).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToyPadConfig {
    /// Key used for encrypted command data. Restored on cleanup.
    pub cipher_key: TeaKey,
    /// Delay between notifications in batch operations.
    pub pacing: Duration,
    /// Re-created minifigures keep the same UID even when a figure with
    /// the same id is already resident.
    pub quick_swap: bool,
    pub event_capacity: usize,
}

impl Default for ToyPadConfig {
    fn default() -> Self {
        Self {
            cipher_key: TeaKey::default(),
            pacing: default_pacing(),
            quick_swap: false,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Stable per-device string mixed into minifigure UIDs, e.g. a device
/// name or serial number.
pub trait DeviceIdentity {
    fn identity(&self) -> String;
}

impl DeviceIdentity for str {
    fn identity(&self) -> String {
        self.to_string()
    }
}

impl DeviceIdentity for String {
    fn identity(&self) -> String {
        self.clone()
    }
}

pub const DEFAULT_DEVICE_IDENTITY: &str = "toypad";
