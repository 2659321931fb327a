//! Delays between consecutive notifications in batch operations.
//!
//! The host drops notifications that arrive back to back, so bulk
//! remove/place sequences sleep between packets. The sleep always happens
//! outside any lock on the pad state.

use std::time::Duration;

use crate::constants::DEFAULT_PACING_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_pacing() -> Duration {
    ms(DEFAULT_PACING_MS)
}

/// Block the calling thread for `delay`. Zero returns immediately.
pub fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
