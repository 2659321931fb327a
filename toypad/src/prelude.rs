// toypad/src/prelude.rs

pub use crate::crypto::{Prng, TeaKey};
pub use crate::persistence::{Favorites, SavedToken};
pub use crate::protocol::{
    Command, Frame, FrameKind, Opcode, Reply, Request, Response, TokenNotification,
};
pub use crate::storage::{FsStorage, MemoryStorage, Storage};
pub use crate::token::{Token, TokenIdentity, TokenInfo, TokenMemory};
pub use crate::toypad::{
    BoxInfo, DeviceIdentity, Layout, SessionState, SharedToyPad, ToyPad, ToyPadBuilder,
    ToyPadConfig, ToyPadEvent,
};
pub use crate::transport::{MockTransport, Transport, TransportSignal};
pub use crate::{BoxIndex, Direction, Error, Pad, Result, SlotIndex, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
