// toypad/src/error.rs

use std::io;

use thiserror::Error;

/// 共通エラー型
///
/// Every variant renders a short diagnostic suitable for showing to the
/// user; none of them is fatal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport not configured")]
    TransportMissing,

    #[error("transport closed: {0}")]
    TransportClosed(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unknown command: {0:#04x}")]
    UnknownCommand(u8),

    #[error("response too large: {len} bytes (max {max})")]
    OversizeResponse { len: usize, max: usize },

    #[error("no free slot on the pad")]
    NoFreeSlot,

    #[error("invalid slot index: {0}")]
    InvalidSlot(usize),

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("box {0} is empty")]
    EmptyBox(usize),

    #[error("could not open {path}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not write {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("corrupt record in {path}: {reason}")]
    CorruptRecord { path: String, reason: String },

    #[error("favorites list is full ({0} entries)")]
    FavoritesFull(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
