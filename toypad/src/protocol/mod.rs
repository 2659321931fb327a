// toypad/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{checksum, write_checksum};
pub use codec::{Request, Response, decode_request};
pub use commands::{Command, Opcode};
pub use frame::{Frame, FrameKind};
pub use responses::{Reply, TokenNotification};
