// toypad/src/protocol/responses/mod.rs

pub mod challenge;
pub mod model;
pub mod notification;
pub mod read;

pub use challenge::{
    decode_challenge_reply, decode_seed_reply, encode_challenge_reply, encode_seed_reply,
};
pub use model::{decode_model_reply, encode_model_reply};
pub use notification::TokenNotification;
pub use read::{decode_read_reply, encode_read_reply};

use crate::constants::{READ_LEN, STATUS_OK, WAKE_REPLY};
use crate::crypto::TeaKey;
use crate::protocol::codec::Response;
use crate::protocol::commands::Opcode;
use crate::protocol::parser;
use crate::{Error, Result};

/// Typed reply to a host command. Per-command encoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Wake,
    Read { status: u8, data: [u8; READ_LEN] },
    Write { status: u8 },
    Model { status: u8, id: u32, conf: u32 },
    Seed { conf: u32 },
    Challenge { value: u32, conf: u32 },
}

impl Reply {
    /// Encode the reply data (without correlation id).
    pub fn encode(&self, key: &TeaKey) -> Vec<u8> {
        match self {
            Self::Wake => WAKE_REPLY.to_vec(),
            Self::Read { status, data } => encode_read_reply(*status, data).to_vec(),
            Self::Write { status } => vec![*status],
            Self::Model { status, id, conf } => {
                encode_model_reply(*status, *id, *conf, key).to_vec()
            }
            Self::Seed { conf } => encode_seed_reply(*conf, key).to_vec(),
            Self::Challenge { value, conf } => encode_challenge_reply(*value, *conf, key).to_vec(),
        }
    }

    pub fn into_response(self, correlation_id: u8, key: &TeaKey) -> Response {
        Response::new(correlation_id, self.encode(key))
    }

    /// Decode reply data for the command that produced it (host side).
    pub fn decode(opcode: Opcode, data: &[u8], key: &TeaKey) -> Result<Self> {
        match opcode {
            Opcode::Wake => {
                parser::slice_at(data, 0, WAKE_REPLY.len())?;
                Ok(Self::Wake)
            }
            Opcode::Read => {
                let (status, data) = decode_read_reply(data)?;
                Ok(Self::Read { status, data })
            }
            Opcode::Write => Ok(Self::Write {
                status: parser::byte_at(data, 0)?,
            }),
            Opcode::Model => {
                let (status, id, conf) = decode_model_reply(data, key)?;
                Ok(Self::Model { status, id, conf })
            }
            Opcode::Seed => Ok(Self::Seed {
                conf: decode_seed_reply(data, key)?,
            }),
            Opcode::Challenge => {
                let (value, conf) = decode_challenge_reply(data, key)?;
                Ok(Self::Challenge { value, conf })
            }
            other => Err(Error::UnknownCommand(other as u8)),
        }
    }

    pub fn write_ok() -> Self {
        Self::Write { status: STATUS_OK }
    }
}
