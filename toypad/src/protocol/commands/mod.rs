// toypad/src/protocol/commands/mod.rs

pub mod challenge;
pub mod model;
pub mod read;
pub mod seed;
pub mod write;

pub use challenge::{decode_challenge, encode_challenge};
pub use model::{decode_model, encode_model};
pub use read::{decode_read, encode_read};
pub use seed::{decode_seed, encode_seed};
pub use write::{decode_write, encode_write};

use crate::crypto::TeaKey;
use crate::protocol::codec::Request;
use crate::{Error, Result};

/// Host command opcodes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Wake = 0xB0,
    Seed = 0xB1,
    Challenge = 0xB3,
    Color = 0xC0,
    GetColor = 0xC1,
    Fade = 0xC2,
    Flash = 0xC3,
    FadeRandom = 0xC4,
    FlashRandom = 0xC5,
    FadeAll = 0xC6,
    FlashAll = 0xC7,
    ColorAll = 0xC8,
    TagList = 0xD0,
    Read = 0xD2,
    Write = 0xD3,
    Model = 0xD4,
    Password = 0xE1,
    Active = 0xE5,
    LedSequence = 0xFF,
}

impl Opcode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0xB0 => Some(Self::Wake),
            0xB1 => Some(Self::Seed),
            0xB3 => Some(Self::Challenge),
            0xC0 => Some(Self::Color),
            0xC1 => Some(Self::GetColor),
            0xC2 => Some(Self::Fade),
            0xC3 => Some(Self::Flash),
            0xC4 => Some(Self::FadeRandom),
            0xC5 => Some(Self::FlashRandom),
            0xC6 => Some(Self::FadeAll),
            0xC7 => Some(Self::FlashAll),
            0xC8 => Some(Self::ColorAll),
            0xD0 => Some(Self::TagList),
            0xD2 => Some(Self::Read),
            0xD3 => Some(Self::Write),
            0xD4 => Some(Self::Model),
            0xE1 => Some(Self::Password),
            0xE5 => Some(Self::Active),
            0xFF => Some(Self::LedSequence),
            _ => None,
        }
    }

    /// Lighting and status commands are accepted but have no emulated effect.
    pub fn is_stub(self) -> bool {
        !matches!(
            self,
            Self::Wake | Self::Seed | Self::Challenge | Self::Read | Self::Write | Self::Model
        )
    }
}

/// Typed host command. Per-command decoders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Wake,
    Seed { seed: u32, conf: u32 },
    Challenge { conf: u32 },
    Read { index: u8, page: u8 },
    Write { index: u8, page: u8, data: [u8; 4] },
    Model { index: u8, conf: u32 },
    /// Accepted without effect
    Ignored(Opcode),
}

impl Command {
    /// Decode the request data for its opcode. Encrypted commands are
    /// decrypted with `key`; decryption itself never fails.
    pub fn decode(request: &Request, key: &TeaKey) -> Result<Self> {
        let opcode =
            Opcode::from_u8(request.opcode).ok_or(Error::UnknownCommand(request.opcode))?;
        let data = &request.data[..];

        match opcode {
            Opcode::Wake => Ok(Self::Wake),
            Opcode::Seed => {
                let (seed, conf) = decode_seed(data, key);
                Ok(Self::Seed { seed, conf })
            }
            Opcode::Challenge => Ok(Self::Challenge {
                conf: decode_challenge(data, key),
            }),
            Opcode::Read => {
                let (index, page) = decode_read(data)?;
                Ok(Self::Read { index, page })
            }
            Opcode::Write => {
                let (index, page, data) = decode_write(data)?;
                Ok(Self::Write { index, page, data })
            }
            Opcode::Model => {
                let (index, conf) = decode_model(data, key);
                Ok(Self::Model { index, conf })
            }
            other => Ok(Self::Ignored(other)),
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Wake => Opcode::Wake,
            Self::Seed { .. } => Opcode::Seed,
            Self::Challenge { .. } => Opcode::Challenge,
            Self::Read { .. } => Opcode::Read,
            Self::Write { .. } => Opcode::Write,
            Self::Model { .. } => Opcode::Model,
            Self::Ignored(op) => *op,
        }
    }

    /// Encode the request data (host side). `Ignored` commands carry none.
    pub fn encode(&self, key: &TeaKey) -> Vec<u8> {
        match self {
            Self::Wake => crate::constants::WAKE_REPLY.to_vec(),
            Self::Seed { seed, conf } => encode_seed(*seed, *conf, key).to_vec(),
            Self::Challenge { conf } => encode_challenge(*conf, key).to_vec(),
            Self::Read { index, page } => encode_read(*index, *page).to_vec(),
            Self::Write { index, page, data } => encode_write(*index, *page, *data).to_vec(),
            Self::Model { index, conf } => encode_model(*index, *conf, key).to_vec(),
            Self::Ignored(_) => Vec::new(),
        }
    }

    /// Wrap into a request with the given correlation id.
    pub fn to_request(&self, correlation_id: u8, key: &TeaKey) -> Request {
        Request {
            opcode: self.opcode() as u8,
            correlation_id,
            data: self.encode(key),
        }
    }
}
