// toypad/src/protocol/responses/notification.rs

use crate::protocol::frame::{Frame, FrameKind};
use crate::protocol::parser;
use crate::types::{Direction, Pad, SlotIndex, Uid};
use crate::{Error, Result};

/// Unsolicited "token placed/removed" packet.
/// Payload: pad(1) + 0x00 + slot(1) + direction(1) + uid(7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenNotification {
    pub pad: Pad,
    pub slot: SlotIndex,
    pub direction: Direction,
    pub uid: Uid,
}

impl TokenNotification {
    pub const PAYLOAD_LEN: usize = 11;

    pub fn placed(pad: Pad, slot: SlotIndex, uid: Uid) -> Self {
        Self {
            pad,
            slot,
            direction: Direction::Placed,
            uid,
        }
    }

    pub fn removed(pad: Pad, slot: SlotIndex, uid: Uid) -> Self {
        Self {
            pad,
            slot,
            direction: Direction::Removed,
            uid,
        }
    }

    pub fn to_frame(&self) -> Frame {
        let mut payload = Vec::with_capacity(Self::PAYLOAD_LEN);
        payload.push(self.pad.as_u8());
        payload.push(0x00);
        payload.push(self.slot.as_u8());
        payload.push(self.direction as u8);
        payload.extend_from_slice(self.uid.as_bytes());
        Frame::new(FrameKind::Request, payload)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_frame().encode()
    }

    /// Parse a notification frame (host side / tests).
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        if frame.kind != FrameKind::Request {
            return Err(Error::FrameFormat("not a notification frame".into()));
        }
        let p = &frame.payload;
        parser::ensure_len(p, Self::PAYLOAD_LEN)?;
        let pad = Pad::from_u8(p[0])
            .ok_or_else(|| Error::FrameFormat(format!("invalid pad {}", p[0])))?;
        let slot = SlotIndex::new(p[2] as usize).ok_or(Error::InvalidSlot(p[2] as usize))?;
        let direction = match p[3] {
            0 => Direction::Placed,
            1 => Direction::Removed,
            other => return Err(Error::FrameFormat(format!("invalid direction {}", other))),
        };
        let uid = Uid::try_from(&p[4..4 + 7])?;
        Ok(Self {
            pad,
            slot,
            direction,
            uid,
        })
    }
}
