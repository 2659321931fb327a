// toypad/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_KIND_REQUEST, FRAME_KIND_RESPONSE, MAX_PAYLOAD_LEN, PACKET_LEN,
};
use crate::protocol::checksum::{checksum, write_checksum};
use crate::{Error, Result};

/// First byte of every packet
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Unsolicited device notification (token placed/removed)
    Request = FRAME_KIND_REQUEST,
    /// Reply to a host command. Host commands use the same byte.
    Response = FRAME_KIND_RESPONSE,
}

impl FrameKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            FRAME_KIND_REQUEST => Some(Self::Request),
            FRAME_KIND_RESPONSE => Some(Self::Response),
            _ => None,
        }
    }
}

/// Toypad frame helper. Provides encode/decode of the wire packet
/// Format: [Kind(1)] [Len(1)] [Payload(n)] [Checksum(1)] [zero padding to 32]
/// Checksum: sum of kind, length and payload bytes mod 256
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    pub payload: Vec<u8>,
    /// Checksum as received (or as computed by `Frame::new`)
    pub checksum: u8,
}

impl Frame {
    pub fn new(kind: FrameKind, payload: Vec<u8>) -> Self {
        let mut frame = Self {
            kind,
            payload,
            checksum: 0,
        };
        frame.checksum = frame.expected_checksum();
        frame
    }

    pub fn len(&self) -> u8 {
        self.payload.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Checksum the payload should carry. Not enforced on decode.
    pub fn expected_checksum(&self) -> u8 {
        let header = [self.kind as u8, self.len()];
        checksum(&header).wrapping_add(checksum(&self.payload))
    }

    pub fn checksum_matches(&self) -> bool {
        self.checksum == self.expected_checksum()
    }

    /// Encode into a full 32-byte packet.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: self.payload.len(),
            });
        }

        let body_len = FRAME_HEADER_LEN + self.payload.len();
        let mut out = vec![0u8; PACKET_LEN];
        out[0] = self.kind as u8;
        out[1] = self.len();
        out[FRAME_HEADER_LEN..body_len].copy_from_slice(&self.payload);
        write_checksum(&mut out, body_len)?;
        Ok(out)
    }

    /// Decode a packet. The checksum byte is recorded but never validated:
    /// the authentic device accepts frames with a bad checksum too.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FRAME_HEADER_LEN + 1 {
            return Err(Error::InvalidLength {
                expected: FRAME_HEADER_LEN + 1,
                actual: bytes.len(),
            });
        }

        let kind = FrameKind::from_u8(bytes[0])
            .ok_or_else(|| Error::FrameFormat(format!("unknown frame kind {:#04x}", bytes[0])))?;

        let len = bytes[1] as usize;
        let required_len = FRAME_HEADER_LEN + len + 1;
        if bytes.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: bytes.len(),
            });
        }

        let payload_end = FRAME_HEADER_LEN + len;
        let frame = Self {
            kind,
            payload: bytes[FRAME_HEADER_LEN..payload_end].to_vec(),
            checksum: bytes[payload_end],
        };

        if !frame.checksum_matches() {
            log::debug!(
                "accepting frame with checksum {:#04x} (expected {:#04x})",
                frame.checksum,
                frame.expected_checksum()
            );
        }

        Ok(frame)
    }
}
