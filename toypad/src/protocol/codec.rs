// toypad/src/protocol/codec.rs

use crate::constants::MAX_RESPONSE_DATA_LEN;
use crate::protocol::frame::{Frame, FrameKind};
use crate::protocol::parser;
use crate::{Error, Result};

/// A host command: opcode, correlation id and opcode-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub opcode: u8,
    pub correlation_id: u8,
    pub data: Vec<u8>,
}

impl Request {
    /// Split a frame payload into opcode, correlation id and data.
    pub fn parse(frame: &Frame) -> Result<Self> {
        parser::ensure_len(&frame.payload, 2)?;
        Ok(Self {
            opcode: frame.payload[0],
            correlation_id: frame.payload[1],
            data: frame.payload[2..].to_vec(),
        })
    }

    /// Build the frame a host would send for this request. Used by tests
    /// and host-side tooling.
    pub fn to_frame(&self) -> Frame {
        let mut payload = Vec::with_capacity(2 + self.data.len());
        payload.push(self.opcode);
        payload.push(self.correlation_id);
        payload.extend_from_slice(&self.data);
        Frame::new(FrameKind::Response, payload)
    }
}

/// A reply to a host command, correlated by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub correlation_id: u8,
    pub data: Vec<u8>,
}

impl Response {
    pub fn new(correlation_id: u8, data: Vec<u8>) -> Self {
        Self {
            correlation_id,
            data,
        }
    }

    /// Merge correlation id and data into a response frame.
    pub fn to_frame(&self) -> Result<Frame> {
        if self.data.len() > MAX_RESPONSE_DATA_LEN {
            return Err(Error::OversizeResponse {
                len: self.data.len(),
                max: MAX_RESPONSE_DATA_LEN,
            });
        }
        let mut payload = Vec::with_capacity(1 + self.data.len());
        payload.push(self.correlation_id);
        payload.extend_from_slice(&self.data);
        Ok(Frame::new(FrameKind::Response, payload))
    }

    /// Encode into a full 32-byte packet.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_frame()?.encode()
    }

    /// Parse a response packet (host side / tests).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let frame = Frame::decode(bytes)?;
        parser::ensure_len(&frame.payload, 1)?;
        Ok(Self {
            correlation_id: frame.payload[0],
            data: frame.payload[1..].to_vec(),
        })
    }
}

/// Decode a raw packet straight into a request.
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    let frame = Frame::decode(bytes)?;
    Request::parse(&frame)
}
