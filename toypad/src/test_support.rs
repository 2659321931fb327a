//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport-backed pad setup and the
//! host-side packet builders so tests across the crate and the tests/
//! directory share the same logic.
#![allow(dead_code)]

use std::time::Duration;

use crate::crypto::TeaKey;
use crate::protocol::{Command, Frame, Opcode, Reply, Response, TokenNotification};
use crate::toypad::{ToyPad, ToyPadBuilder};
use crate::transport::{MockTransport, TransportSignal};
use crate::Result;

/// A pad with zero pacing, already connected to a host, plus a handle on
/// its mock transport.
#[doc(hidden)]
pub fn connected_pad() -> Result<(ToyPad, MockTransport)> {
    connected_pad_with(|b| b)
}

/// Like [`connected_pad`] with extra builder configuration.
#[doc(hidden)]
pub fn connected_pad_with(
    configure: impl FnOnce(ToyPadBuilder) -> ToyPadBuilder,
) -> Result<(ToyPad, MockTransport)> {
    let mock = MockTransport::new();
    let builder = ToyPadBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_identity("test-pad")
        .pacing(Duration::ZERO);
    let mut pad = configure(builder).build()?;
    pad.on_transport_signal(TransportSignal::Connected);
    pad.drain_events();
    Ok((pad, mock))
}

/// Encode `command` the way a host would send it.
#[doc(hidden)]
pub fn host_packet(command: &Command, correlation_id: u8, key: &TeaKey) -> Result<Vec<u8>> {
    command.to_request(correlation_id, key).to_frame().encode()
}

/// Send `command` to `pad` and decode the typed reply, if any.
#[doc(hidden)]
pub fn exchange(pad: &mut ToyPad, command: &Command, correlation_id: u8) -> Result<Option<Reply>> {
    let key = *pad.state().cipher_key();
    let packet = host_packet(command, correlation_id, &key)?;
    match pad.on_receive(&packet) {
        Some(response) => decode_reply(command.opcode(), &response, &key).map(Some),
        None => Ok(None),
    }
}

#[doc(hidden)]
pub fn decode_reply(opcode: Opcode, response: &Response, key: &TeaKey) -> Result<Reply> {
    Reply::decode(opcode, &response.data, key)
}

/// Decode every notification in a batch of sent packets.
#[doc(hidden)]
pub fn notifications(sent: &[Vec<u8>]) -> Result<Vec<TokenNotification>> {
    sent.iter()
        .map(|p| Frame::decode(p).and_then(|f| TokenNotification::from_frame(&f)))
        .collect()
}
