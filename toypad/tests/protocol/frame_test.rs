#[path = "../common/mod.rs"]
mod common;

use toypad::protocol::{Frame, FrameKind, Response, decode_request};
use toypad::test_support;
use toypad::Error;

#[test]
fn captured_wake_decodes() {
    let packet = common::fixtures::captured_wake();
    let req = decode_request(&packet).expect("decode");
    assert_eq!(req.opcode, 0xb0);
    assert_eq!(req.correlation_id, 0x01);
    assert_eq!(&req.data[..], b"(c) LEGO 2014");
}

#[test]
fn bad_checksum_is_accepted() {
    common::init_logging();
    let mut packet = common::fixtures::captured_wake();
    packet[17] ^= 0xff;
    let frame = Frame::decode(&packet).expect("lenient decode");
    assert!(!frame.checksum_matches());

    let (mut pad, mock) = test_support::connected_pad().unwrap();
    assert!(pad.on_receive(&packet).is_some());
    assert_eq!(mock.sent().len(), 1);
}

#[test]
fn unknown_kind_is_rejected() {
    let mut packet = common::fixtures::wake_packet(1);
    packet[0] = 0x42;
    assert!(matches!(Frame::decode(&packet), Err(Error::FrameFormat(_))));
}

#[test]
fn length_past_packet_is_rejected() {
    let mut packet = common::fixtures::wake_packet(1);
    packet[1] = 40;
    assert!(matches!(
        Frame::decode(&packet),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn responses_use_response_kind_and_pad_to_32() {
    let bytes = Response::new(9, vec![0x00]).encode().unwrap();
    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes[0], FrameKind::Response as u8);
    assert_eq!(&bytes[1..5], &[0x02, 0x09, 0x00, 0x55 + 0x02 + 0x09]);
    assert!(bytes[5..].iter().all(|&b| b == 0));
}

#[test]
fn oversize_response_is_refused() {
    let resp = Response::new(1, vec![0; 29]);
    assert!(matches!(
        resp.encode(),
        Err(Error::OversizeResponse { len: 29, max: 28 })
    ));
    assert!(Response::new(1, vec![0; 28]).encode().is_ok());
}

#[test]
fn notification_wire_bytes() {
    use toypad::protocol::TokenNotification;
    use toypad::types::{Pad, SlotIndex, Uid};

    let n = TokenNotification::placed(
        Pad::Left,
        SlotIndex::new(0).unwrap(),
        Uid::from_body([1, 2, 3, 4, 5]),
    );
    let bytes = n.encode().unwrap();
    let expected = hex::decode("560b0200000004010203040580f6").unwrap();
    assert_eq!(&bytes[..expected.len()], &expected[..]);
    assert!(bytes[expected.len()..].iter().all(|&b| b == 0));
}
