#[path = "../common/mod.rs"]
mod common;

use common::fixtures::box_at;
use toypad::constants::{STATUS_NOT_FOUND, STATUS_NOT_MINIFIGURE, STATUS_OK};
use toypad::protocol::{Command, Reply, Request};
use toypad::test_support;
use toypad::types::SlotIndex;

fn model(pad: &mut toypad::toypad::ToyPad, index: u8) -> Reply {
    test_support::exchange(pad, &Command::Model { index, conf: 0x5EED }, index)
        .unwrap()
        .expect("model always answers")
}

#[test]
fn model_by_slot() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    for id in [1, 2, 3] {
        pad.place_minifigure(id, box_at(id as usize + 3)).unwrap();
    }
    pad.place_minifigure(42, box_at(1)).unwrap();
    pad.place_vehicle(1000, 0, 0, box_at(2)).unwrap();

    assert_eq!(
        model(&mut pad, 3),
        Reply::Model {
            status: STATUS_OK,
            id: 42,
            conf: 0x5EED
        }
    );
    assert_eq!(
        model(&mut pad, 4),
        Reply::Model {
            status: STATUS_NOT_MINIFIGURE,
            id: 0,
            conf: 0x5EED
        }
    );
    assert_eq!(
        model(&mut pad, 6),
        Reply::Model {
            status: STATUS_NOT_FOUND,
            id: 0,
            conf: 0x5EED
        }
    );
}

#[test]
fn read_vehicle_pages() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    pad.place_vehicle(1012, 0xAABBCCDD, 0x11223344, box_at(1)).unwrap();

    let reply = test_support::exchange(&mut pad, &Command::Read { index: 0, page: 0x24 }, 1)
        .unwrap()
        .unwrap();
    match reply {
        Reply::Read { status, data } => {
            assert_eq!(status, STATUS_OK);
            assert_eq!(&data[0..4], &1012u32.to_le_bytes());
            assert_eq!(&data[4..8], &0x11223344u32.to_le_bytes());
            assert_eq!(&data[8..12], &[0x00, 0x01, 0x00, 0x00]);
            // page 0x27 .. 0x28 lie inside memory but were never written
            assert_eq!(&data[12..16], &[0; 4]);
        }
        other => panic!("unexpected {:?}", other),
    }

    let past_end = test_support::exchange(&mut pad, &Command::Read { index: 0, page: 0x2C }, 2)
        .unwrap()
        .unwrap();
    assert!(matches!(past_end, Reply::Read { status: STATUS_OK, data } if data[4..] == [0; 12]));
}

#[test]
fn write_renames_vehicle() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let slot = pad.place_vehicle(1030, 0, 0, box_at(0)).unwrap();
    let write = Command::Write {
        index: slot.as_u8(),
        page: 0x24,
        data: 1006u32.to_le_bytes(),
    };
    assert_eq!(
        test_support::exchange(&mut pad, &write, 1).unwrap(),
        Some(Reply::write_ok())
    );
    let token = pad.token(slot).unwrap();
    assert_eq!(token.id(), 1006);
    assert_eq!(token.name(), "Batmobile");
}

#[test]
fn write_to_missing_token_is_acked() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let write = Command::Write {
        index: 5,
        page: 0x10,
        data: [1, 2, 3, 4],
    };
    assert_eq!(
        test_support::exchange(&mut pad, &write, 1).unwrap(),
        Some(Reply::write_ok())
    );
}

#[test]
fn read_of_missing_token() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let reply = test_support::exchange(&mut pad, &Command::Read { index: 0, page: 0 }, 1).unwrap();
    assert_eq!(
        reply,
        Some(Reply::Read {
            status: STATUS_NOT_FOUND,
            data: [0; 16]
        })
    );
}

#[test]
fn truncated_read_and_unknown_opcode_get_no_reply() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(1, box_at(0)).unwrap();
    mock.take_sent();

    for request in [
        Request {
            opcode: 0xD2,
            correlation_id: 1,
            data: vec![0x00],
        },
        Request {
            opcode: 0x77,
            correlation_id: 2,
            data: vec![],
        },
        Request {
            opcode: 0xC0,
            correlation_id: 3,
            data: vec![0x00, 0xff, 0x00, 0x00],
        },
    ] {
        let packet = request.to_frame().encode().unwrap();
        assert!(pad.on_receive(&packet).is_none());
    }
    assert!(mock.sent().is_empty());
    assert!(pad.token(SlotIndex::new(0).unwrap()).is_some());
}
