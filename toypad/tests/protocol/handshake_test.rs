#[path = "../common/mod.rs"]
mod common;

use toypad::crypto::{Prng, TeaKey, encrypt};
use toypad::protocol::{Command, Reply, Response};
use toypad::test_support;
use toypad::toypad::SessionState;

#[test]
fn wake_reply_text() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    let response = pad
        .on_receive(&common::fixtures::wake_packet(0x21))
        .expect("wake answered");
    assert_eq!(response.correlation_id, 0x21);
    assert_eq!(response.data, b"(c) LEGO 2014".to_vec());

    let on_wire = Response::decode(&mock.sent()[0]).unwrap();
    assert_eq!(on_wire, response);
    assert_eq!(pad.session_state(), SessionState::Reconnecting);
}

#[test]
fn seed_then_challenges() {
    common::init_logging();
    let (mut pad, _mock) = test_support::connected_pad().unwrap();

    let seed = Command::Seed {
        seed: 0x1234_5678,
        conf: 0xAABB_CCDD,
    };
    assert_eq!(
        test_support::exchange(&mut pad, &seed, 1).unwrap(),
        Some(Reply::Seed { conf: 0xAABB_CCDD })
    );

    let mut expected = Prng::new(0x1234_5678);
    for (cid, conf) in [(2u8, 1u32), (3, 2), (4, 3)] {
        let reply = test_support::exchange(&mut pad, &Command::Challenge { conf }, cid).unwrap();
        assert_eq!(
            reply,
            Some(Reply::Challenge {
                value: expected.next_u32(),
                conf
            })
        );
    }
}

#[test]
fn known_challenge_values() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    test_support::exchange(&mut pad, &Command::Seed { seed: 0x1234_5678, conf: 0 }, 1).unwrap();
    let first = test_support::exchange(&mut pad, &Command::Challenge { conf: 0 }, 2).unwrap();
    let second = test_support::exchange(&mut pad, &Command::Challenge { conf: 0 }, 3).unwrap();
    assert_eq!(first, Some(Reply::Challenge { value: 0x154f_6e1b, conf: 0 }));
    assert_eq!(second, Some(Reply::Challenge { value: 0xeb39_1089, conf: 0 }));
}

#[test]
fn seed_reply_block_layout() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let key = TeaKey::default();
    let packet = test_support::host_packet(&Command::Seed { seed: 7, conf: 0x0102_0304 }, 5, &key)
        .unwrap();
    let response = pad.on_receive(&packet).unwrap();
    // conf big-endian, then four zero bytes
    let plain = [0x01, 0x02, 0x03, 0x04, 0, 0, 0, 0];
    assert_eq!(response.data, encrypt(&plain, &key).to_vec());
}

#[test]
fn configured_key_is_used() {
    let key = TeaKey::from_bytes(&[0x11; 16]);
    let (mut pad, _mock) =
        test_support::connected_pad_with(|b| b.cipher_key(key)).unwrap();
    assert_eq!(pad.state().cipher_key(), &key);
    let reply = test_support::exchange(&mut pad, &Command::Seed { seed: 1, conf: 99 }, 1).unwrap();
    assert_eq!(reply, Some(Reply::Seed { conf: 99 }));
}

#[test]
fn short_encrypted_data_is_zero_padded() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    // CHAL with no data: decrypts an all-zero block and still answers
    let packet = toypad::protocol::Request {
        opcode: 0xB3,
        correlation_id: 4,
        data: vec![],
    }
    .to_frame()
    .encode()
    .unwrap();
    let response = pad.on_receive(&packet).expect("answered");
    assert_eq!(response.correlation_id, 4);
    assert_eq!(response.data.len(), 8);
}
