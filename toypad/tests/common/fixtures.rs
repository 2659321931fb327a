// fixtures.rs: commonly used packets and tokens

use toypad::crypto::TeaKey;
use toypad::protocol::Command;
use toypad::test_support;
use toypad::types::BoxIndex;

pub fn key() -> TeaKey {
    TeaKey::default()
}

pub fn box_at(i: usize) -> BoxIndex {
    BoxIndex::new(i).expect("box index in range")
}

pub fn wake_packet(correlation_id: u8) -> Vec<u8> {
    test_support::host_packet(&Command::Wake, correlation_id, &key()).expect("wake packet")
}

/// A WAKE packet as captured from a real host, checksum included.
pub fn captured_wake() -> Vec<u8> {
    let mut p = vec![
        0x55, 0x0f, 0xb0, 0x01, 0x28, 0x63, 0x29, 0x20, 0x4c, 0x45, 0x47, 0x4f, 0x20, 0x32, 0x30,
        0x31, 0x34,
    ];
    let sum = p.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    p.push(sum);
    p.resize(32, 0);
    p
}
