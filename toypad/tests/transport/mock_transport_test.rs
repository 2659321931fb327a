#[path = "../common/mod.rs"]
mod common;

use toypad::transport::{MockTransport, Transport};

#[test]
fn mock_transport_records_sends() {
    let mut m = MockTransport::new();
    m.send(&[0xAA]).unwrap();
    m.send(&[0xBB, 0xCC]).unwrap();
    assert_eq!(m.sent(), vec![vec![0xAA], vec![0xBB, 0xCC]]);
    assert_eq!(m.pop_sent(), Some(vec![0xBB, 0xCC]));
    assert_eq!(m.take_sent(), vec![vec![0xAA]]);
    assert!(m.sent().is_empty());
}

#[test]
fn clones_share_the_record() {
    let m = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(m.clone());
    boxed.send(&common::fixtures::wake_packet(1)).unwrap();
    assert_eq!(m.sent().len(), 1);
    m.set_connected(false);
    assert!(!boxed.is_connected());
}
