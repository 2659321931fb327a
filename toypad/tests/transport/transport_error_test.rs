#[path = "../common/mod.rs"]
mod common;

use common::fixtures::box_at;
use toypad::test_support;
use toypad::transport::{MockTransport, Transport};
use toypad::Error;

#[test]
fn send_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_send_failures(1);
    assert!(matches!(m.send(&[1]), Err(Error::TransportClosed(_))));
    m.send(&[2]).unwrap();
    assert_eq!(m.sent(), vec![vec![2]]);
}

#[test]
fn failed_response_does_not_break_the_pad() {
    common::init_logging();
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    mock.set_send_failures(1);
    assert!(pad.on_receive(&common::fixtures::wake_packet(1)).is_none());
    assert!(pad.on_receive(&common::fixtures::wake_packet(2)).is_some());
    assert_eq!(mock.sent().len(), 1);
}

#[test]
fn failed_notification_still_places() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    mock.set_send_failures(2);
    pad.place_minifigure(1, box_at(0)).unwrap();
    pad.place_minifigure(2, box_at(1)).unwrap();
    assert_eq!(pad.resident_count(), 2);
    assert!(mock.sent().is_empty());
}
