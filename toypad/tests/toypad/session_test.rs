#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use common::fixtures::box_at;
use toypad::test_support;
use toypad::toypad::{SessionState, ToyPadBuilder, ToyPadEvent};
use toypad::transport::{MockTransport, TransportSignal};

#[test]
fn notifications_wait_for_host() {
    common::init_logging();
    let mock = MockTransport::new();
    let mut pad = ToyPadBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .pacing(Duration::ZERO)
        .build()
        .unwrap();
    assert_eq!(pad.session_state(), SessionState::Disconnected);

    pad.place_minifigure(1, box_at(0)).unwrap();
    assert!(mock.sent().is_empty());

    pad.on_transport_signal(TransportSignal::Wake);
    assert_eq!(pad.session_state(), SessionState::Reconnecting);
    pad.place_minifigure(2, box_at(1)).unwrap();
    assert_eq!(mock.sent().len(), 1);

    pad.on_transport_signal(TransportSignal::Connected);
    assert_eq!(pad.session_state(), SessionState::Connected);
}

#[test]
fn detached_endpoint_suppresses_notifications() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    mock.set_connected(false);
    pad.place_minifigure(1, box_at(0)).unwrap();
    assert!(mock.sent().is_empty());
}

#[test]
fn suspend_cleanup_cycle() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(1, box_at(0)).unwrap();
    pad.place_vehicle(1000, 0, 0, box_at(1)).unwrap();
    mock.take_sent();
    pad.drain_events();

    pad.on_transport_signal(TransportSignal::Suspended);
    let events = pad.drain_events();
    assert_eq!(
        events,
        vec![
            ToyPadEvent::SessionChanged {
                from: SessionState::Connected,
                to: SessionState::CleanupPending
            },
            ToyPadEvent::CleanupRequested
        ]
    );
    // tokens are still there until the application runs cleanup
    assert_eq!(pad.resident_count(), 2);

    assert!(pad.run_pending_cleanup());
    assert_eq!(pad.resident_count(), 0);
    assert_eq!(pad.session_state(), SessionState::Disconnected);
    assert!(mock.sent().is_empty());

    pad.on_transport_signal(TransportSignal::Wake);
    assert_eq!(pad.session_state(), SessionState::Reconnecting);
}

#[test]
fn wake_command_restarts_session() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    assert!(pad.on_receive(&common::fixtures::wake_packet(1)).is_some());
    assert_eq!(pad.session_state(), SessionState::Reconnecting);
    assert!(matches!(
        pad.drain_events().as_slice(),
        [ToyPadEvent::SessionChanged {
            to: SessionState::Reconnecting,
            ..
        }]
    ));
}

#[test]
fn events_flush_to_sink() {
    let (mut pad, _mock) = test_support::connected_pad_with(|b| b.event_capacity(2)).unwrap();
    for id in 1..=3 {
        pad.place_minifigure(id, box_at(id as usize)).unwrap();
    }
    let mut names = Vec::new();
    let mut sink = |e: ToyPadEvent| {
        if let ToyPadEvent::TokenPlaced { name, .. } = e {
            names.push(name);
        }
    };
    assert_eq!(pad.flush_events(&mut sink), 2);
    // oldest event dropped
    assert_eq!(names, vec!["Gandalf".to_string(), "Wyldstyle".to_string()]);
}
