#[path = "../common/mod.rs"]
mod common;

use std::thread;
use std::time::{Duration, Instant};

use common::fixtures::box_at;
use toypad::test_support;
use toypad::toypad::{Layout, SharedToyPad};
use toypad::types::{Direction, SlotIndex};

#[test]
fn place_batch_replaces_contents() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(1, box_at(0)).unwrap();
    pad.place_minifigure(2, box_at(1)).unwrap();
    pad.place_vehicle(1010, 0, 0, box_at(4)).unwrap();
    let saved = pad.snapshot();

    pad.remove_all();
    pad.place_minifigure(30, box_at(6)).unwrap();
    mock.take_sent();

    assert_eq!(pad.place_batch(&saved).unwrap(), 3);
    let sent = test_support::notifications(&mock.take_sent()).unwrap();
    let directions: Vec<Direction> = sent.iter().map(|n| n.direction).collect();
    assert_eq!(
        directions,
        vec![
            Direction::Removed,
            Direction::Placed,
            Direction::Placed,
            Direction::Placed
        ]
    );
    assert_eq!(pad.snapshot(), saved);
}

#[test]
fn place_batch_keeps_saved_slots() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let first = pad.place_minifigure(1, box_at(5)).unwrap();
    let second = pad.place_minifigure(2, box_at(0)).unwrap();
    let saved = pad.snapshot();
    assert_eq!(saved.boxes[5].slot(), Some(first));
    assert_eq!(saved.boxes[0].slot(), Some(second));

    assert_eq!(pad.place_batch(&saved).unwrap(), 2);
    assert_eq!(pad.snapshot(), saved);
    assert_eq!(pad.token(first).unwrap().id(), 1);
    assert_eq!(pad.token(second).unwrap().id(), 2);
}

#[test]
fn place_batch_keeps_slot_gaps() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    for id in 1..=4 {
        pad.place_minifigure(id, box_at(id as usize)).unwrap();
    }
    pad.remove_box(box_at(1)).unwrap();
    pad.remove_box(box_at(3)).unwrap();
    let saved = pad.snapshot();

    assert_eq!(pad.place_batch(&saved).unwrap(), 2);
    assert_eq!(pad.snapshot(), saved);
    assert!(pad.token(SlotIndex::new(0).unwrap()).is_none());
}

#[test]
fn batch_of_empty_layout_clears_pad() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(1, box_at(0)).unwrap();
    assert_eq!(pad.place_batch(&Layout::empty()).unwrap(), 0);
    assert_eq!(pad.resident_count(), 0);
    assert!(pad.boxes().iter().all(|b| !b.is_filled()));
}

#[test]
fn pacing_is_applied() {
    let (mut pad, _mock) =
        test_support::connected_pad_with(|b| b.pacing(Duration::from_millis(30))).unwrap();
    for id in 1..=3 {
        pad.place_minifigure(id, box_at(id as usize)).unwrap();
    }
    let start = Instant::now();
    assert_eq!(pad.remove_all(), 3);
    assert!(start.elapsed() >= Duration::from_millis(60));
}

#[test]
fn shared_pad_answers_during_batch() {
    let (pad, mock) =
        test_support::connected_pad_with(|b| b.pacing(Duration::from_millis(40))).unwrap();
    let shared = SharedToyPad::new(pad);
    for id in 1..=4 {
        shared.with(|p| p.place_minifigure(id, box_at(id as usize))).unwrap();
    }
    mock.take_sent();

    let worker = {
        let shared = shared.clone();
        thread::spawn(move || shared.remove_all())
    };
    thread::sleep(Duration::from_millis(10));
    let start = Instant::now();
    assert!(shared.on_receive(&common::fixtures::wake_packet(9)).is_some());
    // the receive path must not wait out the pacing delay
    assert!(start.elapsed() < Duration::from_millis(40));

    assert_eq!(worker.join().unwrap(), 4);
    assert_eq!(shared.with(|p| p.resident_count()), 0);
    assert_eq!(mock.sent().len(), 5);
}
