#[path = "../common/mod.rs"]
mod common;

use common::fixtures::box_at;
use toypad::test_support;
use toypad::toypad::ToyPadEvent;
use toypad::types::{Direction, Pad, SlotIndex};
use toypad::Error;

#[test]
fn seven_tokens_then_no_free_slot() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    for id in 1..=7 {
        let slot = pad.place_minifigure(id, box_at(id as usize - 1)).unwrap();
        assert_eq!(slot.get(), id as usize - 1);
    }
    assert!(matches!(
        pad.place_minifigure(8, box_at(0)),
        Err(Error::NoFreeSlot)
    ));
    assert_eq!(pad.resident_count(), 7);
    assert_eq!(mock.sent().len(), 7);
}

#[test]
fn same_uid_replaces_resident_token() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    let vehicle = pad.create_vehicle(1006, 0, 0);
    pad.place(vehicle.clone(), box_at(0)).unwrap();
    for id in 1..=6 {
        pad.place_minifigure(id, box_at(id as usize)).unwrap();
    }
    mock.take_sent();

    // full pad, but the uid is already resident
    let slot = pad.place(vehicle.clone(), box_at(0)).unwrap();
    assert_eq!(slot.get(), 0);
    assert_eq!(pad.resident_count(), 7);

    let sent = test_support::notifications(&mock.take_sent()).unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].direction, Direction::Removed);
    assert_eq!(sent[0].pad, Pad::Left);
    assert_eq!(sent[1].direction, Direction::Placed);
    assert_eq!(sent[1].pad, Pad::Left);
    assert_eq!(sent[0].uid, *vehicle.uid());
    assert_eq!(sent[1].uid, *vehicle.uid());
    assert_eq!(pad.boxes()[0].slot(), Some(slot));
}

#[test]
fn placing_on_occupied_box_takes_old_token_off() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    for id in 1..=7 {
        pad.place_minifigure(id, box_at(0)).unwrap();
    }
    assert_eq!(pad.resident_count(), 1);
    assert_eq!(pad.boxes().iter().filter(|b| b.is_filled()).count(), 1);
    assert_eq!(pad.token(pad.boxes()[0].slot().unwrap()).unwrap().id(), 7);

    let sent = test_support::notifications(&mock.take_sent()).unwrap();
    assert_eq!(sent.len(), 13);
    assert_eq!(sent[1].direction, Direction::Removed);
    assert_eq!(sent[1].pad, Pad::Left);
    assert_eq!(sent[2].direction, Direction::Placed);

    // the other boxes are still usable
    pad.place_minifigure(8, box_at(1)).unwrap();
    assert_eq!(pad.remove_box(box_at(0)).unwrap().id(), 7);
    assert_eq!(pad.resident_count(), 1);
}

#[test]
fn duplicate_minifigures_get_distinct_uids() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    let a = pad.place_minifigure(16, box_at(0)).unwrap();
    let b = pad.place_minifigure(16, box_at(1)).unwrap();
    assert_ne!(a, b);
    assert_ne!(pad.token(a).unwrap().uid(), pad.token(b).unwrap().uid());
    assert_eq!(pad.count_by_identity(16), 2);
}

#[test]
fn quick_swap_reuses_uid() {
    let (mut pad, _mock) = test_support::connected_pad_with(|b| b.quick_swap(true)).unwrap();
    let first = pad.place_minifigure(16, box_at(0)).unwrap();
    let uid = *pad.token(first).unwrap().uid();
    assert_eq!(pad.count_by_identity(16), 0);

    // same uid, so the second placement replaces the first
    let second = pad.place_minifigure(16, box_at(1)).unwrap();
    assert_eq!(*pad.token(second).unwrap().uid(), uid);
    assert_eq!(pad.resident_count(), 1);
}

#[test]
fn uid_stable_across_pads() {
    let (a, _) = test_support::connected_pad().unwrap();
    let (b, _) = test_support::connected_pad().unwrap();
    assert_eq!(a.create_minifigure(3).uid(), b.create_minifigure(3).uid());
}

#[test]
fn remove_by_box_and_slot() {
    let (mut pad, mock) = test_support::connected_pad().unwrap();
    pad.place_minifigure(1, box_at(3)).unwrap();
    let slot = pad.place_minifigure(2, box_at(5)).unwrap();
    mock.take_sent();
    pad.drain_events();

    let token = pad.remove_box(box_at(3)).unwrap();
    assert_eq!(token.id(), 1);
    let token = pad.remove(slot).unwrap();
    assert_eq!(token.id(), 2);
    assert!(matches!(
        pad.remove(SlotIndex::new(0).unwrap()),
        Err(Error::EmptySlot(0))
    ));

    let sent = test_support::notifications(&mock.take_sent()).unwrap();
    assert_eq!(
        sent.iter().map(|n| n.direction).collect::<Vec<_>>(),
        vec![Direction::Removed, Direction::Removed]
    );
    let events = pad.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| matches!(e, ToyPadEvent::TokenRemoved { .. })));
}

#[test]
fn token_infos_in_slot_order() {
    let (mut pad, _mock) = test_support::connected_pad().unwrap();
    pad.place_vehicle(1030, 0, 0, box_at(2)).unwrap();
    pad.place_minifigure(41, box_at(1)).unwrap();
    let infos = pad.token_infos();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].name(), "TARDIS");
    assert_eq!(infos[0].pad, Pad::Right);
    assert_eq!(infos[1].name(), "Unikitty");
    assert_eq!(infos[1].pad, Pad::Center);
}
