// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! End-to-end tests driving the controller the way an embedder would: a
//! sequence of pointer clicks and confirm actions, then ticks from a
//! (simulated) periodic driver, observed through an event sink.

use std::cell::RefCell;
use std::rc::Rc;

use chaos_engine::{
    DotKind, EventSink, Phase, Point, PointEvent, SimulationController, TrackMark,
};

struct Recorder(Rc<RefCell<Vec<PointEvent>>>);

impl EventSink for Recorder {
    fn point_added(&mut self, event: &PointEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

const TRIANGLE: [Point; 3] = [
    Point { x: 0.0, y: 0.0 },
    Point { x: 400.0, y: 0.0 },
    Point { x: 200.0, y: 400.0 },
];

fn place_triangle(c: &mut SimulationController) {
    for p in TRIANGLE {
        assert!(c.pointer_pressed(p).unwrap());
    }
}

/// Builds a ready-to-run controller: three anchors, confirmed, seeded.
fn ready(seed: u64, start: Point) -> SimulationController {
    let mut c = SimulationController::with_seed(seed);
    place_triangle(&mut c);
    assert!(c.confirm_anchors());
    assert!(c.pointer_pressed(start).unwrap());
    c
}

#[test]
fn phase_gating_end_to_end() {
    let mut c = SimulationController::with_seed(3);

    // two anchors: neither confirm nor seed nor start are available
    assert!(c.pointer_pressed(TRIANGLE[0]).unwrap());
    assert!(c.pointer_pressed(TRIANGLE[1]).unwrap());
    assert!(!c.confirm_anchors());
    assert!(!c.place_seed_at(Point::new(50.0, 50.0)));
    assert!(!c.start_run(2).unwrap());
    assert_eq!(Phase::EditingAnchors, c.phase());

    // three anchors but no seed: start still unavailable
    assert!(c.pointer_pressed(TRIANGLE[2]).unwrap());
    assert!(c.confirm_anchors());
    assert!(!c.can_start());
    assert!(!c.start_run(2).unwrap());

    // seed placed: start succeeds, and the first tick yields exactly one
    // new mark plus an updated track point
    assert!(c.pointer_pressed(Point::new(50.0, 50.0)).unwrap());
    assert!(c.can_start());
    assert!(c.start_run(2).unwrap());

    let result = c.tick().unwrap().expect("running controller must step");
    assert_eq!(1, c.marks().len());
    assert_eq!(Point::new(50.0, 50.0), c.marks()[0].point);
    assert_eq!(Some(result.next_track), c.current_track());
    assert_ne!(Some(result.mark), c.current_track());
}

#[test]
fn identically_seeded_runs_are_identical() {
    let run = |seed: u64| -> Vec<TrackMark> {
        let mut c = ready(seed, Point::new(37.0, 91.0));
        c.start_run(2).unwrap();
        for _ in 0..500 {
            c.tick().unwrap();
        }
        c.marks().to_vec()
    };

    let a = run(1234);
    let b = run(1234);
    assert_eq!(a, b);

    let c = run(1235);
    assert_ne!(a, c);
}

#[test]
fn attractor_stays_inside_the_anchor_hull() {
    // every interpolated point is a convex combination of the previous
    // point and an anchor, so once inside the triangle's bounding box the
    // track can never leave it
    let mut c = ready(7, Point::new(100.0, 100.0));
    c.start_run(2).unwrap();
    for _ in 0..2000 {
        c.tick().unwrap();
    }

    assert!(c.marks().len() > 1000);
    for mark in c.marks() {
        assert!(mark.point.x >= 0.0 && mark.point.x <= 400.0, "{}", mark.point);
        assert!(mark.point.y >= 0.0 && mark.point.y <= 400.0, "{}", mark.point);
    }
}

#[test]
fn larger_factors_pull_marks_toward_anchors() {
    // with factor 6 each step lands 5/6 of the way to the chosen anchor,
    // so marks cluster near the three corners: no mark can sit near the
    // centroid once the run settles
    let mut c = ready(11, Point::new(200.0, 133.0));
    c.start_run(6).unwrap();
    for _ in 0..500 {
        c.tick().unwrap();
    }

    let centroid = Point::new(200.0, 133.3);
    let near_centroid = c
        .marks()
        .iter()
        .skip(10)
        .filter(|m| {
            let dx = m.point.x - centroid.x;
            let dy = m.point.y - centroid.y;
            (dx * dx + dy * dy).sqrt() < 40.0
        })
        .count();
    assert_eq!(0, near_centroid);
}

#[test]
fn reset_mid_run_then_replay_from_scratch() {
    let mut c = SimulationController::with_seed(21);
    let events = Rc::new(RefCell::new(Vec::new()));
    c.add_sink(Box::new(Recorder(events.clone())));

    place_triangle(&mut c);
    c.confirm_anchors();
    c.pointer_pressed(Point::new(80.0, 80.0)).unwrap();
    c.start_run(4).unwrap();
    for _ in 0..50 {
        c.tick().unwrap();
    }
    assert!(!c.marks().is_empty());

    c.reset();
    assert_eq!(Phase::EditingAnchors, c.phase());
    assert!(c.anchors().is_empty());
    assert_eq!(None, c.seed());
    assert_eq!(None, c.current_track());
    assert!(c.marks().is_empty());

    // the field is fully reusable: names restart at "A" and a new game
    // plays out normally
    let before = events.borrow().len();
    place_triangle(&mut c);
    assert_eq!("A", c.anchors()[0].name);
    assert_eq!("B", c.anchors()[1].name);
    assert_eq!("C", c.anchors()[2].name);
    c.confirm_anchors();
    c.pointer_pressed(Point::new(80.0, 80.0)).unwrap();
    c.start_run(2).unwrap();
    assert!(c.tick().unwrap().is_some());
    assert_eq!(1, c.marks().len());
    // three anchor events, one seed event, one mark event since the reset
    assert_eq!(before + 5, events.borrow().len());
}

#[test]
fn event_stream_matches_field_contents() {
    let mut c = SimulationController::with_seed(9);
    let events = Rc::new(RefCell::new(Vec::new()));
    c.add_sink(Box::new(Recorder(events.clone())));

    place_triangle(&mut c);
    c.confirm_anchors();
    c.pointer_pressed(Point::new(10.0, 10.0)).unwrap();
    c.start_run(2).unwrap();
    for _ in 0..100 {
        c.tick().unwrap();
    }

    let events = events.borrow();
    let anchor_events: Vec<_> = events
        .iter()
        .filter(|e| e.kind == DotKind::Anchor)
        .collect();
    let mark_events: Vec<_> = events
        .iter()
        .filter(|e| e.kind == DotKind::TrackMark)
        .collect();

    assert_eq!(c.anchors().len(), anchor_events.len());
    for (anchor, event) in c.anchors().iter().zip(&anchor_events) {
        assert_eq!(anchor.point, event.point);
        assert_eq!(Some(anchor.color), event.color);
        assert_eq!(Some(anchor.name.clone()), event.name);
    }

    // one mark event per recorded mark, in order
    assert_eq!(c.marks().len(), mark_events.len());
    for (mark, event) in c.marks().iter().zip(&mark_events) {
        assert_eq!(mark.point, event.point);
        assert_eq!(Some(mark.color), event.color);
    }
}
