// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::Result;
use crate::datamodel::{Anchor, Color, DotKind, Point, PointEvent, TrackMark};
use crate::engine::{self, StepResult};
use crate::palette::{Palette, RandomPalette, SEED_COLOR};
use crate::registry::PointRegistry;
use crate::sim_err;

/// Fewer anchors than this cannot define a meaningful attractor.
pub const MIN_ANCHORS: usize = 3;

const USER_MARK_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

/// Where the field is in its edit/place/run lifecycle.
///
/// The machine only ever moves forward -- the sole way back to
/// `EditingAnchors` is an explicit `reset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Initial state: pointer input adds anchors.
    EditingAnchors,
    /// Anchors confirmed (at least `MIN_ANCHORS`); pointer input places
    /// the seed. Anchors may still be added.
    PlacingSeed,
    /// A seed exists; pointer input replaces it, and a run may start.
    SeedPlaced,
    /// Iterating. Anchors and seed are frozen; ticks advance the track
    /// point and accumulate marks.
    Running,
}

/// Observer of dots added to the field, for rendering and for re-evaluating
/// UI affordances. Called synchronously from whichever controller operation
/// added the dot.
pub trait EventSink {
    fn point_added(&mut self, event: &PointEvent);
}

/// The single entry point the view layer talks to.
///
/// Owns the registry exclusively and phase-checks every operation before
/// mutating it, so rejected input is a quiet `false` and an `Err` always
/// means broken wiring rather than a user mistake. The periodic tick driver
/// lives outside the crate; it calls `tick` and is expected to stop once
/// `is_running` goes false.
pub struct SimulationController {
    registry: PointRegistry,
    phase: Phase,
    factor: i32,
    rng: StdRng,
    sinks: Vec<Box<dyn EventSink>>,
}

impl SimulationController {
    pub fn new() -> Self {
        Self::with_parts(Box::new(RandomPalette::new()), StdRng::from_os_rng())
    }

    /// A fully reproducible controller: seeds both the palette and the
    /// anchor-selection rng.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(
            Box::new(RandomPalette::with_seed(seed)),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_parts(palette: Box<dyn Palette>, rng: StdRng) -> Self {
        SimulationController {
            registry: PointRegistry::new(palette),
            phase: Phase::EditingAnchors,
            factor: 2,
            rng,
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Adds an anchor at `p`. Quietly rejected while running or when an
    /// anchor already sits at that exact coordinate.
    pub fn add_anchor_at(&mut self, p: Point) -> Result<bool> {
        if self.phase == Phase::Running {
            return Ok(false);
        }

        let added: Option<Anchor> = self.registry.add_anchor(p)?.cloned();
        match added {
            Some(anchor) => {
                self.emit(PointEvent {
                    kind: DotKind::Anchor,
                    point: anchor.point,
                    color: Some(anchor.color),
                    name: Some(anchor.name),
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Places (or replaces) the seed. Rejected while running or before
    /// `MIN_ANCHORS` anchors exist.
    pub fn place_seed_at(&mut self, p: Point) -> bool {
        if self.phase == Phase::Running || self.registry.anchors().len() < MIN_ANCHORS {
            return false;
        }

        self.registry.set_seed(p);
        self.phase = Phase::SeedPlaced;
        self.emit(PointEvent {
            kind: DotKind::Seed,
            point: p,
            color: Some(SEED_COLOR),
            name: None,
        });
        true
    }

    /// The "anchors are done" affordance: moves pointer routing from anchor
    /// placement to seed placement. Rejected before `MIN_ANCHORS` anchors.
    pub fn confirm_anchors(&mut self) -> bool {
        if self.phase != Phase::EditingAnchors || self.registry.anchors().len() < MIN_ANCHORS {
            return false;
        }
        self.phase = Phase::PlacingSeed;
        true
    }

    /// Starts a run with the given distance factor. The factor is fixed for
    /// the whole run; the seed becomes the initial track point.
    ///
    /// `Ok(false)` means the action is not available yet (no seed placed);
    /// a factor below 2 is caller misuse and an error.
    pub fn start_run(&mut self, factor: i32) -> Result<bool> {
        if factor < 2 {
            return sim_err!(BadFactor, format!("factor {factor} < 2"));
        }
        if self.phase != Phase::SeedPlaced {
            return Ok(false);
        }

        let seed = match self.registry.seed() {
            Some(seed) => seed,
            None => {
                debug_assert!(false, "SeedPlaced without a seed");
                return sim_err!(NoTrackPoint, "no seed to start from".to_owned());
            }
        };

        self.registry.begin_track(seed);
        self.factor = factor;
        self.phase = Phase::Running;
        Ok(true)
    }

    /// One iteration, called by the external periodic driver.
    ///
    /// Outside the running phase this is a benign no-op (`Ok(None)`), so a
    /// timer firing late after a reset cannot corrupt anything. A missing
    /// track point while running is an invariant violation: `start_run` is
    /// the only door into the phase and it always sets one.
    pub fn tick(&mut self) -> Result<Option<StepResult>> {
        if self.phase != Phase::Running {
            return Ok(None);
        }

        let current = match self.registry.track() {
            Some(current) => current,
            None => {
                debug_assert!(false, "running without a track point");
                return sim_err!(NoTrackPoint);
            }
        };

        let result = engine::step(self.registry.anchors(), current, self.factor, &mut self.rng)?;
        let mark_color = self.registry.anchors()[result.chosen].color;

        if self
            .registry
            .mark_and_advance(result.mark, result.next_track, mark_color)
        {
            self.emit(PointEvent {
                kind: DotKind::TrackMark,
                point: result.mark,
                color: Some(mark_color),
                name: None,
            });
        }

        Ok(Some(result))
    }

    /// Routes a raw pointer click by phase: anchors while editing, the seed
    /// once anchors are confirmed, and a plain non-advancing mark during a
    /// run (clicks never steer the simulation).
    pub fn pointer_pressed(&mut self, p: Point) -> Result<bool> {
        match self.phase {
            Phase::EditingAnchors => self.add_anchor_at(p),
            Phase::PlacingSeed | Phase::SeedPlaced => Ok(self.place_seed_at(p)),
            Phase::Running => {
                let added = self.registry.mark(p, USER_MARK_COLOR);
                if added {
                    self.emit(PointEvent {
                        kind: DotKind::TrackMark,
                        point: p,
                        color: Some(USER_MARK_COLOR),
                        name: None,
                    });
                }
                Ok(added)
            }
        }
    }

    /// Stops any run and clears the field back to the initial state.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.phase = Phase::EditingAnchors;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn anchors(&self) -> &[Anchor] {
        self.registry.anchors()
    }

    pub fn seed(&self) -> Option<Point> {
        self.registry.seed()
    }

    pub fn current_track(&self) -> Option<Point> {
        self.registry.track()
    }

    pub fn marks(&self) -> &[TrackMark] {
        self.registry.marks()
    }

    /// Whether the "confirm anchors" affordance should be enabled.
    pub fn can_confirm_anchors(&self) -> bool {
        self.phase == Phase::EditingAnchors && self.registry.anchors().len() >= MIN_ANCHORS
    }

    /// Whether the "start" affordance should be enabled: at least
    /// `MIN_ANCHORS` anchors and a placed seed.
    pub fn can_start(&self) -> bool {
        self.phase == Phase::SeedPlaced
            && self.registry.seed().is_some()
            && self.registry.anchors().len() >= MIN_ANCHORS
    }

    fn emit(&mut self, event: PointEvent) {
        for sink in self.sinks.iter_mut() {
            sink.point_added(&event);
        }
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new()
    }
}
