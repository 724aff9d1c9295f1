// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashSet;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::common::Result;
use crate::datamodel::{Anchor, Color, Point, TrackMark};
use crate::naming;
use crate::palette::Palette;

// Hashable form of a coordinate; Point itself is raw f64s.
type PointKey = (OrderedFloat<f64>, OrderedFloat<f64>);

fn key(p: Point) -> PointKey {
    (OrderedFloat(p.x), OrderedFloat(p.y))
}

/// The canonical owner of everything on the field: the anchor roster, the
/// optional seed, the optional active track point, and the accumulated
/// track marks.
///
/// Uniqueness is enforced per category only -- an anchor and the seed may
/// share a coordinate. Mutation happens exclusively through the
/// `SimulationController`, which phase-checks every operation first.
pub struct PointRegistry {
    anchors: SmallVec<[Anchor; 8]>,
    seed: Option<Point>,
    track: Option<Point>,
    marks: Vec<TrackMark>,
    mark_index: HashSet<PointKey>,
    palette: Box<dyn Palette>,
}

impl PointRegistry {
    pub fn new(palette: Box<dyn Palette>) -> Self {
        PointRegistry {
            anchors: SmallVec::new(),
            seed: None,
            track: None,
            marks: Vec::new(),
            mark_index: HashSet::new(),
            palette,
        }
    }

    /// Adds an anchor at `p`, allocating its name and color.
    ///
    /// Returns `Ok(None)` without touching any state if an anchor already
    /// sits at exactly that coordinate; duplicate clicks are normal
    /// interaction, not errors. Name-space exhaustion is the only failure.
    pub fn add_anchor(&mut self, p: Point) -> Result<Option<&Anchor>> {
        if self.anchors.iter().any(|a| a.point == p) {
            return Ok(None);
        }

        let names: HashSet<String> = self.anchors.iter().map(|a| a.name.clone()).collect();
        let name = naming::next_name(&names)?;
        let color = self.palette.next_color();

        self.anchors.push(Anchor {
            point: p,
            name,
            color,
        });

        Ok(self.anchors.last())
    }

    /// Replaces any existing seed with a new one at `p`.
    pub fn set_seed(&mut self, p: Point) {
        self.seed = Some(p);
    }

    /// Sets the active track point, discarding the previous one. Existing
    /// marks are untouched; a fresh run clears them via `reset`.
    pub fn begin_track(&mut self, p: Point) {
        self.track = Some(p);
    }

    /// Records a mark at `from` (skipped if that exact coordinate is
    /// already marked) and moves the active track point to `to`.
    ///
    /// Returns whether a new mark was actually recorded.
    pub fn mark_and_advance(&mut self, from: Point, to: Point, mark_color: Color) -> bool {
        let added = self.mark(from, mark_color);
        self.track = Some(to);
        added
    }

    /// Records a standalone mark, idempotently per coordinate.
    pub fn mark(&mut self, at: Point, color: Color) -> bool {
        if !self.mark_index.insert(key(at)) {
            return false;
        }
        self.marks.push(TrackMark { point: at, color });
        true
    }

    /// Clears anchors, seed, track point, and marks; the result is
    /// indistinguishable from a freshly constructed registry.
    pub fn reset(&mut self) {
        self.anchors.clear();
        self.seed = None;
        self.track = None;
        self.marks.clear();
        self.mark_index.clear();
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn seed(&self) -> Option<Point> {
        self.seed
    }

    pub fn track(&self) -> Option<Point> {
        self.track
    }

    pub fn marks(&self) -> &[TrackMark] {
        &self.marks
    }
}
