// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use rand::Rng;

use crate::common::Result;
use crate::datamodel::{Anchor, Point};
use crate::sim_err;

/// Outcome of one chaos-game iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Index of the randomly chosen anchor in the roster passed to `step`.
    pub chosen: usize,
    /// Where the moving point lands, 1/factor of the way toward the anchor.
    pub next_track: Point,
    /// The position just vacated, to be permanently marked with the chosen
    /// anchor's color.
    pub mark: Point,
}

/// One iteration of the chaos game: pick an anchor uniformly at random and
/// move `current` toward it by 1/factor per axis.
///
/// Pure in everything but the rng, which makes a seeded run fully
/// reproducible: the same rng state, roster, factor, and starting point
/// always yield the same sequence of choices and positions.
///
/// An empty roster or a factor below 2 is a defect in the caller -- the
/// controller establishes both before entering the running phase -- and
/// fails fast rather than being papered over.
pub fn step<R: Rng>(
    anchors: &[Anchor],
    current: Point,
    factor: i32,
    rng: &mut R,
) -> Result<StepResult> {
    debug_assert!(!anchors.is_empty(), "step() with no anchors");
    debug_assert!(factor >= 2, "step() with factor {factor}");
    if anchors.is_empty() {
        return sim_err!(NoAnchors);
    }
    if factor < 2 {
        return sim_err!(BadFactor, format!("factor {factor} < 2"));
    }

    let chosen = rng.random_range(0..anchors.len());
    let target = anchors[chosen].point;

    let next_track = Point::new(
        toward(target.x, current.x, factor),
        toward(target.y, current.y, factor),
    );

    Ok(StepResult {
        chosen,
        next_track,
        mark: current,
    })
}

// Weighted midpoint on one axis: with factor 2 this is the arithmetic
// midpoint, with larger factors the result hugs the anchor.
fn toward(anchor: f64, current: f64, factor: i32) -> f64 {
    (current + anchor * (factor - 1) as f64) / factor as f64
}
