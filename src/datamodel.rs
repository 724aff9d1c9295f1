// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// An immutable 2-D coordinate on the field.
///
/// Equality is exact coordinate equality with no tolerance -- that is the
/// de-duplication rule for anchors and track marks, so two points produced
/// by different arithmetic are equal only if their bits agree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An opaque RGB color; the engine never interprets channels beyond
/// excluding near-background colors from the anchor palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The categories of dots that can appear on the field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DotKind {
    /// A fixed target point the iteration jumps toward.
    Anchor,
    /// The user-chosen starting position for a run.
    Seed,
    /// The moving point, recomputed every iteration.
    CurrentTrack,
    /// A permanently recorded position the moving point passed through.
    TrackMark,
}

/// A fixed, named, colored target point.
///
/// Anchors are immutable once created: the name comes from the registry's
/// allocator (never user input), the color from the palette provider, and
/// the only way to remove an anchor is a full reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point,
    pub name: String,
    pub color: Color,
}

/// A permanently marked position, colored by the anchor chosen on the step
/// that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackMark {
    pub point: Point,
    pub color: Color,
}

/// Payload broadcast to `EventSink`s whenever a dot is added to the field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointEvent {
    pub kind: DotKind,
    pub point: Point,
    pub color: Option<Color>,
    pub name: Option<String>,
}

/// A distance-factor choice offered to the user, with the fraction glyph
/// the UI shows for it (1/factor is how far the point moves each step).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FactorPreset {
    pub glyph: &'static str,
    pub value: i32,
}

/// The factor presets the original field offers: ½ through ⅙.
pub const FACTOR_PRESETS: [FactorPreset; 5] = [
    FactorPreset {
        glyph: "\u{00bd}",
        value: 2,
    },
    FactorPreset {
        glyph: "\u{2153}",
        value: 3,
    },
    FactorPreset {
        glyph: "\u{00bc}",
        value: 4,
    },
    FactorPreset {
        glyph: "\u{2155}",
        value: 5,
    },
    FactorPreset {
        glyph: "\u{2159}",
        value: 6,
    },
];
