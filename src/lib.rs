// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Core of an interactive chaos-game fractal generator.
//!
//! A user places anchor points and a seed on a 2-D field; on each tick the
//! engine picks an anchor uniformly at random, moves the tracked point
//! toward it by 1/factor, and permanently marks the vacated position. Over
//! many iterations the marks trace out an iterated-function-system
//! attractor (the classic Sierpinski triangle with three anchors and
//! factor 2).
//!
//! The crate is the simulation core only: rendering, grid drawing, pointer
//! plumbing, and the periodic timer all live in the embedder, which drives
//! [`SimulationController`] and observes the field through [`EventSink`].

#![forbid(unsafe_code)]

pub mod common;
mod controller;
pub mod datamodel;
mod engine;
mod naming;
pub mod palette;
mod registry;

pub use self::common::{Error, ErrorCode, ErrorKind, Result};
pub use self::controller::{EventSink, MIN_ANCHORS, Phase, SimulationController};
pub use self::datamodel::{
    Anchor, Color, DotKind, FACTOR_PRESETS, FactorPreset, Point, PointEvent, TrackMark,
};
pub use self::engine::{StepResult, step};
pub use self::palette::{Palette, RandomPalette};
pub use self::registry::PointRegistry;
