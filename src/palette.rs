// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::datamodel::Color;

/// The field background; everything in `EXCLUDED_COLORS` is too close to it
/// to be legible as an anchor dot.
pub const FIELD_BACKGROUND: Color = Color::rgb(0, 0, 0);

/// Lawn green, the fixed color of the seed dot.
pub const SEED_COLOR: Color = Color::rgb(0x7c, 0xfc, 0x00);

/// Yellow, the fixed color of the moving current-track dot.
pub const CURRENT_TRACK_COLOR: Color = Color::rgb(0xff, 0xff, 0x00);

/// Source of anchor colors.
///
/// Implementations must never return a color from `EXCLUDED_COLORS` and
/// should return visually distinct colors across successive calls;
/// determinism is not required. The engine assumes `next_color` is
/// infallible.
pub trait Palette {
    fn next_color(&mut self) -> Color;
}

/// Named colors indistinguishable from the dark field background.
pub const EXCLUDED_COLORS: [(&str, Color); 6] = [
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("dark_blue", Color::rgb(0x00, 0x00, 0x8b)),
    ("indigo", Color::rgb(0x4b, 0x00, 0x82)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("midnight_blue", Color::rgb(0x19, 0x19, 0x70)),
    ("medium_blue", Color::rgb(0x00, 0x00, 0xcd)),
];

// The named-color roster anchors draw from, excluded colors included; the
// filter is applied once when ALLOWED_COLORS is first touched.
const NAMED_COLORS: [(&str, Color); 38] = [
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("dark_blue", Color::rgb(0x00, 0x00, 0x8b)),
    ("indigo", Color::rgb(0x4b, 0x00, 0x82)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("midnight_blue", Color::rgb(0x19, 0x19, 0x70)),
    ("medium_blue", Color::rgb(0x00, 0x00, 0xcd)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("crimson", Color::rgb(0xdc, 0x14, 0x3c)),
    ("orange", Color::rgb(0xff, 0xa5, 0x00)),
    ("dark_orange", Color::rgb(0xff, 0x8c, 0x00)),
    ("gold", Color::rgb(0xff, 0xd7, 0x00)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
    ("lawn_green", Color::rgb(0x7c, 0xfc, 0x00)),
    ("lime", Color::rgb(0x00, 0xff, 0x00)),
    ("spring_green", Color::rgb(0x00, 0xff, 0x7f)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("sea_green", Color::rgb(0x2e, 0x8b, 0x57)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("cyan", Color::rgb(0x00, 0xff, 0xff)),
    ("turquoise", Color::rgb(0x40, 0xe0, 0xd0)),
    ("sky_blue", Color::rgb(0x87, 0xce, 0xeb)),
    ("deep_sky_blue", Color::rgb(0x00, 0xbf, 0xff)),
    ("dodger_blue", Color::rgb(0x1e, 0x90, 0xff)),
    ("royal_blue", Color::rgb(0x41, 0x69, 0xe1)),
    ("slate_blue", Color::rgb(0x6a, 0x5a, 0xcd)),
    ("violet", Color::rgb(0xee, 0x82, 0xee)),
    ("magenta", Color::rgb(0xff, 0x00, 0xff)),
    ("orchid", Color::rgb(0xda, 0x70, 0xd6)),
    ("deep_pink", Color::rgb(0xff, 0x14, 0x93)),
    ("hot_pink", Color::rgb(0xff, 0x69, 0xb4)),
    ("salmon", Color::rgb(0xfa, 0x80, 0x72)),
    ("coral", Color::rgb(0xff, 0x7f, 0x50)),
    ("tomato", Color::rgb(0xff, 0x63, 0x47)),
    ("chocolate", Color::rgb(0xd2, 0x69, 0x1e)),
    ("tan", Color::rgb(0xd2, 0xb4, 0x8c)),
    ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
];

lazy_static! {
    static ref ALLOWED_COLORS: Vec<Color> = {
        NAMED_COLORS
            .iter()
            .filter(|(name, _)| !EXCLUDED_COLORS.iter().any(|(bad, _)| bad == name))
            .map(|(_, color)| *color)
            .collect()
    };
}

/// The default palette: a uniform random draw over the allowed named colors.
pub struct RandomPalette {
    rng: StdRng,
}

impl RandomPalette {
    pub fn new() -> Self {
        RandomPalette {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPalette {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette for RandomPalette {
    fn next_color(&mut self) -> Color {
        ALLOWED_COLORS[self.rng.random_range(0..ALLOWED_COLORS.len())]
    }
}
