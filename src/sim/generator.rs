//! Next-platform placement
//!
//! Two independent draws per landing: a uniform `n` in [0, 1) picks the gap
//! from a piecewise schedule, and an integer in 2..12 picks the axis by parity.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::platform::Platform;
use super::transform::Axis;

/// Gap between platform centres for a uniform draw `n` in [0, 1)
pub fn gap_for_draw(n: f64) -> f32 {
    let gap = if n <= 0.1 {
        0.30 + n
    } else if n <= 0.2 {
        0.20 + n
    } else if n < 0.5 {
        0.10 + n
    } else if n < 0.7 {
        n - 0.20
    } else {
        n - 0.40
    };
    gap as f32
}

/// Even draws go along X, odd draws along Z
pub fn axis_for_draw(draw: u32) -> Axis {
    if draw.is_multiple_of(2) { Axis::X } else { Axis::Z }
}

/// A freshly generated platform and the axis the figure must now face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub platform: Platform,
    pub axis: Axis,
    pub gap: f32,
}

/// Seeded platform generator
#[derive(Debug, Clone)]
pub struct PlatformGenerator {
    rng: Pcg32,
}

impl PlatformGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Place the next platform relative to `from` (the platform just landed on)
    pub fn next(&mut self, from: &Platform) -> Placement {
        let axis = axis_for_draw(self.rng.random_range(2..12));
        let gap = gap_for_draw(self.rng.random::<f64>());
        Placement {
            platform: from.offset_along(axis, gap),
            axis,
            gap,
        }
    }
}
