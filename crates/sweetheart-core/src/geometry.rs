//! Container bounds and random offsets for the evasive controls.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Footprint reserved for a control when picking a random spot (px).
pub const CONTROL_WIDTH: f64 = 150.0;
pub const CONTROL_HEIGHT: f64 = 80.0;

/// Displacement from a control's natural position, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value for this offset.
    pub fn to_translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Measured size of the container the controls move within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal span a control can move across (never negative).
    pub fn free_width(&self) -> f64 {
        (self.width - CONTROL_WIDTH).max(0.0)
    }

    /// Vertical span a control can move across (never negative).
    pub fn free_height(&self) -> f64 {
        (self.height - CONTROL_HEIGHT).max(0.0)
    }

    /// Whether `offset` keeps a control inside the container.
    pub fn contains(&self, offset: Offset) -> bool {
        offset.x.abs() <= self.free_width() / 2.0 && offset.y.abs() <= self.free_height() / 2.0
    }
}

/// Pick a centered random displacement inside `bounds`.
///
/// Unmeasured bounds fall back to [`Offset::ZERO`].
pub fn random_offset<R: Rng>(rng: &mut R, bounds: Option<Bounds>) -> Offset {
    let Some(bounds) = bounds else {
        return Offset::ZERO;
    };

    let rx: f64 = rng.random();
    let ry: f64 = rng.random();
    Offset {
        x: (rx - 0.5) * bounds.free_width(),
        y: (ry - 0.5) * bounds.free_height(),
    }
}
