use std::f32::consts::{PI, TAU};
use std::ops::AddAssign;

/// A rotation angle in radians.
///
/// Positive values turn clockwise on screen, since egui's y axis points down.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    pub fn radians(self) -> f32 {
        self.0
    }

    pub fn degrees(self) -> f32 {
        self.0.to_degrees()
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Shortest signed turn from `from` to `to`, in (-π, π]
    pub fn between(from: f32, to: f32) -> Self {
        let mut delta = (to - from) % TAU;
        if delta > PI {
            delta -= TAU;
        } else if delta <= -PI {
            delta += TAU;
        }
        Self(delta)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
