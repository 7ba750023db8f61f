//! Bounded 1–5 slider value.

use serde::{Deserialize, Serialize};

/// Integer slider value, always within `[Level::MIN, Level::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    /// Build a level, clamping out-of-range input.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Move by `delta` steps, clamping at the bounds.
    pub fn step(self, delta: i64) -> Self {
        Self::new(self.0 as i64 + delta)
    }

    /// Position of the value within the range, `0.0` at MIN and `1.0` at MAX.
    pub fn fraction(self) -> f64 {
        (self.0 - Self::MIN) as f64 / (Self::MAX - Self::MIN) as f64
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
