//! Alignment and rounding primitives plus the inclusive pixel rectangle
//! shared by crop and paste planning. Pure functions, no state.
use serde::{Deserialize, Serialize};

/// Inclusive pixel rectangle: both `max` bounds are part of the region.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl Rect {
    pub fn new(min_x: u32, max_x: u32, min_y: u32, max_y: u32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Inclusive width; zero when the rectangle is inverted.
    pub fn width(&self) -> u32 {
        if self.max_x < self.min_x {
            0
        } else {
            self.max_x - self.min_x + 1
        }
    }

    /// Inclusive height; zero when the rectangle is inverted.
    pub fn height(&self) -> u32 {
        if self.max_y < self.min_y {
            0
        } else {
            self.max_y - self.min_y + 1
        }
    }

    /// A hardware-consumable window needs even min edges, odd max edges,
    /// which implies a strict `min < max` on both axes.
    pub fn is_degenerate(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Smallest multiple of `n` that is `>= value`. `n` must be a power of two.
pub fn align_up(value: u32, n: u32) -> u32 {
    debug_assert!(n.is_power_of_two());
    (value + n - 1) & !(n - 1)
}

/// Force an even count: odd values lose their last pixel.
pub fn even_trim(value: u32) -> u32 {
    value & !1
}
