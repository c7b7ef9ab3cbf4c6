mod layout;
mod projection;

pub use layout::LogoLayout;
pub use projection::Projections;

use serde::Serialize;
use std::fmt;

/// The three values a layout is derived from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LogoInputs {
    /// Rotation of the logo rectangle in degrees
    pub angle: i64,
    /// Short side of the rectangle
    pub size: i64,
    /// Long side of the rectangle
    pub length: i64,
}

impl LogoInputs {
    pub fn new(angle: i64, size: i64, length: i64) -> Self {
        Self { angle, size, length }
    }
}

/// A 2D coordinate in logo space
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
