//! Axis-aligned extents of the rotated `length` x `size` rectangle.

use serde::Serialize;

use super::LogoInputs;
use crate::trig::{cos_deg, sin_deg};

/// Height (`rh*`) and width (`rw*`) contributions of the rotated rectangle.
///
/// `rh` and `rw` are the full extents; the primed values are the
/// length-side and size-side parts they are summed from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Projections {
    pub rh: f64,
    pub rhp: f64,
    pub rhpp: f64,
    pub rw: f64,
    pub rwp: f64,
    pub rwpp: f64,
}

impl Projections {
    pub fn compute(inputs: &LogoInputs) -> Self {
        let angle = inputs.angle as f64;
        let size = inputs.size as f64;
        let length = inputs.length as f64;

        let (sin, cos) = (sin_deg(angle), cos_deg(angle));

        Self {
            rh: sin * length + cos * size,
            rhp: sin * length,
            rhpp: cos * size,
            rw: cos * length + sin * size,
            rwp: cos * length,
            rwpp: sin * size,
        }
    }

    /// Labelled values in display order
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("rh", self.rh),
            ("rhp", self.rhp),
            ("rhpp", self.rhpp),
            ("rw", self.rw),
            ("rwp", self.rwp),
            ("rwpp", self.rwpp),
        ]
    }
}
