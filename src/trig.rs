//! Degree-based trigonometry.

/// Cosine of an angle given in degrees.
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Sine of an angle given in degrees.
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}
