//! Shoulder segment geometry.
//!
//! The single angle formula used by both metrics: the upper-arm
//! segment (shoulder to elbow) measured against the downward image
//! vertical. Flexion and abduction differ only in whether a frame
//! qualifies, never in how the angle is computed.

use crate::constants::ZERO_VECTOR_EPSILON;

/// Angle of the shoulder-to-elbow segment relative to the downward
/// vertical image axis, in degrees.
///
/// Image coordinates have +Y pointing down, so 0° is an arm hanging
/// straight down, ~90° horizontal and ~180° raised straight up.
/// Coincident points yield 0° rather than an error.
#[must_use]
pub fn angle_from_vertical(shoulder: (f64, f64), elbow: (f64, f64)) -> f64 {
    let vx = elbow.0 - shoulder.0;
    let vy = elbow.1 - shoulder.1;
    let norm = (vx * vx + vy * vy).sqrt();
    if norm < ZERO_VECTOR_EPSILON {
        return 0.0;
    }

    // Dot product with the downward unit vector (0, 1) is just vy.
    // Clamp guards against floating-point overshoot before acos.
    let cos_angle = (vy / norm).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees().clamp(0.0, 180.0)
}
